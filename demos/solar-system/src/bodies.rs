/// Preset star systems: the Sun with its eight planets, and TRAPPIST-1.
///
/// Sizes and distances are scene units, exaggerated for readability.
/// Angular speeds are radians per frame.

// ── Sol ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 6.0;
pub const SOL_CAMERA_Z: f32 = 100.0;
pub const SOL_PLANET_COUNT: usize = 8;

/// (name, radius, orbit distance, angular speed)
const SOL_PLANETS: [(&str, f32, f32, f32); SOL_PLANET_COUNT] = [
    ("Mercury", 0.222, 10.0, 0.04),
    ("Venus", 0.564, 15.0, 0.02),
    ("Earth", 0.6, 20.0, 0.01),
    ("Mars", 0.294, 25.0, 0.008),
    ("Jupiter", 5.1, 80.0, 0.002),
    ("Saturn", 4.98, 60.0, 0.003),
    ("Uranus", 2.16, 35.0, 0.005),
    ("Neptune", 2.1, 45.0, 0.004),
];

// ── TRAPPIST-1 ───────────────────────────────────────────────────────

pub const TRAPPIST_RADIUS: f32 = 4.0;
pub const TRAPPIST_CAMERA_Z: f32 = 60.0;
pub const TRAPPIST_PLANET_COUNT: usize = 7;

const TRAPPIST_SUFFIXES: [&str; TRAPPIST_PLANET_COUNT] = ["b", "c", "d", "e", "f", "g", "h"];
const TRAPPIST_DISTANCES: [f32; TRAPPIST_PLANET_COUNT] = [8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0];
const TRAPPIST_RADII: [f32; TRAPPIST_PLANET_COUNT] = [0.8, 0.9, 0.85, 0.95, 1.0, 0.9, 0.8];
const TRAPPIST_SPEEDS: [f32; TRAPPIST_PLANET_COUNT] = [0.015, 0.012, 0.01, 0.008, 0.007, 0.006, 0.005];
/// Distances and radii are pushed out so the planets clear the star mesh.
const TRAPPIST_DISTANCE_PAD: f32 = 5.0;
const TRAPPIST_RADIUS_PAD: f32 = 1.0;

/// Static description of one planet in a preset.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetDesc {
    pub name: String,
    pub radius: f32,
    pub distance: f32,
    pub speed: f32,
    pub texture: String,
}

/// Static description of a whole system.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemPreset {
    pub title: &'static str,
    pub star_name: &'static str,
    pub star_radius: f32,
    pub star_texture: &'static str,
    pub camera_z: f32,
    pub planets: Vec<PlanetDesc>,
}

/// Which preset is on screen. The page switches by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    #[default]
    Sol,
    Trappist1,
}

impl Preset {
    /// Only exact integral indices map to a preset; fractions and NaN do not.
    pub fn from_index(index: f32) -> Option<Self> {
        if index == 0.0 {
            Some(Self::Sol)
        } else if index == 1.0 {
            Some(Self::Trappist1)
        } else {
            None
        }
    }

    pub fn index(self) -> f32 {
        match self {
            Self::Sol => 0.0,
            Self::Trappist1 => 1.0,
        }
    }

    pub fn build(self) -> SystemPreset {
        match self {
            Self::Sol => sol(),
            Self::Trappist1 => trappist1(),
        }
    }
}

pub fn sol() -> SystemPreset {
    let planets = SOL_PLANETS
        .iter()
        .map(|&(name, radius, distance, speed)| PlanetDesc {
            name: name.to_string(),
            radius,
            distance,
            speed,
            texture: format!("assets/{}.jpg", name.to_lowercase()),
        })
        .collect();

    SystemPreset {
        title: "Solar System",
        star_name: "Sun",
        star_radius: SUN_RADIUS,
        star_texture: "assets/sun.jpg",
        camera_z: SOL_CAMERA_Z,
        planets,
    }
}

pub fn trappist1() -> SystemPreset {
    let planets = (0..TRAPPIST_PLANET_COUNT)
        .map(|i| PlanetDesc {
            name: format!("TRAPPIST-1 {}", TRAPPIST_SUFFIXES[i]),
            radius: TRAPPIST_RADII[i] + TRAPPIST_RADIUS_PAD,
            distance: TRAPPIST_DISTANCES[i] + TRAPPIST_DISTANCE_PAD,
            speed: TRAPPIST_SPEEDS[i],
            texture: format!("assets/trappist-1/trappist1{}.png", TRAPPIST_SUFFIXES[i]),
        })
        .collect();

    SystemPreset {
        title: "TRAPPIST-1 System",
        star_name: "TRAPPIST-1",
        star_radius: TRAPPIST_RADIUS,
        star_texture: "assets/trappist-1/trappist_1.jpg",
        camera_z: TRAPPIST_CAMERA_Z,
        planets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sol_has_eight_planets() {
        let p = sol();
        assert_eq!(p.planets.len(), SOL_PLANET_COUNT);
        let earth = &p.planets[2];
        assert_eq!(earth.name, "Earth");
        assert_eq!(earth.distance, 20.0);
        assert_eq!(earth.texture, "assets/earth.jpg");
    }

    #[test]
    fn trappist_is_padded() {
        let p = trappist1();
        assert_eq!(p.planets.len(), TRAPPIST_PLANET_COUNT);
        let b = &p.planets[0];
        assert_eq!(b.name, "TRAPPIST-1 b");
        assert!((b.distance - 13.0).abs() < 1e-6);
        assert!((b.radius - 1.8).abs() < 1e-6);
        assert_eq!(p.planets[6].texture, "assets/trappist-1/trappist1h.png");
    }

    #[test]
    fn planets_clear_the_star() {
        for preset in [sol(), trappist1()] {
            for planet in &preset.planets {
                assert!(
                    planet.distance - planet.radius > preset.star_radius,
                    "{} overlaps {}",
                    planet.name,
                    preset.star_name
                );
            }
        }
    }

    #[test]
    fn preset_index_round_trip() {
        assert_eq!(Preset::from_index(Preset::Trappist1.index()), Some(Preset::Trappist1));
        assert_eq!(Preset::from_index(0.0), Some(Preset::Sol));
        assert_eq!(Preset::from_index(7.0), None);
        assert_eq!(Preset::from_index(0.9), None);
        assert_eq!(Preset::from_index(1.5), None);
        assert_eq!(Preset::from_index(-0.5), None);
        assert_eq!(Preset::from_index(f32::NAN), None);
    }
}
