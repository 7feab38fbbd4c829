/// Equilibrium temperature estimate and temperature classes.

use serde::Serialize;

/// Gravitational constant, m³ kg⁻¹ s⁻².
pub const G: f64 = 6.674_30e-11;
pub const SOLAR_MASS_KG: f64 = 1.989e30;
pub const SOLAR_RADIUS_M: f64 = 6.96e8;
pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const DEFAULT_ALBEDO: f64 = 0.3;

/// Number of texture variants shipped per class.
pub const TEXTURES_PER_CLASS: u32 = 7;

/// Semi-major axis in meters from Kepler's third law.
pub fn semi_major_axis_m(star_mass_solar: f64, period_days: f64) -> f64 {
    let mass = star_mass_solar * SOLAR_MASS_KG;
    let period = period_days * SECONDS_PER_DAY;
    let a_cubed = G * mass * period * period / (4.0 * std::f64::consts::PI.powi(2));
    a_cubed.cbrt()
}

/// Equilibrium temperature in kelvin: `T★ · sqrt(R★ / 2a) · (1 − albedo)^¼`.
pub fn equilibrium_temperature(
    star_temperature: f64,
    star_mass_solar: f64,
    star_radius_solar: f64,
    period_days: f64,
    albedo: f64,
) -> f64 {
    let a = semi_major_axis_m(star_mass_solar, period_days);
    let r = star_radius_solar * SOLAR_RADIUS_M;
    star_temperature * (r / (2.0 * a)).sqrt() * (1.0 - albedo).powf(0.25)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanetClass {
    Hot,
    EarthLike,
    Icy,
}

impl PlanetClass {
    /// Above 310 K is hot, (200, 310] is earth-like, everything else
    /// (including an unknown temperature) is icy.
    pub fn from_temperature(kelvin: Option<f64>) -> Self {
        match kelvin {
            Some(t) if t > 310.0 => Self::Hot,
            Some(t) if t > 200.0 => Self::EarthLike,
            _ => Self::Icy,
        }
    }

    /// Asset folder name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::EarthLike => "earth_like",
            Self::Icy => "icy",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hot => "Hot",
            Self::EarthLike => "Earth-like",
            Self::Icy => "Icy",
        }
    }

    /// Texture path for this class, picked deterministically from `name`
    /// so a planet keeps its look across reloads.
    pub fn texture_for(self, name: &str) -> String {
        let variant = name_hash(name) % TEXTURES_PER_CLASS + 1;
        format!("assets/{}/planet{variant}.png", self.as_str())
    }
}

/// FNV-1a over the lowercase name.
pub fn name_hash(name: &str) -> u32 {
    name.bytes().fold(0x811c_9dc5u32, |h, b| {
        (h ^ b.to_ascii_lowercase() as u32).wrapping_mul(0x0100_0193)
    })
}
