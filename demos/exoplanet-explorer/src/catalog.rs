/// Static exoplanet catalog: one flat record per planet, grouped into
/// systems by host-star name.

use std::collections::HashMap;

use serde::Deserialize;

use crate::climate::{equilibrium_temperature, PlanetClass, DEFAULT_ALBEDO};

/// One row of the catalog. Star fields repeat on every planet of a system.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlanetRecord {
    pub star_name: String,
    /// Solar radii.
    pub star_radius: f64,
    /// Solar masses.
    pub star_mass: f64,
    /// Kelvin.
    pub star_temperature: f64,
    pub planet_name: String,
    /// Earth radii.
    pub planet_radius: f64,
    /// Earth masses.
    #[serde(default)]
    pub planet_mass: Option<f64>,
    /// Kelvin, when measured.
    #[serde(default)]
    pub planet_temperature: Option<f64>,
    /// Days.
    #[serde(default)]
    pub orbital_period: Option<f64>,
    /// Parsecs from Earth.
    #[serde(default)]
    pub distance: Option<f64>,
}

impl PlanetRecord {
    /// Measured temperature, or the equilibrium estimate when the period is known.
    pub fn temperature(&self) -> Option<f64> {
        self.planet_temperature.or_else(|| {
            self.orbital_period.map(|period| {
                equilibrium_temperature(
                    self.star_temperature,
                    self.star_mass,
                    self.star_radius,
                    period,
                    DEFAULT_ALBEDO,
                )
            })
        })
    }

    pub fn class(&self) -> PlanetClass {
        PlanetClass::from_temperature(self.temperature())
    }
}

/// A star and its planets, in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct StarSystem {
    pub planets: Vec<PlanetRecord>,
}

/// Host-star fields of a system.
#[derive(Debug, Clone, PartialEq)]
pub struct StarSummary {
    pub star_name: String,
    pub star_radius: f64,
    pub star_mass: f64,
    pub star_temperature: f64,
    pub distance: Option<f64>,
}

impl StarSystem {
    /// Star fields come from the first record.
    pub fn star(&self) -> Option<StarSummary> {
        self.planets.first().map(|p| StarSummary {
            star_name: p.star_name.clone(),
            star_radius: p.star_radius,
            star_mass: p.star_mass,
            star_temperature: p.star_temperature,
            distance: p.distance,
        })
    }

    pub fn star_name(&self) -> &str {
        self.planets.first().map(|p| p.star_name.as_str()).unwrap_or_default()
    }
}

/// All systems, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    systems: Vec<StarSystem>,
    /// Host-star name to position in `systems`.
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn from_records(records: Vec<PlanetRecord>) -> Self {
        let mut systems: Vec<StarSystem> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for record in records {
            match index.get(&record.star_name) {
                Some(&i) => systems[i].planets.push(record),
                None => {
                    index.insert(record.star_name.clone(), systems.len());
                    systems.push(StarSystem { planets: vec![record] });
                }
            }
        }
        Self { systems, index }
    }

    /// Exact host-star match first, then a case-insensitive one.
    pub fn system(&self, star_name: &str) -> Option<&StarSystem> {
        let name = star_name.trim();
        self.index
            .get(name)
            .map(|&i| &self.systems[i])
            .or_else(|| self.systems.iter().find(|s| s.star_name().eq_ignore_ascii_case(name)))
    }

    pub fn star(&self, star_name: &str) -> Option<StarSummary> {
        self.system(star_name).and_then(StarSystem::star)
    }

    /// Case-insensitive planet lookup across every system.
    pub fn planet(&self, planet_name: &str) -> Option<&PlanetRecord> {
        self.systems
            .iter()
            .flat_map(|s| s.planets.iter())
            .find(|p| p.planet_name.eq_ignore_ascii_case(planet_name))
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}
