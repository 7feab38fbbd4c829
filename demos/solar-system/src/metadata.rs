/// Body metadata from the public solar-system REST API
/// (`https://api.le-systeme-solaire.net/rest/bodies/`).
///
/// The page fetches the document once and hands it over as a JSON string.
/// Only the fields shown in the info panel are decoded.

use serde::Deserialize;

/// Earth's mass in kilograms.
pub const EARTH_MASS_KG: f64 = 5.972e24;
/// One astronomical unit in kilometers.
pub const AU_KM: f64 = 149_597_870.7;

#[derive(Debug, Clone, Deserialize)]
pub struct BodyCatalog {
    pub bodies: Vec<BodyRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyRecord {
    pub english_name: String,
    #[serde(default)]
    pub is_planet: bool,
    /// Kilometers.
    #[serde(default)]
    pub mean_radius: f64,
    /// Kilometers.
    #[serde(default)]
    pub semimajor_axis: f64,
    #[serde(default)]
    pub mass: Option<Mass>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mass {
    pub mass_value: f64,
    pub mass_exponent: i32,
}

impl Mass {
    pub fn kilograms(&self) -> f64 {
        self.mass_value * 10f64.powi(self.mass_exponent)
    }
}

impl BodyCatalog {
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Case-insensitive lookup by English name.
    pub fn find(&self, name: &str) -> Option<&BodyRecord> {
        self.bodies
            .iter()
            .find(|b| b.english_name.eq_ignore_ascii_case(name))
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl BodyRecord {
    pub fn earth_masses(&self) -> Option<f64> {
        self.mass.map(|m| m.kilograms() / EARTH_MASS_KG)
    }

    pub fn diameter_km(&self) -> Option<f64> {
        (self.mean_radius > 0.0).then_some(self.mean_radius * 2.0)
    }

    pub fn semimajor_au(&self) -> Option<f64> {
        (self.semimajor_axis > 0.0).then_some(self.semimajor_axis / AU_KM)
    }
}

/// Two decimals, or "N/A".
pub fn format_value(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{v:.2} {unit}"),
        None => String::from("N/A"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "bodies": [
            {
                "id": "terre",
                "englishName": "Earth",
                "isPlanet": true,
                "meanRadius": 6371.0084,
                "semimajorAxis": 149598023,
                "mass": { "massValue": 5.97237, "massExponent": 24 }
            },
            {
                "id": "soleil",
                "englishName": "Sun",
                "isPlanet": false,
                "meanRadius": 696342,
                "semimajorAxis": 0,
                "mass": { "massValue": 1.989, "massExponent": 30 }
            },
            {
                "id": "s2003j2",
                "englishName": "S/2003 J 2",
                "isPlanet": false,
                "meanRadius": 1,
                "semimajorAxis": 29541000,
                "mass": null
            }
        ]
    }"#;

    #[test]
    fn parses_and_finds_case_insensitively() {
        let catalog = BodyCatalog::parse(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.find("EARTH").is_some());
        assert!(catalog.find("sun").is_some());
        assert!(catalog.find("TRAPPIST-1 b").is_none());
    }

    #[test]
    fn mass_in_earth_masses() {
        let catalog = BodyCatalog::parse(SAMPLE).unwrap();
        let earth = catalog.find("Earth").unwrap();
        let m = earth.earth_masses().unwrap();
        assert!((m - 5.97237e24 / 5.972e24).abs() < 1e-12);
        assert_eq!(format_value(Some(m), "Earth masses"), "1.00 Earth masses");
    }

    #[test]
    fn diameter_is_twice_mean_radius() {
        let catalog = BodyCatalog::parse(SAMPLE).unwrap();
        let earth = catalog.find("Earth").unwrap();
        assert_eq!(earth.diameter_km(), Some(6371.0084 * 2.0));
        assert_eq!(format_value(earth.diameter_km(), "km"), "12742.02 km");
    }

    #[test]
    fn semimajor_axis_in_au() {
        let catalog = BodyCatalog::parse(SAMPLE).unwrap();
        let earth = catalog.find("Earth").unwrap();
        assert_eq!(format_value(earth.semimajor_au(), "AU"), "1.00 AU");
        assert_eq!(catalog.find("Sun").unwrap().semimajor_au(), None);
    }

    #[test]
    fn missing_mass_is_na() {
        let catalog = BodyCatalog::parse(SAMPLE).unwrap();
        let moonlet = catalog.find("s/2003 j 2").unwrap();
        assert_eq!(moonlet.earth_masses(), None);
        assert_eq!(format_value(moonlet.earth_masses(), "Earth masses"), "N/A");
    }

    #[test]
    fn rejects_malformed_document() {
        assert!(BodyCatalog::parse("{\"bodies\": 3}").is_err());
    }
}
