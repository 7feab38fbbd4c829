//! Planet customization from the info panel's save form: a new size for the
//! selected planet, and an optional generated texture.
//!
//! The page POSTs the encoded request to the image service and hands the
//! JSON reply back through `scene_load_data`.

use serde::{Deserialize, Serialize};

pub const GENERATE_IMAGE_ENDPOINT: &str = "http://127.0.0.1:8000/generate_image/";

/// Surface checkboxes on the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SurfaceType {
    Cloudy,
    Gas,
    Rocky,
    Ice,
}

impl SurfaceType {
    pub const ALL: [SurfaceType; 4] = [
        SurfaceType::Cloudy,
        SurfaceType::Gas,
        SurfaceType::Rocky,
        SurfaceType::Ice,
    ];

    /// Bit in the checkbox mask the page sends: Cloudy = 1, Gas = 2, Rocky = 4, Ice = 8.
    pub fn bit(self) -> u32 {
        1 << self as u32
    }

    pub fn from_mask(mask: u32) -> Vec<SurfaceType> {
        Self::ALL.iter().copied().filter(|t| mask & t.bit() != 0).collect()
    }
}

/// Body of the image-generation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImageRequest {
    pub temperature: String,
    pub color: String,
    pub types: Vec<SurfaceType>,
}

impl ImageRequest {
    pub fn new(color: &str, temperature: &str, types_mask: u32) -> Self {
        Self {
            temperature: temperature.trim().to_string(),
            color: color.trim().to_string(),
            types: SurfaceType::from_mask(types_mask),
        }
    }

    /// Nothing picked on the form: no request is sent.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.color.is_empty() && self.temperature.is_empty()
    }

    pub fn encode(&self) -> Result<Option<String>, serde_json::Error> {
        if self.is_empty() {
            return Ok(None);
        }
        serde_json::to_string(self).map(Some)
    }
}

/// Reply of the image service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratedImage {
    pub img_url: String,
}

/// A slider value usable as a rendered radius.
pub fn valid_size(size: f32) -> Option<f32> {
    (size.is_finite() && size > 0.0).then_some(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn mask_maps_to_checkbox_names() {
        let types = SurfaceType::from_mask(SurfaceType::Gas.bit() | SurfaceType::Ice.bit());
        assert_eq!(types, [SurfaceType::Gas, SurfaceType::Ice]);
        assert!(SurfaceType::from_mask(0).is_empty());
        assert_eq!(SurfaceType::from_mask(0xff).len(), 4);
    }

    #[test]
    fn request_carries_form_fields() {
        let body = ImageRequest::new("#3366ff", "250", SurfaceType::Rocky.bit())
            .encode()
            .unwrap()
            .unwrap();
        let v: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(v["color"], "#3366ff");
        assert_eq!(v["temperature"], "250");
        assert_eq!(v["types"], serde_json::json!(["Rocky"]));
    }

    #[test]
    fn empty_form_sends_nothing() {
        let request = ImageRequest::new(" ", "", 0);
        assert!(request.is_empty());
        assert_eq!(request.encode().unwrap(), None);
        // Any single field is enough.
        assert!(!ImageRequest::new("", "", SurfaceType::Cloudy.bit()).is_empty());
        assert!(!ImageRequest::new("", "180", 0).is_empty());
    }

    #[test]
    fn reply_decodes_url() {
        let reply: GeneratedImage =
            serde_json::from_str(r#"{"img_url":"https://img.example/p.png"}"#).unwrap();
        assert_eq!(reply.img_url, "https://img.example/p.png");
        assert!(serde_json::from_str::<GeneratedImage>("{}").is_err());
    }

    #[test]
    fn size_must_be_positive_and_finite() {
        assert_eq!(valid_size(2.5), Some(2.5));
        assert_eq!(valid_size(0.0), None);
        assert_eq!(valid_size(-1.0), None);
        assert_eq!(valid_size(f32::NAN), None);
        assert_eq!(valid_size(f32::INFINITY), None);
    }
}
