use wasm_bindgen::prelude::*;
use orrery_engine::*;

mod catalog;
mod climate;
mod customize;
mod game;
use customize::{ImageRequest, GENERATE_IMAGE_ENDPOINT};
use game::ExoplanetExplorer;

orrery_web::export_scene!(ExoplanetExplorer, "exoplanet-explorer");

/// JSON body for the image service, or `undefined` when the form is empty.
/// `types_mask` packs the surface checkboxes: Cloudy 1, Gas 2, Rocky 4, Ice 8.
#[wasm_bindgen]
pub fn customization_request(color: &str, temperature: &str, types_mask: u32) -> Option<String> {
    match ImageRequest::new(color, temperature, types_mask).encode() {
        Ok(body) => body,
        Err(err) => {
            log::error!("image request encoding failed: {err}");
            None
        }
    }
}

#[wasm_bindgen]
pub fn customization_endpoint() -> String {
    GENERATE_IMAGE_ENDPOINT.to_string()
}
