pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod picking;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::panel::{InfoPanel, PanelContent, PanelRow};
pub use api::types::{BodyId, GameEvent};
pub use components::body::{Body, BodyKind, Orbit};
pub use core::playback::Playback;
pub use core::scene::{BodyDescriptor, Scene, SceneManifest};
pub use renderer::instance::{BodyInstance, InstanceBuffer};
pub use renderer::camera::{Camera3D, CameraState};
pub use renderer::focus::{focus_offset, CameraFocus};
pub use input::queue::{keys, InputEvent, InputQueue};
pub use picking::{pick, Hit, Ray, Selection};
pub use bridge::protocol::ProtocolLayout;
pub use systems::orbit::{advance_orbits, place_on_orbit};
pub use systems::render::build_instance_buffer;
