pub mod playback;
pub mod scene;
