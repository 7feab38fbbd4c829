pub mod camera;
pub mod focus;
pub mod instance;
