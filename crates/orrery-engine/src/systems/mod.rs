pub mod orbit;
pub mod render;
