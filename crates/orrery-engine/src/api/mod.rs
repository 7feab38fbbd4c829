pub mod game;
pub mod panel;
pub mod types;
