pub mod config;
pub mod pose;
pub mod render;
pub mod state;
pub mod viewport;
