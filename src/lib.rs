pub mod config;
pub mod objects;
pub mod scene;
pub mod utils;
