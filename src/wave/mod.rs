pub mod config;
pub mod curve;
pub mod generate;
pub mod layer;
