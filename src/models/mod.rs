pub mod config;
pub mod raster;

pub use config::{AppConfig, CONFIG_ENV};
pub use raster::RasterImage;
