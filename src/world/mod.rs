//! Getting cities in: grid files and random generation

pub mod generator;
pub mod loader;

pub use generator::{generate_city, CityGenConfig};
pub use loader::{parse_grid, read_grid, GridLoader};
