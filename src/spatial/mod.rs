//! City grid and neighborhood geometry

pub mod grid;
pub mod neighborhood;

pub use grid::{CityGrid, GridDisplay, TrialPlacement};
pub use neighborhood::Neighborhood;
