pub mod config;
pub mod error;
pub mod types;

pub use config::SimulationParams;
pub use error::{Result, SchellingError};
pub use types::{Alphabet, Cell, Group, Location};
