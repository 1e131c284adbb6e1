//! Schelling relocation simulation
//!
//! scoring -> satisfaction -> relocation -> driver

pub mod driver;
pub mod relocation;
pub mod report;
pub mod satisfaction;
pub mod scoring;

pub use driver::{run_simulation, DriverState, Simulation};
pub use relocation::best_satisfactory_house;
pub use report::{RoundOutcome, SimulationReport, Termination};
pub use satisfaction::{is_satisfied, resident_satisfied, satisfied_fraction};
pub use scoring::{occupancy_score, similarity_score};
