//! Schelling - housing segregation simulation on a square city grid

pub mod core;
pub mod simulation;
pub mod spatial;
pub mod world;
