//! Neighborhood scores for a resident
//!
//! Both scores look at the clipped window of radius R around a home, the
//! home itself included.

use crate::core::types::Location;
use crate::spatial::{CityGrid, Neighborhood};

/// Occupied homes in the neighborhood divided by the neighborhood's area
///
/// In (0, 1] whenever the home at `loc` is occupied.
pub fn occupancy_score(grid: &CityGrid, radius: usize, loc: Location) -> f64 {
    let hood = Neighborhood::around(grid.size(), radius, loc);
    let occupied = hood.locations().filter(|&l| grid[l].is_occupied()).count();
    occupied as f64 / hood.area() as f64
}

/// Same-group homes in the neighborhood divided by occupied homes
///
/// The denominator is derived as `occupancy_score * area` rather than
/// counted directly. Thresholds are calibrated against that exact float,
/// so keep the derivation.
///
/// Panics if the home at `loc` is open.
pub fn similarity_score(grid: &CityGrid, radius: usize, loc: Location) -> f64 {
    let resident = grid[loc];
    assert!(
        resident.is_occupied(),
        "similarity score requested for open home at {}",
        loc
    );

    let hood = Neighborhood::around(grid.size(), radius, loc);
    let similar = hood.locations().filter(|&l| grid[l] == resident).count();
    similar as f64 / (occupancy_score(grid, radius, loc) * hood.area() as f64)
}
