//! Resident satisfaction

use crate::core::config::SimulationParams;
use crate::core::types::Location;
use crate::simulation::scoring::{occupancy_score, similarity_score};
use crate::spatial::CityGrid;

/// Whether the resident at `loc` is happy where they live
///
/// A score equal to its threshold passes. Similarity is checked first.
///
/// Panics if the home at `loc` is open.
pub fn is_satisfied(
    grid: &CityGrid,
    radius: usize,
    loc: Location,
    similarity_threshold: f64,
    occupancy_threshold: f64,
) -> bool {
    assert!(
        grid[loc].is_occupied(),
        "satisfaction requested for open home at {}",
        loc
    );

    if similarity_score(grid, radius, loc) < similarity_threshold {
        false
    } else {
        occupancy_score(grid, radius, loc) >= occupancy_threshold
    }
}

/// `is_satisfied` with thresholds taken from run parameters
#[inline]
pub fn resident_satisfied(grid: &CityGrid, params: &SimulationParams, loc: Location) -> bool {
    is_satisfied(
        grid,
        params.radius,
        loc,
        params.similarity_threshold,
        params.occupancy_threshold,
    )
}

/// Share of residents currently satisfied, 1.0 for an empty city
pub fn satisfied_fraction(grid: &CityGrid, params: &SimulationParams) -> f64 {
    let mut residents = 0usize;
    let mut satisfied = 0usize;
    for loc in grid.locations() {
        if grid[loc].is_open() {
            continue;
        }
        residents += 1;
        if resident_satisfied(grid, params, loc) {
            satisfied += 1;
        }
    }

    if residents == 0 {
        1.0
    } else {
        satisfied as f64 / residents as f64
    }
}
