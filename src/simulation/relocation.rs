//! Best satisfactory house selection
//!
//! A dissatisfied resident looks at every open home, imagines living there,
//! and keeps the ones that would satisfy them. The nearest of those wins.

use crate::core::types::{Cell, Location};
use crate::simulation::satisfaction::is_satisfied;
use crate::spatial::CityGrid;

/// Find where the resident at `loc` should move, if anywhere
///
/// Each open home is tried in `opens` order with the resident's current home
/// vacated, so the resident never counts as their own neighbor. A house is
/// only chosen when more than one candidate qualifies; a lone candidate is
/// ignored and the resident stays put. Among qualifying candidates the one
/// with the smallest Manhattan distance wins, earliest in `opens` on ties.
///
/// The grid is left exactly as it was on return.
///
/// Panics if the home at `loc` is open.
pub fn best_satisfactory_house(
    grid: &mut CityGrid,
    loc: Location,
    radius: usize,
    similarity_threshold: f64,
    occupancy_threshold: f64,
    opens: &[Location],
) -> Option<Location> {
    let resident = grid[loc];
    assert!(resident.is_occupied(), "cannot relocate open home at {}", loc);

    let mut vacated = grid.place_temporarily(loc, Cell::Open);
    let mut candidates = Vec::new();
    for &open in opens {
        let trial = vacated.place_temporarily(open, resident);
        if is_satisfied(
            &trial,
            radius,
            open,
            similarity_threshold,
            occupancy_threshold,
        ) {
            candidates.push(open);
        }
    }
    drop(vacated);

    tracing::trace!(
        "Resident at {} has {} satisfactory open houses out of {}",
        loc,
        candidates.len(),
        opens.len()
    );

    nearest_candidate(loc, &candidates)
}

/// Nearest candidate to `origin`, first on ties. Needs at least two.
fn nearest_candidate(origin: Location, candidates: &[Location]) -> Option<Location> {
    if candidates.len() <= 1 {
        return None;
    }
    candidates
        .iter()
        .copied()
        .min_by_key(|candidate| origin.manhattan_distance(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Group;

    const A: Cell = Cell::Resident(Group::A);
    const B: Cell = Cell::Resident(Group::B);
    const O: Cell = Cell::Open;

    fn lone_resident() -> CityGrid {
        CityGrid::from_rows(vec![vec![A, O, O], vec![O, O, O], vec![O, O, O]]).unwrap()
    }

    #[test]
    fn test_no_candidates() {
        let mut grid = CityGrid::from_rows(vec![vec![A, O, O], vec![B, B, O], vec![O, B, A]]).unwrap();
        let before = grid.clone();
        let opens = grid.find_opens();
        assert_eq!(opens.len(), 4);
        // similarity above 1.0 can never be met
        let best = best_satisfactory_house(&mut grid, Location::new(0, 0), 1, 1.01, 0.0, &opens);
        assert_eq!(best, None);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_single_candidate_is_ignored() {
        // With R=0 every open home satisfies, so the candidate count is the
        // open count
        let mut grid = lone_resident();
        let before = grid.clone();
        let opens = vec![Location::new(2, 2)];
        let best = best_satisfactory_house(&mut grid, Location::new(0, 0), 0, 1.0, 1.0, &opens);
        assert_eq!(best, None);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_nearest_candidate_wins() {
        let mut grid = lone_resident();
        let opens = vec![Location::new(2, 2), Location::new(1, 1), Location::new(0, 2)];
        let best = best_satisfactory_house(&mut grid, Location::new(0, 0), 0, 1.0, 1.0, &opens);
        // (1, 1) and (0, 2) are both distance 2; (1, 1) is seen first
        assert_eq!(best, Some(Location::new(1, 1)));
    }

    #[test]
    fn test_ties_follow_open_order() {
        let mut grid = lone_resident();
        let opens = vec![Location::new(2, 0), Location::new(0, 2)];
        let best = best_satisfactory_house(&mut grid, Location::new(0, 0), 0, 1.0, 1.0, &opens);
        assert_eq!(best, Some(Location::new(2, 0)));

        let opens = vec![Location::new(0, 2), Location::new(2, 0)];
        let best = best_satisfactory_house(&mut grid, Location::new(0, 0), 0, 1.0, 1.0, &opens);
        assert_eq!(best, Some(Location::new(0, 2)));
    }

    #[test]
    fn test_origin_is_vacated_during_trials() {
        // Alone in the city with R=1, occupancy needs 0.2. Edge homes have
        // 6-home windows (1/6 < 0.2) and only pass if the resident's old
        // home still counted as occupied. Corner windows have 4 homes.
        let mut grid = lone_resident();
        let before = grid.clone();
        let opens = grid.find_opens();
        let best = best_satisfactory_house(&mut grid, Location::new(0, 0), 1, 0.0, 0.2, &opens);
        assert_eq!(best, Some(Location::new(0, 2)));
        assert_eq!(grid, before);
    }

    #[test]
    #[should_panic(expected = "open home")]
    fn test_open_origin_panics() {
        let mut grid = lone_resident();
        let opens = grid.find_opens();
        best_satisfactory_house(&mut grid, Location::new(1, 1), 1, 0.5, 0.5, &opens);
    }
}
