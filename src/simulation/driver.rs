//! Simulation driver - runs relocation rounds over the city
//!
//! Each round scans the city in row-major order. Every dissatisfied
//! resident that finds a better house moves immediately, so later residents
//! in the same round see the updated city. A round with no relocations ends
//! the run early.

use std::time::Instant;

use crate::core::config::SimulationParams;
use crate::core::types::{Cell, Location};
use crate::simulation::relocation::best_satisfactory_house;
use crate::simulation::report::{RoundOutcome, SimulationReport, Termination};
use crate::simulation::satisfaction::{resident_satisfied, satisfied_fraction};
use crate::spatial::CityGrid;

/// Driver state between rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Running,
    Terminated(Termination),
}

/// A simulation in progress
///
/// Holds exclusive borrows of the grid and the open-set for the whole run.
/// The open-set is kept in step with the grid as residents move: the
/// destination is removed, the vacated home is appended.
pub struct Simulation<'a> {
    grid: &'a mut CityGrid,
    opens: &'a mut Vec<Location>,
    params: SimulationParams,
    state: DriverState,
    rounds_executed: u64,
    total_relocations: u64,
    history: Vec<RoundOutcome>,
    initial_satisfied_fraction: f64,
}

impl<'a> Simulation<'a> {
    pub fn new(
        grid: &'a mut CityGrid,
        opens: &'a mut Vec<Location>,
        params: SimulationParams,
    ) -> Self {
        debug_assert!(
            opens.iter().all(|&loc| grid[loc].is_open()),
            "open-set lists an occupied home"
        );

        let state = if params.max_steps == 0 {
            DriverState::Terminated(Termination::StepBudgetExhausted)
        } else {
            DriverState::Running
        };
        let initial_satisfied_fraction = satisfied_fraction(grid, &params);

        Self {
            grid,
            opens,
            params,
            state,
            rounds_executed: 0,
            total_relocations: 0,
            history: Vec::new(),
            initial_satisfied_fraction,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn grid(&self) -> &CityGrid {
        &*self.grid
    }

    pub fn opens(&self) -> &[Location] {
        &self.opens[..]
    }

    pub fn total_relocations(&self) -> u64 {
        self.total_relocations
    }

    pub fn rounds_executed(&self) -> u64 {
        self.rounds_executed
    }

    /// Run one round. Returns `None` once the run has terminated.
    pub fn step(&mut self) -> Option<RoundOutcome> {
        if self.state != DriverState::Running {
            return None;
        }

        let relocations = self.relocation_round();
        self.rounds_executed += 1;

        if relocations == 0 {
            self.state = DriverState::Terminated(Termination::Converged);
        } else {
            self.total_relocations += relocations;
            if self.rounds_executed >= self.params.max_steps {
                self.state = DriverState::Terminated(Termination::StepBudgetExhausted);
            }
        }

        let outcome = RoundOutcome {
            round: self.rounds_executed,
            relocations,
            satisfied_fraction: satisfied_fraction(self.grid, &self.params),
        };
        tracing::info!(
            "Round {}: {} relocations, {:.1}% satisfied",
            outcome.round,
            outcome.relocations,
            outcome.satisfied_fraction * 100.0
        );
        self.history.push(outcome);

        Some(outcome)
    }

    /// Run remaining rounds and summarize
    pub fn run(mut self) -> SimulationReport {
        let start = Instant::now();
        while self.step().is_some() {}

        let termination = match self.state {
            DriverState::Terminated(termination) => termination,
            DriverState::Running => unreachable!("step() only stops once terminated"),
        };
        tracing::info!(
            "Simulation finished after {} rounds: {} relocations ({:?})",
            self.rounds_executed,
            self.total_relocations,
            termination
        );

        SimulationReport {
            params: self.params,
            grid_size: self.grid.size(),
            residents: self.grid.count_occupied(),
            total_relocations: self.total_relocations,
            rounds_executed: self.rounds_executed,
            final_satisfied_fraction: satisfied_fraction(self.grid, &self.params),
            rounds: self.history,
            termination,
            initial_satisfied_fraction: self.initial_satisfied_fraction,
            simulation_time_ms: start.elapsed().as_millis() as u64,
        }
    }

    /// One row-major pass. Cells are read live, not from a snapshot.
    fn relocation_round(&mut self) -> u64 {
        let size = self.grid.size();
        let mut relocations = 0;
        for row in 0..size {
            for col in 0..size {
                let loc = Location::new(row, col);
                if self.grid[loc].is_occupied() && self.advance_resident(loc) {
                    relocations += 1;
                }
            }
        }
        relocations
    }

    /// Move the resident at `loc` if they are unhappy and somewhere better
    /// exists. Returns whether they moved.
    fn advance_resident(&mut self, loc: Location) -> bool {
        if resident_satisfied(self.grid, &self.params, loc) || self.opens.len() <= 1 {
            return false;
        }

        let Some(destination) = best_satisfactory_house(
            self.grid,
            loc,
            self.params.radius,
            self.params.similarity_threshold,
            self.params.occupancy_threshold,
            &self.opens[..],
        ) else {
            return false;
        };

        let resident = self.grid[loc];
        self.grid.set(destination, resident);
        self.grid.set(loc, Cell::Open);
        self.opens.push(loc);
        if let Some(pos) = self.opens.iter().position(|&open| open == destination) {
            self.opens.remove(pos);
        }

        tracing::debug!("Resident moved from {} to {}", loc, destination);
        true
    }
}

/// Run a full simulation, mutating `grid` and `opens` in place
///
/// Returns the total number of relocations. A round in which nobody moves
/// stops the run and adds nothing to the total.
pub fn run_simulation(
    grid: &mut CityGrid,
    params: &SimulationParams,
    opens: &mut Vec<Location>,
) -> u64 {
    let mut simulation = Simulation::new(grid, opens, *params);
    while simulation.step().is_some() {}
    simulation.total_relocations()
}
