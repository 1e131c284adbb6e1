//! Simulation output and serialization

use serde::Serialize;

use crate::core::config::SimulationParams;

/// Why a run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Termination {
    /// A full round produced no relocations
    Converged,
    /// `max_steps` rounds were completed
    StepBudgetExhausted,
}

/// Result of one pass over the city
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoundOutcome {
    /// 1-based round number
    pub round: u64,
    pub relocations: u64,
    /// Share of residents satisfied after the round
    pub satisfied_fraction: f64,
}

/// Summary of a complete run
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub params: SimulationParams,
    pub grid_size: usize,
    pub residents: usize,
    /// Relocations over all rounds; the terminating empty round adds nothing
    pub total_relocations: u64,
    /// Rounds scheduled, including a terminating empty round
    pub rounds_executed: u64,
    pub rounds: Vec<RoundOutcome>,
    pub termination: Termination,
    pub initial_satisfied_fraction: f64,
    pub final_satisfied_fraction: f64,
    pub simulation_time_ms: u64,
}

impl SimulationReport {
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn summary(&self) -> String {
        let reason = match self.termination {
            Termination::Converged => "nobody moved",
            Termination::StepBudgetExhausted => "step budget used",
        };
        format!(
            "{} relocations over {} rounds ({})\nSatisfied: {:.2}% -> {:.2}% of {} residents",
            self.total_relocations,
            self.rounds_executed,
            reason,
            self.initial_satisfied_fraction * 100.0,
            self.final_satisfied_fraction * 100.0,
            self.residents,
        )
    }
}
