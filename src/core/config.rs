//! Simulation parameters
//!
//! Supplied once per run and never changed while the simulation is in
//! progress. Can be built in code, loaded from a TOML file, or overridden
//! field by field from the command line.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SchellingError};

/// Parameters for a single simulation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Neighborhood radius R
    ///
    /// The home at (i, j) is in the neighborhood of (k, l) when
    /// k-R <= i <= k+R and l-R <= j <= l+R. Windows are clipped at the
    /// city edge, so corner homes have smaller neighborhoods.
    pub radius: usize,

    /// Minimum acceptable ratio of same-group neighbors to occupied homes
    /// in the neighborhood (the resident's own home included)
    pub similarity_threshold: f64,

    /// Minimum acceptable ratio of occupied homes to all homes in the
    /// neighborhood
    pub occupancy_threshold: f64,

    /// Maximum number of passes over the city
    pub max_steps: u64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            radius: 1,
            similarity_threshold: 0.44,
            occupancy_threshold: 0.5,
            max_steps: 1,
        }
    }
}

impl SimulationParams {
    pub fn new(
        radius: usize,
        similarity_threshold: f64,
        occupancy_threshold: f64,
        max_steps: u64,
    ) -> Self {
        Self {
            radius,
            similarity_threshold,
            occupancy_threshold,
            max_steps,
        }
    }

    /// Validate thresholds lie in [0, 1]
    pub fn validate(&self) -> Result<()> {
        let thresholds = [
            ("similarity_threshold", self.similarity_threshold),
            ("occupancy_threshold", self.occupancy_threshold),
        ];
        for (name, value) in thresholds {
            if !(0.0..=1.0).contains(&value) {
                return Err(SchellingError::InvalidParams(format!(
                    "{} ({}) must be within [0, 1]",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Parse parameters from TOML. Missing keys fall back to defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let params: SimulationParams = toml::from_str(content)?;
        params.validate()?;
        Ok(params)
    }

    /// Load parameters from a TOML file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
