//! Random city generation
//!
//! Builds a city with exact proportions of open homes and of each group,
//! then shuffles the homes with a seeded RNG so a seed always yields the
//! same city.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SchellingError};
use crate::core::types::{Cell, Group};
use crate::spatial::CityGrid;

/// Shape of a generated city
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityGenConfig {
    /// Grid is `size` x `size`
    pub size: usize,
    /// Percentage of all homes left open (rounded down)
    pub empty_percent: u32,
    /// Percentage of residents in group A (rounded down); the rest are B
    pub group_a_percent: u32,
}

impl Default for CityGenConfig {
    fn default() -> Self {
        Self {
            size: 20,
            empty_percent: 10,
            group_a_percent: 50,
        }
    }
}

impl CityGenConfig {
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(SchellingError::InvalidParams("city size must be at least 1".into()));
        }
        if self.empty_percent > 100 || self.group_a_percent > 100 {
            return Err(SchellingError::InvalidParams(format!(
                "percentages must be within 0..=100 (empty {}, group A {})",
                self.empty_percent, self.group_a_percent
            )));
        }
        Ok(())
    }

    /// (open, group A, group B) home counts
    pub fn counts(&self) -> (usize, usize, usize) {
        let total = self.size * self.size;
        let open = total * self.empty_percent as usize / 100;
        let residents = total - open;
        let group_a = residents * self.group_a_percent as usize / 100;
        (open, group_a, residents - group_a)
    }
}

/// Generate a shuffled city
pub fn generate_city(config: &CityGenConfig, seed: u64) -> Result<CityGrid> {
    config.validate()?;

    let (open, group_a, group_b) = config.counts();
    let mut homes: Vec<Cell> = std::iter::repeat(Cell::Resident(Group::A))
        .take(group_a)
        .chain(std::iter::repeat(Cell::Resident(Group::B)).take(group_b))
        .chain(std::iter::repeat(Cell::Open).take(open))
        .collect();

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    homes.shuffle(&mut rng);

    let rows = homes.chunks(config.size).map(<[Cell]>::to_vec).collect();
    let grid = CityGrid::from_rows(rows)?;

    tracing::debug!(
        "Generated {}x{} city: {} open, {} group A, {} group B (seed {})",
        config.size,
        config.size,
        open,
        group_a,
        group_b,
        seed
    );
    Ok(grid)
}
