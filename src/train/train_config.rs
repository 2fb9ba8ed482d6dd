use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::network::params::WeightSet;

/// Number of full-batch updates in a standard run.
pub const DEFAULT_ITERATIONS: usize = 10_000;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `iterations` - number of accumulate-then-update rounds; there is no
///                  early stopping
/// - `seed`       - seed for the initial weights; `None` draws from entropy
/// - `log_every`  - emit a progress event every this many iterations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub iterations: usize,
    pub seed: Option<u64>,
    pub log_every: usize,
}

impl TrainConfig {
    pub fn new(iterations: usize) -> Self {
        TrainConfig {
            iterations,
            ..TrainConfig::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Starting weights: seeded when `seed` is set, entropy otherwise.
    pub fn initial_weights(&self) -> WeightSet {
        match self.seed {
            Some(seed) => WeightSet::seeded(seed),
            None => WeightSet::from_entropy(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.log_every == 0 {
            return Err(Error::InvalidConfig("log_every must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            iterations: DEFAULT_ITERATIONS,
            seed: None,
            log_every: 1_000,
        }
    }
}
