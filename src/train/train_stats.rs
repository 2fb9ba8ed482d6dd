use serde::{Deserialize, Serialize};

/// Summary of a completed `train_loop` run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainStats {
    /// Updates actually applied.
    pub iterations: usize,
    /// Mean squared error against the targets before the first update.
    pub initial_error: f64,
    /// Mean squared error against the targets after the last update.
    pub final_error: f64,
    /// Wall-clock duration of the whole run in milliseconds.
    pub elapsed_ms: u64,
}
