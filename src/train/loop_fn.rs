use std::time::Instant;

use tracing::{debug, info};

use crate::data::TrainingExample;
use crate::error::Result;
use crate::network::params::WeightSet;
use crate::optim::update::apply_update;
use crate::report::mean_squared_error;
use crate::train::gradients::accumulate_gradients;
use crate::train::train_config::TrainConfig;
use crate::train::train_stats::TrainStats;

/// Trains `weights` in place for exactly `config.iterations` full-batch
/// updates over `examples`.
///
/// Each iteration accumulates gradients over every example and then applies
/// them once. No convergence check is made.
///
/// # Errors
/// - `InvalidConfig` if `config` fails validation
/// - `EmptyDataset` if `examples` is empty
pub fn train_loop(
    weights: &mut WeightSet,
    examples: &[TrainingExample],
    config: &TrainConfig,
) -> Result<TrainStats> {
    config.validate()?;

    let t_start = Instant::now();
    let initial_error = mean_squared_error(weights, examples)?;

    for iteration in 1..=config.iterations {
        let gradients = accumulate_gradients(weights, examples);
        apply_update(weights, &gradients);

        if iteration % config.log_every == 0 {
            let error = mean_squared_error(weights, examples)?;
            debug!(iteration, error, "training progress");
        }
    }

    let stats = TrainStats {
        iterations: config.iterations,
        initial_error,
        final_error: mean_squared_error(weights, examples)?,
        elapsed_ms: t_start.elapsed().as_millis() as u64,
    };
    info!(
        iterations = stats.iterations,
        initial_error = stats.initial_error,
        final_error = stats.final_error,
        elapsed_ms = stats.elapsed_ms,
        "training finished"
    );

    Ok(stats)
}
