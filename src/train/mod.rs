pub mod gradients;
pub mod loop_fn;
pub mod train_config;
pub mod train_stats;

pub use gradients::accumulate_gradients;
pub use loop_fn::train_loop;
pub use train_config::{TrainConfig, DEFAULT_ITERATIONS};
pub use train_stats::TrainStats;
