pub mod activation;
pub mod data;
pub mod error;
pub mod logging;
pub mod network;
pub mod optim;
pub mod report;
pub mod train;

// Convenience re-exports
pub use activation::{sigmoid, sigmoid_derivative};
pub use data::{xor_examples, TrainingExample};
pub use error::{Error, Result};
pub use network::{evaluate, forward, ForwardPass, GradientSet, Param, ParamSet, WeightSet};
pub use optim::apply_update;
pub use report::{mean_squared_error, mean_squared_output, predictions, Prediction};
pub use train::{accumulate_gradients, train_loop, TrainConfig, TrainStats};
