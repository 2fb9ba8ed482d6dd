pub mod forward;
pub mod params;

pub use forward::{evaluate, forward, ForwardPass};
pub use params::{GradientSet, Param, ParamSet, WeightSet};
