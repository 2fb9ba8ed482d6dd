use crate::network::params::{GradientSet, Param, WeightSet};

/// Adds each accumulated adjustment to its weight, in place.
pub fn apply_update(weights: &mut WeightSet, gradients: &GradientSet) {
    for param in Param::ALL {
        weights[param] += gradients[param];
    }
}
