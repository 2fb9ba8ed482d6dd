use serde::{Deserialize, Serialize};

use crate::activation::sigmoid;
use crate::network::params::WeightSet;

/// Every intermediate of one forward pass.
///
/// Pre-activations (z) are kept alongside activations (a) because the
/// backward pass takes σ'(z), not σ'(a).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForwardPass {
    pub hidden1_preact: f64,
    pub hidden1: f64,
    pub hidden2_preact: f64,
    pub hidden2: f64,
    pub output_preact: f64,
    pub output: f64,
}

/// Runs the 2-2-1 network on one input pair.
pub fn forward(weights: &WeightSet, inputs: [f64; 2]) -> ForwardPass {
    let [input1, input2] = inputs;

    let hidden1_preact = weights.i1_h1 * input1 + weights.i2_h1 * input2 + weights.bias_h1;
    let hidden1 = sigmoid(hidden1_preact);

    let hidden2_preact = weights.i1_h2 * input1 + weights.i2_h2 * input2 + weights.bias_h2;
    let hidden2 = sigmoid(hidden2_preact);

    let output_preact = weights.h1_o1 * hidden1 + weights.h2_o1 * hidden2 + weights.bias_o1;
    let output = sigmoid(output_preact);

    ForwardPass {
        hidden1_preact,
        hidden1,
        hidden2_preact,
        hidden2,
        output_preact,
        output,
    }
}

/// Network output for `(input1, input2)`.
pub fn evaluate(weights: &WeightSet, input1: f64, input2: f64) -> f64 {
    forward(weights, [input1, input2]).output
}
