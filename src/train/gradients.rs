use crate::activation::sigmoid_derivative;
use crate::data::TrainingExample;
use crate::network::forward::forward;
use crate::network::params::{GradientSet, WeightSet};

/// Sums the per-example weight adjustments over the whole batch.
///
/// Each adjustment points towards the target (`expected - output`), so the
/// result is added to the weights as-is. Contributions are summed, not
/// averaged, which makes the effective learning rate 1.
///
/// The hidden-layer deltas are `output_delta * σ'(z_hidden)`; the outgoing
/// hidden→output weight is not part of the product.
pub fn accumulate_gradients(weights: &WeightSet, examples: &[TrainingExample]) -> GradientSet {
    let mut grads = GradientSet::zeros();

    for example in examples {
        let [input1, input2] = example.inputs;
        let pass = forward(weights, example.inputs);

        let delta = example.expected - pass.output;
        let output_delta = delta * sigmoid_derivative(pass.output_preact);

        grads.h1_o1 += pass.hidden1 * output_delta;
        grads.h2_o1 += pass.hidden2 * output_delta;
        grads.bias_o1 += output_delta;

        let hidden1_delta = output_delta * sigmoid_derivative(pass.hidden1_preact);
        let hidden2_delta = output_delta * sigmoid_derivative(pass.hidden2_preact);

        grads.i1_h1 += input1 * hidden1_delta;
        grads.i2_h1 += input2 * hidden1_delta;
        grads.bias_h1 += hidden1_delta;

        grads.i1_h2 += input1 * hidden2_delta;
        grads.i2_h2 += input2 * hidden2_delta;
        grads.bias_h2 += hidden2_delta;
    }

    grads
}
