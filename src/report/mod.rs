//! Post-training evaluation: per-example predictions and summary metrics.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::TrainingExample;
use crate::error::{Error, Result};
use crate::network::forward::evaluate;
use crate::network::params::WeightSet;

/// The network's answer for one example next to the target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub inputs: [f64; 2],
    pub predicted: f64,
    pub expected: f64,
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.6} XOR {:.6} => {:.6} (expected {:.6})",
            self.inputs[0], self.inputs[1], self.predicted, self.expected
        )
    }
}

pub fn predictions(weights: &WeightSet, examples: &[TrainingExample]) -> Vec<Prediction> {
    examples
        .iter()
        .map(|example| Prediction {
            inputs: example.inputs,
            predicted: evaluate(weights, example.inputs[0], example.inputs[1]),
            expected: example.expected,
        })
        .collect()
}

/// Mean of the squared raw output, `mean(output²)`.
///
/// This is the figure printed as `Error:` after training. It ignores the
/// targets; see [`mean_squared_error`] for the loss against them.
pub fn mean_squared_output(weights: &WeightSet, examples: &[TrainingExample]) -> Result<f64> {
    mean_over(examples, |example| {
        let output = evaluate(weights, example.inputs[0], example.inputs[1]);
        output * output
    })
}

/// Mean squared error against the targets, `mean((output - expected)²)`.
pub fn mean_squared_error(weights: &WeightSet, examples: &[TrainingExample]) -> Result<f64> {
    mean_over(examples, |example| {
        let output = evaluate(weights, example.inputs[0], example.inputs[1]);
        (output - example.expected).powi(2)
    })
}

fn mean_over<F>(examples: &[TrainingExample], per_example: F) -> Result<f64>
where
    F: Fn(&TrainingExample) -> f64,
{
    if examples.is_empty() {
        return Err(Error::EmptyDataset);
    }
    let total: f64 = examples.iter().map(per_example).sum();
    Ok(total / examples.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::xor_examples;
    use crate::network::params::ParamSet;
    use approx::assert_relative_eq;

    #[test]
    fn prediction_line_uses_six_decimals() {
        let p = Prediction { inputs: [1.0, 0.0], predicted: 0.98765432, expected: 1.0 };
        assert_eq!(
            p.to_string(),
            "1.000000 XOR 0.000000 => 0.987654 (expected 1.000000)"
        );
    }

    #[test]
    fn predictions_follow_example_order() {
        let examples = xor_examples();
        let preds = predictions(&ParamSet::zeros(), &examples);
        assert_eq!(preds.len(), 4);
        for (pred, example) in preds.iter().zip(examples.iter()) {
            assert_eq!(pred.inputs, example.inputs);
            assert_eq!(pred.expected, example.expected);
            assert_eq!(pred.predicted, 0.5);
        }
    }

    #[test]
    fn squared_output_ignores_targets() {
        // Every output is 0.5 under zero weights.
        let weights = ParamSet::zeros();
        assert_relative_eq!(mean_squared_output(&weights, &xor_examples()).unwrap(), 0.25);
        assert_relative_eq!(mean_squared_error(&weights, &xor_examples()).unwrap(), 0.25);

        let ones = [TrainingExample::new(0.0, 0.0, 1.0)];
        assert_relative_eq!(mean_squared_output(&weights, &ones).unwrap(), 0.25);
        let zeros = [TrainingExample::new(0.0, 0.0, 0.0)];
        assert_relative_eq!(mean_squared_output(&weights, &zeros).unwrap(), 0.25);
    }

    #[test]
    fn empty_examples_are_rejected() {
        let weights = ParamSet::zeros();
        assert!(matches!(mean_squared_output(&weights, &[]), Err(Error::EmptyDataset)));
        assert!(matches!(mean_squared_error(&weights, &[]), Err(Error::EmptyDataset)));
    }
}
