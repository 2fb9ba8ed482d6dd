use serde::{Deserialize, Serialize};

/// One supervised sample: an input pair and the scalar target for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub inputs: [f64; 2],
    pub expected: f64,
}

impl TrainingExample {
    pub const fn new(input1: f64, input2: f64, expected: f64) -> TrainingExample {
        TrainingExample { inputs: [input1, input2], expected }
    }
}

/// The XOR truth table in training order.
pub fn xor_examples() -> [TrainingExample; 4] {
    [
        TrainingExample::new(0.0, 0.0, 0.0),
        TrainingExample::new(1.0, 0.0, 1.0),
        TrainingExample::new(0.0, 1.0, 1.0),
        TrainingExample::new(1.0, 1.0, 0.0),
    ]
}
