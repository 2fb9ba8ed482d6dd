use std::f64::consts::E;

/// Logistic sigmoid, σ(x) = 1 / (1 + e^(−x)).
///
/// Negative inputs take the equivalent `e^x / (1 + e^x)` form so that
/// `e^(−x)` is never evaluated for large |x|.
pub fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + E.powf(-x))
    } else {
        let ex = E.powf(x);
        ex / (1.0 + ex)
    }
}

/// σ'(x) = σ(x) · (1 − σ(x)), taken from the pre-activation `x`.
pub fn sigmoid_derivative(x: f64) -> f64 {
    let fx = sigmoid(x);
    fx * (1.0 - fx)
}
