use serde::{Serialize, Deserialize};

use crate::activation::sigmoid_deriv;
use crate::loss::HalfSquaredError;
use crate::network::{ForwardPass, Weights};

/// Error signals at the two output units, `δ_k = ∂E/∂o_k · σ'(o_k)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutputGradients {
    pub d_o1: f64,
    pub d_o2: f64,
}

impl OutputGradients {
    /// Computes the output deltas from a forward pass and the targets.
    ///
    /// The logistic derivative is taken in activation space (`o * (1 - o)`).
    pub fn compute(pass: &ForwardPass, y1: f64, y2: f64) -> OutputGradients {
        OutputGradients {
            d_o1: HalfSquaredError::derivative(y1, pass.o1) * sigmoid_deriv(pass.o1),
            d_o2: HalfSquaredError::derivative(y2, pass.o2) * sigmoid_deriv(pass.o2),
        }
    }
}

pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one gradient-descent update to the output-layer weights.
    ///
    /// The hidden-layer weights `w1`..`w4` are left untouched: the error is
    /// not propagated past the output layer.
    pub fn step(&self, weights: &mut Weights, grads: &OutputGradients, pass: &ForwardPass) {
        let lr = self.learning_rate;
        weights.w5 -= lr * grads.d_o1 * pass.h1;
        weights.w6 -= lr * grads.d_o1 * pass.h2;
        weights.w7 -= lr * grads.d_o2 * pass.h1;
        weights.w8 -= lr * grads.d_o2 * pass.h2;
    }
}
