use serde::{Serialize, Deserialize};

use crate::activation::sigmoid;
use crate::network::weights::Weights;

/// Every intermediate value of one forward pass.
///
/// Kept in full so a learner can follow the computation stage by stage:
/// hidden pre-activations, hidden activations, output pre-activations,
/// outputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForwardPass {
    pub z1: f64,
    pub z2: f64,
    pub h1: f64,
    pub h2: f64,
    pub z3: f64,
    pub z4: f64,
    pub o1: f64,
    pub o2: f64,
}

/// Forward pass through the fixed 2-2-2 sigmoid network (no biases).
pub fn forward(x1: f64, x2: f64, w: &Weights) -> ForwardPass {
    let z1 = x1 * w.w1 + x2 * w.w3;
    let h1 = sigmoid(z1);
    let z2 = x1 * w.w2 + x2 * w.w4;
    let h2 = sigmoid(z2);

    let z3 = h1 * w.w5 + h2 * w.w6;
    let o1 = sigmoid(z3);
    let z4 = h1 * w.w7 + h2 * w.w8;
    let o2 = sigmoid(z4);

    ForwardPass { z1, z2, h1, h2, z3, z4, o1, o2 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn hidden_layer_of_worked_example() {
        let pass = forward(0.1, 0.2, &Weights::default());
        assert!(close(pass.z1, 0.11));
        assert!(close(pass.z2, 0.095));
        assert_eq!(pass.h1, sigmoid(pass.z1));
        assert!(close(pass.h1, 0.527472));
        assert!(close(pass.h2, 0.523732));
    }

    #[test]
    fn output_layer_of_worked_example() {
        let pass = forward(0.1, 0.2, &Weights::default());
        assert!(close(pass.o1, 0.609891));
        assert!(close(pass.o2, 0.664513));
    }

    #[test]
    fn zero_inputs_give_one_half_hidden_activations() {
        let pass = forward(0.0, 0.0, &Weights::default());
        assert_eq!(pass.h1, 0.5);
        assert_eq!(pass.h2, 0.5);
    }
}
