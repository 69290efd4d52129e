use std::f64::consts::E;

/// Logistic activation: `1 / (1 + e^-x)`, bounded in (0, 1).
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Derivative of the logistic function expressed in activation space.
///
/// Takes the *output* `a = sigmoid(z)` rather than the pre-activation `z`,
/// so `sigmoid_deriv(sigmoid(z)) == σ'(z)`.
pub fn sigmoid_deriv(a: f64) -> f64 {
    a * (1.0 - a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_of_zero_is_one_half() {
        assert_eq!(sigmoid(0.0), 0.5);
    }

    #[test]
    fn sigmoid_is_bounded() {
        for x in [-30.0, -2.5, -0.1, 0.1, 2.5, 30.0] {
            let s = sigmoid(x);
            assert!(s > 0.0 && s < 1.0, "sigmoid({x}) = {s}");
        }
    }

    #[test]
    fn derivative_takes_the_activation_value() {
        let z = 0.11;
        let a = sigmoid(z);
        // Numerical derivative at z must agree with a * (1 - a).
        let h = 1e-6;
        let numeric = (sigmoid(z + h) - sigmoid(z - h)) / (2.0 * h);
        assert!((sigmoid_deriv(a) - numeric).abs() < 1e-9);
        // Feeding the pre-activation instead gives a different number.
        assert!((sigmoid_deriv(z) - numeric).abs() > 1e-3);
    }

    #[test]
    fn derivative_peaks_at_one_half() {
        assert_eq!(sigmoid_deriv(0.5), 0.25);
        assert!(sigmoid_deriv(0.9) < 0.25);
    }
}
