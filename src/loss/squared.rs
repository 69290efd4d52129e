/// Half squared error, `0.5 * (target - output)²`, evaluated per output unit.
pub struct HalfSquaredError;

impl HalfSquaredError {
    /// Error contributed by a single output.
    pub fn loss(target: f64, output: f64) -> f64 {
        0.5 * (target - output).powi(2)
    }

    /// ∂E/∂o for a single output: `-(target - output)`.
    pub fn derivative(target: f64, output: f64) -> f64 {
        -(target - output)
    }

    /// Sum of the per-output errors over paired targets and outputs.
    pub fn total(targets: &[f64], outputs: &[f64]) -> f64 {
        targets.iter().zip(outputs.iter())
            .map(|(&t, &o)| Self::loss(t, o))
            .sum()
    }
}
