use serde::{Serialize, Deserialize};

use crate::network::Weights;

/// Rounds half away from zero to `places` decimal places.
///
/// Non-finite values pass through unchanged.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Absolute deviation of `output` from `target` as a percentage of `target`.
///
/// A zero target yields `inf` (or `NaN` when the output is zero as well).
pub fn deviation_pct(target: f64, output: f64) -> f64 {
    ((target - output) / target).abs() * 100.0
}

/// Periodic snapshot recorded every 50th epoch and at the final epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub epoch: usize,
    /// Output 1, rounded to 4 decimals.
    pub o1: f64,
    /// Output 2, rounded to 4 decimals.
    pub o2: f64,
    /// `|y1 - o1| / y1 * 100`, rounded to 2 decimals.
    pub y1_deviation_pct: f64,
    /// `|y2 - o2| / y2 * 100`, rounded to 2 decimals.
    pub y2_deviation_pct: f64,
    /// Total error, rounded to 6 decimals.
    pub total_error: f64,
}

impl ReportRow {
    pub fn new(epoch: usize, o1: f64, o2: f64, y1: f64, y2: f64, total_error: f64) -> ReportRow {
        ReportRow {
            epoch,
            o1: round_to(o1, 4),
            o2: round_to(o2, 4),
            y1_deviation_pct: round_to(deviation_pct(y1, o1), 2),
            y2_deviation_pct: round_to(deviation_pct(y2, o2), 2),
            total_error: round_to(total_error, 6),
        }
    }
}

/// Headline figures of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Final output 1, rounded to 4 decimals.
    pub o1: f64,
    /// Final output 2, rounded to 4 decimals.
    pub o2: f64,
    /// Total error at the first epoch (unrounded).
    pub initial_error: f64,
    /// Total error at the last epoch, rounded to 6 decimals.
    pub final_error: f64,
    /// `(first - last) / first * 100`, rounded to 2 decimals.
    pub error_reduction_pct: f64,
}

/// Complete output of a training session.
///
/// The three traces are indexed by epoch (trace[0] is epoch 1) and always
/// have the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingRun {
    pub error_trace: Vec<f64>,
    pub o1_trace: Vec<f64>,
    pub o2_trace: Vec<f64>,
    pub report: Vec<ReportRow>,
    pub final_weights: Weights,
}

impl TrainingRun {
    /// Number of epochs that were run.
    pub fn epochs(&self) -> usize {
        self.error_trace.len()
    }

    /// Final outputs and error reduction; `None` if no epoch was run.
    pub fn summary(&self) -> Option<Summary> {
        let first = *self.error_trace.first()?;
        let last = *self.error_trace.last()?;
        let o1 = *self.o1_trace.last()?;
        let o2 = *self.o2_trace.last()?;
        Some(Summary {
            o1: round_to(o1, 4),
            o2: round_to(o2, 4),
            initial_error: first,
            final_error: round_to(last, 6),
            error_reduction_pct: round_to((first - last) / first * 100.0, 2),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_places() {
        assert_eq!(round_to(0.43868695, 4), 0.4387);
        assert_eq!(round_to(9.6717, 2), 9.67);
        assert_eq!(round_to(0.00085605, 6), 0.000856);
        assert!(round_to(f64::INFINITY, 2).is_infinite());
    }

    #[test]
    fn deviation_is_absolute_percentage() {
        assert!((deviation_pct(0.4, 0.5) - 25.0).abs() < 1e-9);
        assert!((deviation_pct(0.4, 0.3) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn zero_target_gives_non_finite_deviation() {
        assert!(deviation_pct(0.0, 0.3).is_infinite());
        assert!(deviation_pct(0.0, 0.0).is_nan());
    }

    #[test]
    fn report_row_rounds_each_column() {
        let row = ReportRow::new(100, 0.43868695457, 0.61467720075, 0.4, 0.6, 0.00085605033);
        assert_eq!(row.epoch, 100);
        assert_eq!(row.o1, 0.4387);
        assert_eq!(row.o2, 0.6147);
        assert_eq!(row.y1_deviation_pct, 9.67);
        assert_eq!(row.y2_deviation_pct, 2.45);
        assert_eq!(row.total_error, 0.000856);
    }

    #[test]
    fn empty_run_has_no_summary() {
        let run = TrainingRun {
            error_trace: vec![],
            o1_trace: vec![],
            o2_trace: vec![],
            report: vec![],
            final_weights: Weights::default(),
        };
        assert_eq!(run.epochs(), 0);
        assert!(run.summary().is_none());
    }
}
