use tracing::{debug, info};

use crate::error::ConfigError;
use crate::optim::Sgd;
use crate::train::run::{ReportRow, TrainingRun};
use crate::train::train_config::SessionConfig;
use crate::train::trainer::train_epoch;

/// A report row is recorded on every multiple of this epoch count.
pub const REPORT_INTERVAL: usize = 50;

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Validates `config` and trains for `config.epochs` epochs.
///
/// # Errors
/// Returns `ConfigError` if the epoch count is outside `2..=1000` or any
/// scalar is not finite.
pub fn run(config: SessionConfig) -> Result<TrainingRun, ConfigError> {
    config.validate()?;
    Ok(train_loop(config))
}

/// Trains for exactly `config.epochs` epochs and returns every trace.
///
/// Pure: the result depends only on `config`. There is no early stopping;
/// the loop always runs to the requested count. Only `w5`..`w8` change.
pub fn train_loop(config: SessionConfig) -> TrainingRun {
    let epochs = config.epochs;
    let optimizer = Sgd::new(config.learning_rate);
    let mut weights = config.weights;

    let mut error_trace = Vec::with_capacity(epochs);
    let mut o1_trace = Vec::with_capacity(epochs);
    let mut o2_trace = Vec::with_capacity(epochs);
    let mut report = Vec::with_capacity(epochs / REPORT_INTERVAL + 1);

    info!(epochs, learning_rate = config.learning_rate, "training started");

    for epoch in 1..=epochs {
        let stats = train_epoch(&config, &mut weights, &optimizer, epoch);

        error_trace.push(stats.total_error);
        o1_trace.push(stats.pass.o1);
        o2_trace.push(stats.pass.o2);

        if is_report_epoch(epoch, epochs) {
            let row = ReportRow::new(
                epoch,
                stats.pass.o1,
                stats.pass.o2,
                config.y1,
                config.y2,
                stats.total_error,
            );
            debug!(epoch, o1 = row.o1, o2 = row.o2, total_error = row.total_error, "report");
            report.push(row);
        }
    }

    info!(
        final_error = error_trace.last().copied().unwrap_or(f64::NAN),
        "training finished"
    );

    TrainingRun {
        error_trace,
        o1_trace,
        o2_trace,
        report,
        final_weights: weights,
    }
}

/// Whether `epoch` (1-based) of a run of `total` epochs gets a report row.
pub fn is_report_epoch(epoch: usize, total: usize) -> bool {
    epoch % REPORT_INTERVAL == 0 || epoch == total
}
