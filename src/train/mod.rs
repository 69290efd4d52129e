pub mod epoch_stats;
pub mod loop_fn;
pub mod run;
pub mod train_config;
pub mod trainer;

pub use epoch_stats::EpochStats;
pub use loop_fn::{is_report_epoch, run, train_loop, REPORT_INTERVAL};
pub use run::{ReportRow, Summary, TrainingRun};
pub use train_config::{SessionConfig, MAX_EPOCHS, MIN_EPOCHS};
pub use trainer::train_epoch;
