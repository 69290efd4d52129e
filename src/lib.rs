pub mod activation;
pub mod error;
pub mod loss;
pub mod network;
pub mod optim;
pub mod report;
pub mod train;

// Convenience re-exports
pub use activation::{sigmoid, sigmoid_deriv};
pub use error::ConfigError;
pub use network::{forward, ForwardPass, Weights};
pub use optim::{OutputGradients, Sgd};
pub use train::{run, train_loop, ReportRow, SessionConfig, Summary, TrainingRun};
