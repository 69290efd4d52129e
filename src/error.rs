use thiserror::Error;

/// Reasons a session configuration is rejected before training starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("epoch count must be between {min} and {max}, got {got}")]
    EpochsOutOfRange { got: usize, min: usize, max: usize },

    #[error("parameter `{name}` must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config file: {0}")]
    Json(#[from] serde_json::Error),
}
