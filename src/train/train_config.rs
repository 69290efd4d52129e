use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::error::ConfigError;
use crate::network::Weights;

/// Smallest accepted epoch count.
pub const MIN_EPOCHS: usize = 2;
/// Largest accepted epoch count.
pub const MAX_EPOCHS: usize = 1000;

/// Everything one training session needs, passed by value into the loop.
///
/// Defaults reproduce the classic worked example: inputs (0.1, 0.2),
/// targets (0.4, 0.6), learning rate 0.5, 100 epochs.
///
/// Fields missing from a JSON file fall back to these defaults, so a config
/// file only has to list what it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub x1: f64,
    pub x2: f64,
    pub y1: f64,
    pub y2: f64,
    pub learning_rate: f64,
    pub epochs: usize,
    pub weights: Weights,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            x1: 0.1,
            x2: 0.2,
            y1: 0.4,
            y2: 0.6,
            learning_rate: 0.5,
            epochs: 100,
            weights: Weights::default(),
        }
    }
}

impl SessionConfig {
    /// Checks the epoch bounds and that every scalar is finite.
    ///
    /// Zero targets are accepted; they only make the percentage deviation
    /// in the report infinite or NaN.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_EPOCHS..=MAX_EPOCHS).contains(&self.epochs) {
            return Err(ConfigError::EpochsOutOfRange {
                got: self.epochs,
                min: MIN_EPOCHS,
                max: MAX_EPOCHS,
            });
        }

        let w = &self.weights;
        let scalars = [
            ("x1", self.x1),
            ("x2", self.x2),
            ("y1", self.y1),
            ("y2", self.y2),
            ("learning_rate", self.learning_rate),
            ("w1", w.w1),
            ("w2", w.w2),
            ("w3", w.w3),
            ("w4", w.w4),
            ("w5", w.w5),
            ("w6", w.w6),
            ("w7", w.w7),
            ("w8", w.w8),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }
        Ok(())
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a config from a JSON file previously written by `save_json`
    /// (or written by hand; absent fields take their defaults).
    pub fn load_json(path: impl AsRef<Path>) -> Result<SessionConfig, ConfigError> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SessionConfig::default().validate().is_ok());
    }

    #[test]
    fn epoch_bounds_are_inclusive() {
        for epochs in [MIN_EPOCHS, MAX_EPOCHS] {
            let cfg = SessionConfig { epochs, ..SessionConfig::default() };
            assert!(cfg.validate().is_ok());
        }
        for epochs in [0, 1, MAX_EPOCHS + 1] {
            let cfg = SessionConfig { epochs, ..SessionConfig::default() };
            assert!(matches!(
                cfg.validate(),
                Err(ConfigError::EpochsOutOfRange { got, .. }) if got == epochs
            ));
        }
    }

    #[test]
    fn non_finite_scalars_are_rejected() {
        let mut cfg = SessionConfig::default();
        cfg.weights.w6 = f64::NAN;
        assert!(matches!(cfg.validate(), Err(ConfigError::NonFinite { name: "w6", .. })));

        let cfg = SessionConfig { learning_rate: f64::INFINITY, ..SessionConfig::default() };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonFinite { name: "learning_rate", .. })
        ));
    }

    #[test]
    fn zero_target_is_accepted() {
        let cfg = SessionConfig { y1: 0.0, ..SessionConfig::default() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: SessionConfig =
            serde_json::from_str(r#"{ "epochs": 250, "weights": { "w5": 0.1 } }"#).unwrap();
        assert_eq!(cfg.epochs, 250);
        assert_eq!(cfg.x1, 0.1);
        assert_eq!(cfg.weights.w5, 0.1);
        assert_eq!(cfg.weights.w6, 0.4);
    }

    #[test]
    fn json_file_round_trip() {
        let path = std::env::temp_dir()
            .join(format!("backprop-tutor-config-{}.json", std::process::id()));
        let cfg = SessionConfig { epochs: 321, learning_rate: 0.25, ..SessionConfig::default() };
        cfg.save_json(&path).unwrap();
        let loaded = SessionConfig::load_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = SessionConfig::load_json("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
