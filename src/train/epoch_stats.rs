use serde::{Serialize, Deserialize};

use crate::network::ForwardPass;
use crate::optim::OutputGradients;

/// Everything computed during one epoch, before the weights were updated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Forward pass with the weights in effect at the start of the epoch.
    pub pass: ForwardPass,
    /// Half squared error of output 1.
    pub e1: f64,
    /// Half squared error of output 2.
    pub e2: f64,
    /// `e1 + e2`.
    pub total_error: f64,
    /// Output deltas that drove this epoch's update.
    pub gradients: OutputGradients,
}
