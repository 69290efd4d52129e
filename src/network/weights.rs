use rand::Rng;
use serde::{Serialize, Deserialize};

/// The eight connection weights of the 2-2-2 network.
///
/// Layout:
/// - `w1`, `w3` — x1, x2 → h1
/// - `w2`, `w4` — x1, x2 → h2
/// - `w5`, `w6` — h1, h2 → o1
/// - `w7`, `w8` — h1, h2 → o2
///
/// Only the output-layer weights (`w5`..`w8`) change during training.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub w1: f64,
    pub w2: f64,
    pub w3: f64,
    pub w4: f64,
    pub w5: f64,
    pub w6: f64,
    pub w7: f64,
    pub w8: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Weights {
            w1: 0.3,
            w2: 0.25,
            w3: 0.4,
            w4: 0.35,
            w5: 0.45,
            w6: 0.4,
            w7: 0.7,
            w8: 0.6,
        }
    }
}

impl Weights {
    /// Draws every weight uniformly from [-1, 1).
    pub fn random<R: Rng>(rng: &mut R) -> Weights {
        let mut draw = || rng.gen::<f64>() * 2.0 - 1.0;
        Weights {
            w1: draw(),
            w2: draw(),
            w3: draw(),
            w4: draw(),
            w5: draw(),
            w6: draw(),
            w7: draw(),
            w8: draw(),
        }
    }

    /// Hidden-layer weights in order `[w1, w2, w3, w4]`.
    pub fn hidden(&self) -> [f64; 4] {
        [self.w1, self.w2, self.w3, self.w4]
    }

    /// Output-layer weights in order `[w5, w6, w7, w8]`.
    pub fn output(&self) -> [f64; 4] {
        [self.w5, self.w6, self.w7, self.w8]
    }

    /// All eight weights in order `[w1, ..., w8]`.
    pub fn as_array(&self) -> [f64; 8] {
        [self.w1, self.w2, self.w3, self.w4, self.w5, self.w6, self.w7, self.w8]
    }
}
