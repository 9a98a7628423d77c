use serde::{Deserialize, Serialize};

/// User-adjustable coefficients converting a player's totals into a single
/// score.
///
/// Changing a weight only affects the next scoring evaluation; recorded
/// matches are never rewritten. Negative values are allowed (losses usually
/// penalize).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeightVector {
    pub win: f64,
    pub loss: f64,
    pub goal: f64,
    pub assist: f64,
}

impl Default for WeightVector {
    fn default() -> Self {
        Self { win: 3.0, loss: -1.0, goal: 2.0, assist: 1.5 }
    }
}
