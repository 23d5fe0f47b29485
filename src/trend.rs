//! Trend classification between two runs.

use serde::{Deserialize, Serialize};

/// Half-width of the dead-zone: diffs within `[-1.0, 1.0]` (inclusive) are
/// stable.
pub const TREND_THRESHOLD: f64 = 1.0;

/// Direction of change for a destination's index relative to the previous
/// run. Serialized lowercase in the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    /// Classifies a rounded index diff.
    ///
    /// | Diff            | Trend  |
    /// |-----------------|--------|
    /// | > 1.0           | up     |
    /// | < -1.0          | down   |
    /// | [-1.0, 1.0]     | stable |
    pub fn classify(diff: f64) -> Self {
        if diff > TREND_THRESHOLD {
            Trend::Up
        } else if diff < -TREND_THRESHOLD {
            Trend::Down
        } else {
            Trend::Stable
        }
    }
}
