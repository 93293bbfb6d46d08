use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Scroll-dolly tuning for the reveal phase.
///
/// Stored as f64: travel accumulates hundreds of tiny increments, and the
/// threshold comparison at full travel has to stay exact.
pub struct ScrollOptions {
    /// Multiplier applied to raw wheel deltas before accumulation.
    pub sensitivity: f64,
    /// Total dolly travel, in world units, from the landing pose to the
    /// fully revealed pose.
    pub max_distance: f64,
    /// How far the eye rises over the full travel, in world units.
    pub max_elevation: f64,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            sensitivity: 0.01,
            max_distance: 7.0,
            max_elevation: 2.0,
        }
    }
}
