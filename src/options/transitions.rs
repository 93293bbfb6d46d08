use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::tween::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Durations and easing for the tweened camera moves.
///
/// Durations are stored as milliseconds so the options file stays plain
/// TOML; accessor methods hand out [`Duration`]s.
pub struct TransitionOptions {
    /// Length of the discover move (full reveal to overview), in ms.
    pub discover_ms: u64,
    /// Length of a hotspot focus move, in ms.
    pub focus_ms: u64,
    /// Length of the move back out of a hotspot, in ms.
    pub return_ms: u64,
    /// Easing curve shared by all three moves.
    pub easing: EasingFunction,
}

impl TransitionOptions {
    /// Duration of the discover move.
    #[inline]
    #[must_use]
    pub fn discover(&self) -> Duration {
        Duration::from_millis(self.discover_ms)
    }

    /// Duration of a hotspot focus move.
    #[inline]
    #[must_use]
    pub fn focus(&self) -> Duration {
        Duration::from_millis(self.focus_ms)
    }

    /// Duration of the move back from a hotspot.
    #[inline]
    #[must_use]
    pub fn return_move(&self) -> Duration {
        Duration::from_millis(self.return_ms)
    }
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            discover_ms: 2000,
            focus_ms: 1600,
            return_ms: 1400,
            easing: EasingFunction::DEFAULT,
        }
    }
}
