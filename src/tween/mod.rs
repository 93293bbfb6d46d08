//! Time-based interpolation for camera moves.
//!
//! A [`Tween`] carries a start value, a target value, a duration, and an
//! easing curve. It holds no timer of its own; callers pass the current
//! [`Instant`] into every query, which keeps sampling deterministic and
//! lets tests drive time explicitly.

pub mod easing;

pub use easing::EasingFunction;

use web_time::{Duration, Instant};

/// Values a [`Tween`] can interpolate between.
pub trait Interpolate: Copy {
    /// Blend from `self` toward `target` by factor `t` in [0, 1].
    #[must_use]
    fn interpolate(self, target: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    #[inline]
    fn interpolate(self, target: Self, t: f32) -> Self {
        (target - self).mul_add(t, self)
    }
}

impl Interpolate for glam::Vec3 {
    #[inline]
    fn interpolate(self, target: Self, t: f32) -> Self {
        self.lerp(target, t)
    }
}

/// An in-flight interpolation from one value to another.
///
/// Progress is derived from wall-clock instants rather than accumulated
/// frame deltas, so a stalled frame cannot desynchronize the animation.
/// A zero duration completes immediately.
#[derive(Debug, Clone, Copy)]
pub struct Tween<V> {
    start: V,
    target: V,
    started_at: Instant,
    duration: Duration,
    easing: EasingFunction,
}

impl<V: Interpolate> Tween<V> {
    /// Begin a tween from `start` to `target` at time `now`.
    #[must_use]
    pub fn new(
        start: V,
        target: V,
        duration: Duration,
        easing: EasingFunction,
        now: Instant,
    ) -> Self {
        Self {
            start,
            target,
            started_at: now,
            duration,
            easing,
        }
    }

    /// Linear progress in [0.0, 1.0] at time `now`.
    #[inline]
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Interpolated value at time `now`, with easing applied.
    ///
    /// At or past the end of the duration this returns exactly `target`
    /// (every easing curve evaluates to 1.0 at t=1.0).
    #[inline]
    #[must_use]
    pub fn sample(&self, now: Instant) -> V {
        let t = self.easing.evaluate(self.progress(now));
        self.start.interpolate(self.target, t)
    }

    /// Whether the tween has reached the end of its duration.
    #[inline]
    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// The value this tween is heading toward.
    #[inline]
    #[must_use]
    pub fn target(&self) -> V {
        self.target
    }
}
