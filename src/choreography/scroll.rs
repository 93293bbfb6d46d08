//! Scroll-driven dolly for the reveal phase.
//!
//! Wheel deltas accumulate into a clamped scalar travel distance, and that
//! one scalar deterministically places the camera along a rising,
//! pulling-back path. Same accumulated travel, same camera pose, always.

use glam::Vec3;

use crate::options::ScrollOptions;

/// Travel this close to an endpoint snaps onto it.
///
/// Hundreds of small f64 additions drift by far less than this, so a user
/// who scrolls the nominal distance really reaches `max_distance` (and
/// really returns to 0.0) instead of stalling a rounding error short of
/// the threshold.
const SNAP_EPSILON: f64 = 1e-6;

/// Maps accumulated wheel travel onto a camera dolly path.
///
/// The path starts at `origin` and moves the eye backward along +Z while
/// raising it, so the subject is revealed from a low close-up into a
/// high three-quarter view.
#[derive(Debug, Clone)]
pub struct ScrollDolly {
    origin: Vec3,
    accumulated: f64,
    sensitivity: f64,
    max_distance: f64,
    max_elevation: f64,
}

impl ScrollDolly {
    /// Create a dolly anchored at the given starting eye position.
    #[must_use]
    pub fn new(origin: Vec3, options: &ScrollOptions) -> Self {
        Self {
            origin,
            accumulated: 0.0,
            sensitivity: options.sensitivity,
            // Guard the division in fraction(); a zero travel range would
            // otherwise poison the camera position with NaN.
            max_distance: options.max_distance.max(f64::MIN_POSITIVE),
            max_elevation: options.max_elevation,
        }
    }

    /// Apply one raw wheel delta and return the new accumulated travel.
    ///
    /// The delta is scaled by sensitivity and the result clamped to
    /// [0, `max_distance`], so overscroll in either direction parks the
    /// dolly exactly at an endpoint.
    pub fn advance(&mut self, delta: f32) -> f64 {
        let next = f64::from(delta)
            .mul_add(self.sensitivity, self.accumulated)
            .clamp(0.0, self.max_distance);
        self.accumulated = if next < SNAP_EPSILON {
            0.0
        } else if self.max_distance - next < SNAP_EPSILON {
            self.max_distance
        } else {
            next
        };
        self.accumulated
    }

    /// Accumulated travel in [0, `max_distance`].
    #[inline]
    #[must_use]
    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    /// Whether the dolly sits at full travel.
    ///
    /// Endpoint snapping makes this comparison exact once the threshold
    /// is reached.
    #[inline]
    #[must_use]
    pub fn at_max(&self) -> bool {
        self.accumulated >= self.max_distance
    }

    /// Whether the dolly sits at the start of its travel.
    #[inline]
    #[must_use]
    pub fn at_rest(&self) -> bool {
        self.accumulated <= 0.0
    }

    /// Fraction of the travel completed, in [0, 1].
    #[inline]
    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.accumulated / self.max_distance
    }

    /// Camera eye position for the current travel.
    ///
    /// The eye recedes along +Z by the accumulated distance and rises
    /// linearly toward `max_elevation` above the origin height.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        let rise = self.fraction() * self.max_elevation;
        Vec3::new(
            self.origin.x,
            (f64::from(self.origin.y) + rise) as f32,
            (f64::from(self.origin.z) + self.accumulated) as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_dolly() -> ScrollDolly {
        ScrollDolly::new(Vec3::new(0.0, 0.8, 2.4), &ScrollOptions::default())
    }

    #[test]
    fn travel_clamps_at_both_ends() {
        let mut dolly = test_dolly();

        // Scrolling up from rest stays at rest.
        assert_eq!(dolly.advance(-500.0), 0.0);
        assert!(dolly.at_rest());

        // A huge positive delta parks exactly at max travel.
        assert_eq!(dolly.advance(1_000_000.0), 7.0);
        assert!(dolly.at_max());

        // Further positive deltas change nothing.
        assert_eq!(dolly.advance(300.0), 7.0);
    }

    #[test]
    fn many_small_ticks_land_exactly_on_the_endpoint() {
        let mut dolly = test_dolly();
        for _ in 0..700 {
            let _ = dolly.advance(1.0);
        }
        // 700 × 1.0 × 0.01 must not stall a rounding error short of 7.0.
        assert_eq!(dolly.accumulated(), 7.0);
        assert!(dolly.at_max());
    }

    #[test]
    fn default_sensitivity_scales_deltas() {
        let mut dolly = test_dolly();
        let _ = dolly.advance(100.0);
        assert!((dolly.accumulated() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn same_travel_same_eye() {
        let mut a = test_dolly();
        let mut b = test_dolly();

        let _ = a.advance(350.0);
        // b wanders but ends at the same accumulated travel.
        let _ = b.advance(600.0);
        let _ = b.advance(-400.0);
        let _ = b.advance(150.0);

        assert!((a.accumulated() - b.accumulated()).abs() < 1e-9);
        assert!((a.eye() - b.eye()).length() < 1e-6);
    }

    #[test]
    fn eye_rises_and_recedes_with_travel() {
        let mut dolly = test_dolly();
        let start = dolly.eye();
        assert_eq!(start, Vec3::new(0.0, 0.8, 2.4));

        let _ = dolly.advance(350.0); // half travel at default sensitivity
        let mid = dolly.eye();
        assert!((mid.z - (2.4 + 3.5)).abs() < 1e-5);
        assert!((mid.y - (0.8 + 1.0)).abs() < 1e-5);
        assert_eq!(mid.x, 0.0);

        let _ = dolly.advance(10_000.0);
        let full = dolly.eye();
        assert!((full.z - 9.4).abs() < 1e-5);
        assert!((full.y - 2.8).abs() < 1e-5);
    }

    #[test]
    fn reversing_the_same_ticks_returns_exactly_to_rest() {
        let mut dolly = test_dolly();
        for _ in 0..700 {
            let _ = dolly.advance(1.0);
        }
        for _ in 0..700 {
            let _ = dolly.advance(-1.0);
        }
        assert_eq!(dolly.accumulated(), 0.0);
        assert!(dolly.at_rest());
        assert_eq!(dolly.eye(), Vec3::new(0.0, 0.8, 2.4));
    }

    #[test]
    fn degenerate_travel_range_does_not_produce_nan() {
        let options = ScrollOptions {
            max_distance: 0.0,
            ..ScrollOptions::default()
        };
        let mut dolly = ScrollDolly::new(Vec3::ZERO, &options);
        let _ = dolly.advance(100.0);
        assert!(dolly.eye().is_finite());
    }
}
