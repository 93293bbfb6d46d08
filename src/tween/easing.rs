//! Easing curves for camera transitions.
//!
//! Maps linear tween progress onto shaped progress so camera moves start
//! and settle smoothly instead of snapping. All curves evaluate in a few
//! floating-point operations.

use serde::{Deserialize, Serialize};

/// Shape of a transition's progress curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Straight interpolation with no shaping.
    Linear,
    /// Quadratic ease-in (slow departure, fast arrival).
    QuadraticIn,
    /// Quadratic ease-out (fast departure, slow arrival).
    QuadraticOut,
    /// Cubic Hermite curve with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control point, pulls the early part of the curve.
        c1: f32,
        /// Second control point, pulls the late part of the curve.
        c2: f32,
    },
}

impl EasingFunction {
    /// Default curve: `CubicHermite` with c1=0.33, c2=1.0, a gentle ease-out
    /// that reads as the camera "settling" onto its target.
    pub const DEFAULT: Self = Self::CubicHermite { c1: 0.33, c2: 1.0 };

    /// Evaluate the curve at linear progress `t`.
    ///
    /// Input is clamped to [0.0, 1.0]; output stays in [0.0, 1.0] and hits
    /// both endpoints exactly, so a finished tween lands precisely on its
    /// target.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::QuadraticIn => t * t,
            Self::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::CubicHermite { c1, c2 } => {
                // f(t) = c1·3t(1-t)² + c2·3(1-t)t² + t³  (c0=0, c3=1)
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn cubic_hermite_hits_endpoints() {
        let hermite = EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };
        assert_eq!(hermite.evaluate(0.0), 0.0);
        assert!((hermite.evaluate(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cubic_hermite_default_is_ease_out() {
        // With c1=0.33, c2=1.0 the camera covers more than a quarter of the
        // distance in the first quarter of the duration.
        let hermite = EasingFunction::DEFAULT;
        let quarter = hermite.evaluate(0.25);
        assert!(quarter > 0.25, "expected ease-out shape, got {quarter}");
    }

    #[test]
    fn input_is_clamped() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);

        let hermite = EasingFunction::DEFAULT;
        assert_eq!(hermite.evaluate(-0.5), 0.0);
        assert!((hermite.evaluate(1.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn quadratic_shapes() {
        assert_eq!(EasingFunction::QuadraticIn.evaluate(0.5), 0.25);
        assert_eq!(EasingFunction::QuadraticOut.evaluate(0.5), 0.75);
    }

    #[test]
    fn default_is_cubic_hermite() {
        assert_eq!(EasingFunction::default(), EasingFunction::DEFAULT);
        assert_eq!(
            EasingFunction::default(),
            EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 }
        );
    }

    #[test]
    fn serde_round_trip() {
        #[derive(Serialize, Deserialize)]
        struct Wrap {
            easing: EasingFunction,
        }

        let toml_str = "easing = \"quadratic_out\"\n";
        let wrap: Wrap = toml::from_str(toml_str).unwrap();
        assert_eq!(wrap.easing, EasingFunction::QuadraticOut);

        let hermite = Wrap {
            easing: EasingFunction::DEFAULT,
        };
        let text = toml::to_string(&hermite).unwrap();
        let back: Wrap = toml::from_str(&text).unwrap();
        assert_eq!(back.easing, EasingFunction::DEFAULT);
    }
}
