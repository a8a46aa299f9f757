//! Twist animation parameters and interpolation functions.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// Default duration of a quarter-turn animation, in seconds.
pub const DEFAULT_TWIST_DURATION: f32 = 0.15;

/// Angle of every twist, in degrees.
pub const TWIST_ANGLE: f32 = 90.0;

/// First control point of the ease-in Bezier curve.
const EASE_IN_P1: [f32; 2] = [0.42, 0.0];
/// Second control point of the ease-in Bezier curve.
const EASE_IN_P2: [f32; 2] = [1.0, 1.0];

/// Function that maps a float from the range 0.0 to 1.0 to another float
/// from 0.0 to 1.0.
#[derive(
    Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash, VariantArray,
)]
#[serde(rename_all = "snake_case")]
pub enum InterpolateFn {
    /// Cubic Bezier with control points `(0.42, 0)` and `(1, 1)`.
    ///
    /// The input is used directly as the Bezier parameter rather than solved
    /// for as the curve's X coordinate, so the timing is slightly different
    /// from a CSS `ease-in` curve.
    #[default]
    EaseIn,
    /// Linear.
    Lerp,
    /// Half a cosine wave.
    Cosine,
    /// Smoothstep.
    Cubic,
}

impl InterpolateFn {
    /// Returns the interpolation value in the range [0, 1] for `t` in the
    /// range [0, 1].
    pub fn interpolate(self, t: f32) -> f32 {
        match self {
            Self::EaseIn => bezier_y(t, EASE_IN_P1, EASE_IN_P2),

            Self::Lerp => t,

            Self::Cosine => (1.0 - (t * PI).cos()) / 2.0,

            Self::Cubic => (3.0 - 2.0 * t) * t * t,
        }
    }
}

/// Evaluates the Y coordinate of the cubic Bezier curve from `(0, 0)` to
/// `(1, 1)` with control points `p1` and `p2` at parameter `t`.
fn bezier_y(t: f32, p1: [f32; 2], p2: [f32; 2]) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1[1] + 3.0 * u * t * t * p2[1] + t * t * t
}

/// Timing of a twist animation.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(default)]
pub struct TwistAnimation {
    /// Duration of one quarter turn, in seconds.
    pub duration: f32,
    /// Easing curve.
    pub interpolation: InterpolateFn,
}
impl Default for TwistAnimation {
    fn default() -> Self {
        Self {
            duration: DEFAULT_TWIST_DURATION,
            interpolation: InterpolateFn::default(),
        }
    }
}
