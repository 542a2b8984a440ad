//! Easing curves that map linear animation progress to an eased factor.

use crate::bezier::CubicBezier;

/// Easing curve for camera animations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    /// Constant speed, no acceleration.
    Linear,
    /// Slow start, fast end.
    EaseIn,
    /// Fast start, slow end.
    EaseOut,
    /// Arbitrary one-dimensional cubic Bézier.
    Bezier(CubicBezier),
}

impl Easing {
    /// Map a linear progress value to an eased factor.
    ///
    /// Progress is clamped to `0.0..=1.0` first, so a late frame never
    /// overshoots the curve.
    pub fn apply(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::Bezier(curve) => curve.evaluate(t),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Bezier(CubicBezier::EASE_IN_OUT)
    }
}
