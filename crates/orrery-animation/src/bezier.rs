//! One-dimensional cubic Bézier evaluation.

/// Evaluate the cubic Bézier blend of four scalar control values at `t`.
///
/// `(1−t)³·p0 + 3(1−t)²t·p1 + 3(1−t)t²·p2 + t³·p3`
///
/// `t` is not clamped: values outside `[0, 1]` extrapolate along the polynomial.
pub fn bezier(t: f32, p0: f32, p1: f32, p2: f32, p3: f32) -> f32 {
    let it = 1.0 - t;
    it * it * it * p0 + 3.0 * it * it * t * p1 + 3.0 * it * t * t * p2 + t * t * t * p3
}

/// Four scalar control values of a cubic Bézier curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub p0: f32,
    pub p1: f32,
    pub p2: f32,
    pub p3: f32,
}

impl CubicBezier {
    /// Slow start, slow end. The curve every camera animator uses by default.
    pub const EASE_IN_OUT: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    /// Straight line from 0 to 1 (control values evenly spaced).
    pub const LINEAR: Self = Self::new(0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0);

    pub const fn new(p0: f32, p1: f32, p2: f32, p3: f32) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Build from an `[p0, p1, p2, p3]` array, as stored in config files.
    pub const fn from_array(points: [f32; 4]) -> Self {
        Self::new(points[0], points[1], points[2], points[3])
    }

    /// Evaluate the curve at `t` (no clamping).
    pub fn evaluate(&self, t: f32) -> f32 {
        bezier(t, self.p0, self.p1, self.p2, self.p3)
    }
}

impl Default for CubicBezier {
    fn default() -> Self {
        Self::EASE_IN_OUT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_in_out_endpoints() {
        assert_eq!(bezier(0.0, 0.0, 0.0, 1.0, 1.0), 0.0);
        assert_eq!(bezier(1.0, 0.0, 0.0, 1.0, 1.0), 1.0);
    }

    #[test]
    fn test_ease_in_out_is_monotonic() {
        let mut previous = bezier(0.0, 0.0, 0.0, 1.0, 1.0);
        for i in 1..=1000 {
            let t = i as f32 / 1000.0;
            let value = bezier(t, 0.0, 0.0, 1.0, 1.0);
            assert!(value >= previous, "decreased at t={t}: {value} < {previous}");
            previous = value;
        }
    }

    #[test]
    fn test_ease_in_out_midpoint_is_half() {
        let mid = CubicBezier::EASE_IN_OUT.evaluate(0.5);
        assert!((mid - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_ease_in_out_starts_slow() {
        // 3t² − 2t³ at t = 0.1
        let v = CubicBezier::EASE_IN_OUT.evaluate(0.1);
        assert!((v - 0.028).abs() < 1e-6, "got {v}");
        assert!(v < 0.1);
    }

    #[test]
    fn test_linear_control_points_give_identity() {
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let v = CubicBezier::LINEAR.evaluate(t);
            assert!((v - t).abs() < 1e-6, "t={t} v={v}");
        }
    }

    #[test]
    fn test_no_clamping_outside_unit_interval() {
        // Extrapolating the ease-in-out polynomial: 3t² − 2t³.
        let v = CubicBezier::EASE_IN_OUT.evaluate(2.0);
        assert!((v - (-4.0)).abs() < 1e-5, "got {v}");
        let v = CubicBezier::EASE_IN_OUT.evaluate(-1.0);
        assert!((v - 5.0).abs() < 1e-5, "got {v}");
    }

    #[test]
    fn test_from_array_matches_new() {
        assert_eq!(
            CubicBezier::from_array([0.1, 0.2, 0.3, 0.4]),
            CubicBezier::new(0.1, 0.2, 0.3, 0.4)
        );
    }
}
