//! Kepler's equation.

/// Newton iterations spent on Kepler's equation. There is no convergence
/// test; the iteration count is the stopping rule.
pub const KEPLER_ITERATIONS: usize = 10;

/// Solve `M = E − e·sin(E)` for the eccentric anomaly `E` (radians).
///
/// Seeds Newton's method at `E₀ = M` and runs exactly
/// [`KEPLER_ITERATIONS`] steps.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let mut e_anom = mean_anomaly;
    for _ in 0..KEPLER_ITERATIONS {
        let residual = mean_anomaly - (e_anom - eccentricity * e_anom.sin());
        let derivative = 1.0 - eccentricity * e_anom.cos();
        e_anom += residual / derivative;
    }
    e_anom
}
