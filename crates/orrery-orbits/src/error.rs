//! Orbital element validation errors.

/// Why a set of orbital elements cannot be solved.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ElementsError {
    /// A field is NaN or infinite.
    #[error("orbital element `{field}` is not a finite number")]
    NonFinite { field: &'static str },

    /// Eccentricity outside `[0, 1)`; only closed orbits are supported.
    #[error("eccentricity {0} is outside [0, 1)")]
    Eccentricity(f64),

    /// Semi-major axis must be strictly positive.
    #[error("semi-major axis {0} AU is not positive")]
    SemiMajorAxis(f64),
}
