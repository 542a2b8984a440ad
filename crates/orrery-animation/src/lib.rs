//! Easing curves and time-driven animation state for the orrery camera.
//!
//! Everything here is pure and frame-rate independent: callers feed elapsed
//! seconds in and read interpolation factors out.

mod bezier;
mod easing;
mod state;

pub use bezier::{CubicBezier, bezier};
pub use easing::Easing;
pub use state::{AnimationState, Step};
