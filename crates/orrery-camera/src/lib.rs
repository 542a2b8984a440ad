//! Orbit camera, its animators, and screen-space projection of body labels.
//!
//! The animators never own the camera. They write through the [`CameraRig`]
//! trait, so any orbit-controls implementation can be driven by them;
//! [`OrbitRig`] is the one the orrery ships with.

mod aabb;
mod framing;
mod projection;
mod rig;
mod target;

pub use aabb::{Aabb, Framed};
pub use framing::{FramingAnimator, FramingLimits};
pub use projection::{LabelLayout, ScreenProjection, Viewport, project};
pub use rig::{CameraRig, CameraView, OrbitRig};
pub use target::{TargetAnimator, TargetMotion, Timing, WarpParams};
