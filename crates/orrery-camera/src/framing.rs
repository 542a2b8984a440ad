//! Eases zoom distance and field of view so a newly selected body fills the
//! view, with a wide-angle swoop halfway through.

use orrery_animation::{AnimationState, Easing, Step};
use tracing::{debug, warn};

use crate::aabb::Framed;
use crate::rig::CameraRig;
use crate::target::Timing;

/// Field-of-view and distance limits for framing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FramingLimits {
    /// Resting field of view, degrees.
    pub min_fov_deg: f32,
    /// Widest field of view, reached at the midpoint of a transition.
    pub max_fov_deg: f32,
    /// Upper zoom bound once a transition finishes.
    pub max_distance: f32,
    /// Ideal distance as a multiple of the subject's largest extent.
    pub framing_factor: f32,
}

impl Default for FramingLimits {
    fn default() -> Self {
        Self {
            min_fov_deg: 50.0,
            max_fov_deg: 120.0,
            max_distance: 200.0,
            framing_factor: 1.5,
        }
    }
}

/// Animates a [`CameraRig`]'s zoom bounds and field of view.
#[derive(Clone, Debug)]
pub struct FramingAnimator {
    state: AnimationState<f32>,
    easing: Easing,
    limits: FramingLimits,
}

impl FramingAnimator {
    /// Create an idle animator resting at the rig's current distance.
    pub fn new(rig: &impl CameraRig, timing: Timing, limits: FramingLimits) -> Self {
        Self {
            state: AnimationState::at_rest(rig.distance(), timing.duration),
            easing: timing.easing,
            limits,
        }
    }

    pub fn limits(&self) -> FramingLimits {
        self.limits
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    /// Distance the current (or last) transition heads to.
    pub fn target_distance(&self) -> f32 {
        self.state.target()
    }

    /// Ideal viewing distance for `subject`.
    pub fn ideal_distance(&self, subject: &impl Framed) -> f32 {
        subject.bounding_box().largest_extent() * self.limits.framing_factor
    }

    /// Start framing `subject`. Returns `false` when the camera is already at
    /// the ideal distance (or the subject has unusable bounds) and nothing
    /// was started.
    pub fn animate(&mut self, subject: &impl Framed, rig: &mut impl CameraRig) -> bool {
        let target_distance = self.ideal_distance(subject);
        let initial_distance = rig.distance();
        if !target_distance.is_finite() || !initial_distance.is_finite() {
            warn!(
                target_distance,
                initial_distance, "cannot frame subject with non-finite distance"
            );
            return false;
        }
        if initial_distance == target_distance {
            debug!(target_distance, "subject already framed");
            return false;
        }

        rig.set_fov(self.limits.min_fov_deg);
        rig.set_distance_bounds(initial_distance, initial_distance);
        self.state.restart(initial_distance, target_distance);
        true
    }

    /// Advance by `delta` seconds and write fov and zoom bounds into `rig`.
    pub fn update(&mut self, delta: f32, rig: &mut impl CameraRig) {
        match self.state.step(delta) {
            Step::Idle => {}
            Step::Running { progress } => {
                let factor = self.easing.apply(progress);
                rig.set_fov(self.swoop_fov(factor));
                let initial = self.state.initial();
                let distance = initial + (self.state.target() - initial) * factor;
                rig.set_distance_bounds(distance, distance);
            }
            Step::Finished => {
                let target = self.state.target();
                rig.set_distance_bounds(target, self.limits.max_distance.max(target));
                rig.set_fov(self.limits.min_fov_deg);
            }
        }
    }

    /// `min_fov` at both ends, `max_fov` at the midpoint.
    fn swoop_fov(&self, factor: f32) -> f32 {
        let fov_factor = (factor - 0.5).abs() * 2.0;
        self.limits.min_fov_deg * fov_factor + self.limits.max_fov_deg * (1.0 - fov_factor)
    }
}
