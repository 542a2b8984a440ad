//! Eases the orbit look-at target from its current value to a new body.

use glam::Vec3;
use orrery_animation::{AnimationState, Easing, Step};
use tracing::debug;

use crate::rig::CameraRig;

/// Duration and easing shared by the camera animators.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    /// Seconds from `animate` to arrival.
    pub duration: f32,
    pub easing: Easing,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            duration: 2.0,
            easing: Easing::default(),
        }
    }
}

/// Shape of the path the look-at target follows.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TargetMotion {
    /// Component-wise blend from the start to the destination.
    #[default]
    Blend,
    /// Drift a fixed reach away from the start, then jump to a fixed reach
    /// short of the destination and close in. The path length does not
    /// depend on how far apart the two bodies are.
    Warp(WarpParams),
}

/// Tunables for [`TargetMotion::Warp`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WarpParams {
    /// Eased factor at which the target jumps from the departure leg to the
    /// arrival leg.
    pub threshold: f32,
    /// Scene units travelled away from the start by the end of the departure.
    pub departure: f32,
    /// Scene units short of the destination where the arrival leg begins.
    pub arrival: f32,
}

impl Default for WarpParams {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            departure: 3.0,
            arrival: 3.0,
        }
    }
}

/// Animates the look-at target of a [`CameraRig`].
///
/// Idle until [`animate`](Self::animate) is called. A new call mid-flight
/// restarts from wherever the target currently is.
#[derive(Clone, Debug)]
pub struct TargetAnimator {
    state: AnimationState<Vec3>,
    easing: Easing,
    motion: TargetMotion,
}

impl TargetAnimator {
    /// Create an idle animator resting on the rig's current target.
    pub fn new(rig: &impl CameraRig, timing: Timing) -> Self {
        Self {
            state: AnimationState::at_rest(rig.target(), timing.duration),
            easing: timing.easing,
            motion: TargetMotion::Blend,
        }
    }

    pub fn with_motion(mut self, motion: TargetMotion) -> Self {
        self.motion = motion;
        self
    }

    pub fn motion(&self) -> TargetMotion {
        self.motion
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    /// Where the animation is heading (or rests).
    pub fn destination(&self) -> Vec3 {
        self.state.target()
    }

    /// Start moving the look-at target towards `destination`.
    pub fn animate(&mut self, destination: Vec3, rig: &impl CameraRig) {
        self.state.restart(rig.target(), destination);
    }

    /// Advance by `delta` seconds and write the new target into `rig`.
    pub fn update(&mut self, delta: f32, rig: &mut impl CameraRig) {
        match self.state.step(delta) {
            Step::Idle => {}
            Step::Finished => rig.set_target(self.state.target()),
            Step::Running { progress } => {
                let factor = self.easing.apply(progress);
                match self.sample(factor) {
                    Some(target) => rig.set_target(target),
                    None => {
                        debug!("warp start and destination coincide, arriving at once");
                        self.state.finish();
                        rig.set_target(self.state.target());
                    }
                }
            }
        }
    }

    /// Target position at an eased factor; `None` when a warp has no direction.
    fn sample(&self, factor: f32) -> Option<Vec3> {
        let start = self.state.initial();
        let end = self.state.target();
        match self.motion {
            TargetMotion::Blend => Some(start.lerp(end, factor)),
            TargetMotion::Warp(warp) => {
                let offset = end - start;
                let length = offset.length();
                if !length.is_finite() || length <= f32::EPSILON {
                    return None;
                }
                let direction = offset / length;
                if factor < warp.threshold {
                    Some(start + direction * (factor * warp.departure))
                } else {
                    Some(end - direction * ((1.0 - factor) * warp.arrival))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rig::OrbitRig;

    fn rig() -> OrbitRig {
        OrbitRig::new(Vec3::new(0.0, -10.0, 5.0), Vec3::ZERO, 50.0, 1.0)
    }

    fn timing() -> Timing {
        Timing {
            duration: 2.0,
            easing: Easing::default(),
        }
    }

    #[test]
    fn test_new_animator_is_idle() {
        let mut rig = rig();
        let mut animator = TargetAnimator::new(&rig, timing());
        assert!(!animator.is_animating());
        rig.set_target(Vec3::new(1.0, 2.0, 3.0));
        animator.update(0.5, &mut rig);
        assert_eq!(rig.target(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_full_duration_step_lands_exactly() {
        let mut rig = rig();
        let mut animator = TargetAnimator::new(&rig, timing());
        let p = Vec3::new(12.5, -3.25, 0.75);
        animator.animate(p, &rig);
        animator.update(2.0, &mut rig);
        assert_eq!(rig.target(), p);
        assert!(!animator.is_animating());

        animator.update(2.0, &mut rig);
        assert_eq!(rig.target(), p);
    }

    #[test]
    fn test_mid_animation_is_eased_blend() {
        let mut rig = rig();
        let mut animator = TargetAnimator::new(&rig, timing());
        animator.animate(Vec3::new(10.0, 0.0, 0.0), &rig);
        animator.update(0.5, &mut rig);
        // progress 0.25 on 3t² − 2t³ = 0.15625
        assert!((rig.target().x - 1.5625).abs() < 1e-4, "{:?}", rig.target());
        animator.update(0.5, &mut rig);
        assert!((rig.target().x - 5.0).abs() < 1e-4, "{:?}", rig.target());
    }

    #[test]
    fn test_reanimate_discards_previous_destination() {
        let mut rig = rig();
        let mut animator = TargetAnimator::new(&rig, timing());
        let p1 = Vec3::new(10.0, 0.0, 0.0);
        let p2 = Vec3::new(-4.0, 8.0, 1.0);
        animator.animate(p1, &rig);
        animator.update(1.0, &mut rig);
        let partial = rig.target();
        assert!(partial != Vec3::ZERO && partial != p1);

        animator.animate(p2, &rig);
        assert_eq!(animator.destination(), p2);
        animator.update(0.1, &mut rig);
        // Restarted from the partial value, not from the origin or p1.
        assert!((rig.target() - partial).length() < (p2 - partial).length());
        animator.update(2.0, &mut rig);
        assert_eq!(rig.target(), p2);
    }

    #[test]
    fn test_warp_departs_at_fixed_reach() {
        let mut rig = rig();
        let mut animator = TargetAnimator::new(&rig, timing())
            .with_motion(TargetMotion::Warp(WarpParams::default()));
        let far = Vec3::new(1000.0, 0.0, 0.0);
        animator.animate(far, &rig);
        animator.update(0.5, &mut rig);
        // factor 0.15625 × 3 units along +x, independent of the 1000-unit gap.
        assert!((rig.target() - Vec3::new(0.46875, 0.0, 0.0)).length() < 1e-4);

        animator.update(1.0, &mut rig);
        // progress 0.75 → factor 0.84375, arrival leg 3 units short.
        let expected = far - Vec3::X * (0.15625 * 3.0);
        assert!((rig.target() - expected).length() < 1e-3, "{:?}", rig.target());

        animator.update(1.0, &mut rig);
        assert_eq!(rig.target(), far);
    }

    #[test]
    fn test_warp_to_same_point_arrives_immediately() {
        let mut rig = rig();
        rig.set_target(Vec3::new(2.0, 2.0, 2.0));
        let mut animator = TargetAnimator::new(&rig, timing())
            .with_motion(TargetMotion::Warp(WarpParams::default()));
        animator.animate(Vec3::new(2.0, 2.0, 2.0), &rig);
        animator.update(0.1, &mut rig);
        assert!(!animator.is_animating());
        assert!(rig.target().is_finite());
        assert_eq!(rig.target(), Vec3::new(2.0, 2.0, 2.0));
    }
}
