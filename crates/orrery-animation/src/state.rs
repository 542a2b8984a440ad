//! Per-property animation state: initial value, target value and a timer.

/// What happened to an [`AnimationState`] during one [`step`](AnimationState::step).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// Nothing is animating. Callers must leave the animated property alone.
    Idle,
    /// Mid-animation; `progress` is elapsed / duration in `[0, 1)`.
    Running { progress: f32 },
    /// The animation finished on this step. Callers write the exact target.
    Finished,
}

/// State of one animated camera property.
///
/// Starts at rest (`elapsed == duration`). [`restart`](Self::restart) discards
/// any in-flight animation and begins a new one from the supplied live value;
/// there is never more than one active target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState<T: Copy> {
    initial: T,
    target: T,
    elapsed: f32,
    duration: f32,
}

impl<T: Copy> AnimationState<T> {
    /// Create a state at rest on `value`. A zero or negative duration is
    /// clamped to the smallest positive float so the next step still finishes.
    pub fn at_rest(value: T, duration: f32) -> Self {
        let duration = if duration.is_finite() {
            duration.max(f32::MIN_POSITIVE)
        } else {
            f32::MIN_POSITIVE
        };
        Self {
            initial: value,
            target: value,
            elapsed: duration,
            duration,
        }
    }

    /// Begin animating from `current` (the live value) towards `target`.
    pub fn restart(&mut self, current: T, target: T) {
        self.initial = current;
        self.target = target;
        self.elapsed = 0.0;
    }

    /// Advance the timer by `delta` seconds.
    ///
    /// Negative or non-finite deltas count as zero.
    pub fn step(&mut self, delta: f32) -> Step {
        if !self.is_animating() {
            return Step::Idle;
        }
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        self.elapsed += delta;
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.initial = self.target;
            Step::Finished
        } else {
            Step::Running {
                progress: self.elapsed / self.duration,
            }
        }
    }

    /// Jump straight to rest on the current target.
    pub fn finish(&mut self) {
        self.elapsed = self.duration;
        self.initial = self.target;
    }

    pub fn is_animating(&self) -> bool {
        self.elapsed < self.duration
    }

    pub fn initial(&self) -> T {
        self.initial
    }

    pub fn target(&self) -> T {
        self.target
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_at_rest() {
        let mut state = AnimationState::at_rest(3.0_f32, 2.0);
        assert!(!state.is_animating());
        assert_eq!(state.elapsed(), state.duration());
        assert_eq!(state.step(0.5), Step::Idle);
    }

    #[test]
    fn test_restart_begins_from_live_value() {
        let mut state = AnimationState::at_rest(0.0_f32, 2.0);
        state.restart(1.0, 5.0);
        assert!(state.is_animating());
        assert_eq!(state.initial(), 1.0);
        assert_eq!(state.target(), 5.0);
        assert_eq!(state.elapsed(), 0.0);
    }

    #[test]
    fn test_step_reports_progress() {
        let mut state = AnimationState::at_rest(0.0_f32, 2.0);
        state.restart(0.0, 1.0);
        match state.step(0.5) {
            Step::Running { progress } => assert!((progress - 0.25).abs() < 1e-6),
            other => panic!("expected running, got {other:?}"),
        }
    }

    #[test]
    fn test_full_duration_step_finishes() {
        let mut state = AnimationState::at_rest(0.0_f32, 2.0);
        state.restart(0.0, 1.0);
        assert_eq!(state.step(2.0), Step::Finished);
        assert_eq!(state.initial(), 1.0);
        assert_eq!(state.step(1.0), Step::Idle);
    }

    #[test]
    fn test_restart_mid_animation_discards_progress() {
        let mut state = AnimationState::at_rest(0.0_f32, 2.0);
        state.restart(0.0, 10.0);
        state.step(1.0);
        state.restart(4.0, -3.0);
        assert_eq!(state.elapsed(), 0.0);
        assert_eq!(state.initial(), 4.0);
        assert_eq!(state.target(), -3.0);
    }

    #[test]
    fn test_bad_deltas_do_not_advance() {
        let mut state = AnimationState::at_rest(0.0_f32, 1.0);
        state.restart(0.0, 1.0);
        state.step(-5.0);
        state.step(f32::NAN);
        state.step(f32::INFINITY);
        assert_eq!(state.elapsed(), 0.0);
    }

    #[test]
    fn test_zero_duration_finishes_on_first_positive_step() {
        let mut state = AnimationState::at_rest(0.0_f32, 0.0);
        assert!(!state.is_animating());
        state.restart(0.0, 1.0);
        assert!(state.is_animating());
        assert_eq!(state.step(1.0 / 60.0), Step::Finished);
    }
}
