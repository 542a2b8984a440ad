//! Frame clock turning wall-clock timestamps into clamped frame deltas.
//!
//! The camera animators advance by whatever delta they are handed, so a long
//! stall (window dragged, debugger break) would otherwise finish a transition
//! in a single frame. Deltas are clamped to [`MAX_FRAME_TIME`].

use tracing::warn;

/// Largest delta handed to the scene, seconds (4 FPS minimum).
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Measures the time between successive frames.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    previous_s: Option<f64>,
    total_s: f64,
    frame_count: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame at `now_s` seconds and return the delta since the last
    /// one. The first tick, backwards time and non-finite timestamps yield 0.
    pub fn tick(&mut self, now_s: f64) -> f32 {
        let mut delta = match self.previous_s {
            Some(previous) if now_s.is_finite() => (now_s - previous).max(0.0),
            _ => 0.0,
        };
        if now_s.is_finite() {
            self.previous_s = Some(now_s);
        }

        if delta > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                delta * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            delta = MAX_FRAME_TIME;
        }

        self.total_s += delta;
        self.frame_count += 1;
        delta as f32
    }

    /// Number of ticks so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Sum of all clamped deltas, seconds.
    pub fn total_time(&self) -> f64 {
        self.total_s
    }
}
