//! Fading orbit trails sampled backwards in time.

use chrono::{DateTime, TimeDelta, Utc};
use glam::DVec3;
use tracing::debug;

use crate::elements::SECONDS_PER_DAY;
use crate::ephemeris::EphemerisProvider;
use crate::scale::WorldScale;

/// How a trail is sampled: `sample_count` points spaced `step_days` apart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPlan {
    pub step_days: f64,
    pub sample_count: usize,
}

impl TrailPlan {
    pub const fn new(step_days: f64, sample_count: usize) -> Self {
        Self {
            step_days,
            sample_count,
        }
    }
}

/// One trail vertex in scene units.
///
/// Opacity runs from 2.0 at the newest sample down to 0.0 at the oldest;
/// anything above 1.0 renders fully opaque, which keeps the trail solid for
/// its first half.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailSample {
    pub position: DVec3,
    pub opacity: f32,
}

/// Opacity of sample `index` out of `count`: `2 − 2i/(n−1)`.
fn fade(index: usize, count: usize) -> f32 {
    if count <= 1 {
        return 2.0;
    }
    (2.0 - 2.0 * index as f64 / (count - 1) as f64) as f32
}

/// Sample `body` at `start − i·step_days` for `i` in `0..sample_count`,
/// newest first.
///
/// Instants where the provider does not know the body are skipped, so an
/// unknown body yields an empty trail.
pub fn sample_trail(
    provider: &impl EphemerisProvider,
    body: &str,
    plan: TrailPlan,
    start: DateTime<Utc>,
    scale: WorldScale,
) -> Vec<TrailSample> {
    let mut samples = Vec::with_capacity(plan.sample_count);
    for i in 0..plan.sample_count {
        let offset_ms = i as f64 * plan.step_days * SECONDS_PER_DAY * 1000.0;
        let Some(at) = TimeDelta::try_milliseconds(offset_ms as i64)
            .and_then(|offset| start.checked_sub_signed(offset))
        else {
            break;
        };
        let Some(position) = provider.position_of(body, at) else {
            continue;
        };
        samples.push(TrailSample {
            position: scale.meters_to_world(position),
            opacity: fade(i, plan.sample_count),
        });
    }
    debug!(body, samples = samples.len(), "sampled orbit trail");
    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{AU_TO_METERS, OrbitalElements};
    use crate::ephemeris::{KeplerEphemeris, Positions};
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 0, 0, 0).unwrap()
    }

    fn ephemeris() -> KeplerEphemeris {
        let mut eph = KeplerEphemeris::new();
        eph.insert(
            "Earth",
            OrbitalElements {
                eccentricity: 0.0167,
                semi_major_axis_au: 1.0,
                inclination_deg: 0.0,
                longitude_ascending_node_deg: 0.0,
                argument_of_periapsis_deg: 102.9,
                perihelion_passage_jd: 2_451_182.2,
            },
        );
        eph
    }

    #[test]
    fn test_opacity_fades_from_two_to_zero() {
        let trail = sample_trail(
            &ephemeris(),
            "earth",
            TrailPlan::new(1.0, 100),
            start(),
            WorldScale::default(),
        );
        assert_eq!(trail.len(), 100);
        assert_eq!(trail[0].opacity, 2.0);
        assert!(trail[99].opacity.abs() < 1e-6);
        for pair in trail.windows(2) {
            assert!(pair[1].opacity <= pair[0].opacity);
        }
    }

    #[test]
    fn test_first_sample_is_current_position() {
        let eph = ephemeris();
        let scale = WorldScale::default();
        let trail = sample_trail(&eph, "earth", TrailPlan::new(2.0, 10), start(), scale);
        let now = scale.meters_to_world(eph.position_of("earth", start()).unwrap());
        assert_eq!(trail[0].position, now);
        // Roughly one AU from the Sun in scene units.
        let r = trail[0].position.length();
        assert!((19.0..21.0).contains(&r), "r = {r}");
    }

    #[test]
    fn test_samples_step_back_in_time() {
        let calls = std::cell::RefCell::new(Vec::new());
        let recorder = |at: DateTime<Utc>| {
            calls.borrow_mut().push(at);
            let mut map = Positions::new();
            map.insert("marker".to_string(), DVec3::splat(AU_TO_METERS));
            map
        };
        let trail = sample_trail(
            &recorder,
            "marker",
            TrailPlan::new(1.5, 4),
            start(),
            WorldScale::default(),
        );
        assert_eq!(trail.len(), 4);
        let calls = calls.borrow();
        assert_eq!(calls[0], start());
        assert_eq!(calls[3], start() - TimeDelta::hours(108));
    }

    #[test]
    fn test_unknown_body_gives_empty_trail() {
        let trail = sample_trail(
            &ephemeris(),
            "vulcan",
            TrailPlan::new(1.0, 50),
            start(),
            WorldScale::default(),
        );
        assert!(trail.is_empty());
    }

    #[test]
    fn test_single_sample_is_fully_opaque() {
        let trail = sample_trail(
            &ephemeris(),
            "earth",
            TrailPlan::new(1.0, 1),
            start(),
            WorldScale::default(),
        );
        assert_eq!(trail.len(), 1);
        assert_eq!(trail[0].opacity, 2.0);
    }
}
