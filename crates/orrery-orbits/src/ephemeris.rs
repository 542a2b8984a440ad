//! Ephemeris providers: where every named body is at a given instant.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use glam::DVec3;
use tracing::{debug, warn};

use crate::elements::OrbitalElements;
use crate::julian::DayCount;

/// Heliocentric positions in meters, keyed by lowercase body name.
pub type Positions = BTreeMap<String, DVec3>;

/// Source of body positions at an instant.
///
/// Passed explicitly to the trail sampler and the scene so tests can inject
/// fixed fixtures. Any `Fn(DateTime<Utc>) -> Positions` is a provider.
pub trait EphemerisProvider {
    /// Positions of every body this provider knows about.
    fn positions(&self, at: DateTime<Utc>) -> Positions;

    /// Position of a single body (case-insensitive), if known.
    fn position_of(&self, body: &str, at: DateTime<Utc>) -> Option<DVec3> {
        self.positions(at).remove(&body.to_lowercase())
    }
}

impl<F> EphemerisProvider for F
where
    F: Fn(DateTime<Utc>) -> Positions,
{
    fn positions(&self, at: DateTime<Utc>) -> Positions {
        self(at)
    }
}

#[derive(Clone, Debug)]
enum Source {
    /// Fixed at the heliocentric origin (the Sun).
    Central,
    Orbit(OrbitalElements),
    /// Elements that failed validation; reported once, solved as the origin.
    Rejected,
}

/// Ephemeris computed from Keplerian elements.
#[derive(Clone, Debug, Default)]
pub struct KeplerEphemeris {
    bodies: BTreeMap<String, Source>,
    day_count: DayCount,
}

impl KeplerEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert instants with `day_count` instead of the day number.
    pub fn with_day_count(mut self, day_count: DayCount) -> Self {
        self.day_count = day_count;
        self
    }

    pub fn day_count(&self) -> DayCount {
        self.day_count
    }

    /// Add a body pinned to the origin.
    pub fn with_central(mut self, name: &str) -> Self {
        self.bodies.insert(name.to_lowercase(), Source::Central);
        self
    }

    /// Add or replace an orbiting body. Invalid elements are logged here and
    /// the body is placed at the origin from then on.
    pub fn insert(&mut self, name: &str, elements: OrbitalElements) {
        let source = match elements.validate() {
            Ok(()) => Source::Orbit(elements),
            Err(err) => {
                warn!(body = name, %err, "invalid orbital elements");
                Source::Rejected
            }
        };
        self.bodies.insert(name.to_lowercase(), source);
    }

    /// Extend from `(name, elements)` pairs.
    pub fn extend<'a>(&mut self, bodies: impl IntoIterator<Item = (&'a str, OrbitalElements)>) {
        for (name, elements) in bodies {
            self.insert(name, elements);
        }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bodies.contains_key(&name.to_lowercase())
    }

    /// Body names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bodies.keys().map(String::as_str)
    }

    pub fn elements(&self, name: &str) -> Option<&OrbitalElements> {
        match self.bodies.get(&name.to_lowercase()) {
            Some(Source::Orbit(elements)) => Some(elements),
            _ => None,
        }
    }
}

impl EphemerisProvider for KeplerEphemeris {
    fn positions(&self, at: DateTime<Utc>) -> Positions {
        let jd = self.day_count.julian_day(at);
        debug!(bodies = self.bodies.len(), jd, "solving ephemeris");
        self.bodies
            .iter()
            .map(|(name, source)| {
                let position = match source {
                    Source::Orbit(elements) => elements.position_at_julian_day(jd),
                    Source::Central | Source::Rejected => DVec3::ZERO,
                };
                (name.clone(), position)
            })
            .collect()
    }

    fn position_of(&self, body: &str, at: DateTime<Utc>) -> Option<DVec3> {
        match self.bodies.get(&body.to_lowercase())? {
            Source::Orbit(elements) => {
                Some(elements.position_at_julian_day(self.day_count.julian_day(at)))
            }
            Source::Central | Source::Rejected => Some(DVec3::ZERO),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::solve_position;
    use chrono::TimeZone;

    fn circular(a: f64) -> OrbitalElements {
        OrbitalElements {
            eccentricity: 0.0,
            semi_major_axis_au: a,
            inclination_deg: 0.0,
            longitude_ascending_node_deg: 0.0,
            argument_of_periapsis_deg: 0.0,
            perihelion_passage_jd: 2_451_545.0,
        }
    }

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_names_are_case_insensitive() {
        let mut eph = KeplerEphemeris::new().with_central("Sun");
        eph.insert("Ceres", circular(2.77));
        assert!(eph.contains("ceres"));
        assert!(eph.contains("SUN"));
        assert_eq!(eph.position_of("SuN", instant()), Some(DVec3::ZERO));
        assert!(eph.position_of("CERES", instant()).is_some());
        assert_eq!(eph.names().collect::<Vec<_>>(), vec!["ceres", "sun"]);
    }

    #[test]
    fn test_positions_match_single_lookup() {
        let mut eph = KeplerEphemeris::new();
        eph.insert("a", circular(1.0));
        eph.insert("b", circular(3.0));
        let all = eph.positions(instant());
        assert_eq!(all.len(), 2);
        assert_eq!(all.get("b").copied(), eph.position_of("b", instant()));
    }

    #[test]
    fn test_day_count_switch() {
        let mut eph = KeplerEphemeris::new();
        eph.insert("ceres", circular(2.77));
        let morning = Utc.with_ymd_and_hms(2025, 6, 1, 6, 0, 0).unwrap();
        let evening = Utc.with_ymd_and_hms(2025, 6, 1, 18, 0, 0).unwrap();
        assert_eq!(
            eph.position_of("ceres", morning),
            eph.position_of("ceres", evening)
        );
        assert_eq!(
            eph.position_of("ceres", morning),
            Some(solve_position(&circular(2.77), morning))
        );

        let eph = eph.with_day_count(DayCount::Continuous);
        assert_eq!(eph.day_count(), DayCount::Continuous);
        assert_ne!(
            eph.position_of("ceres", morning),
            eph.position_of("ceres", evening)
        );
    }

    #[test]
    fn test_rejected_body_sits_at_origin() {
        let mut eph = KeplerEphemeris::new();
        eph.insert("broken", circular(-1.0));
        assert!(eph.elements("broken").is_none());
        assert_eq!(eph.position_of("broken", instant()), Some(DVec3::ZERO));
    }

    #[test]
    fn test_empty_ephemeris_yields_nothing() {
        let eph = KeplerEphemeris::new();
        assert!(eph.is_empty());
        assert!(eph.positions(instant()).is_empty());
        assert_eq!(eph.position_of("earth", instant()), None);
    }

    #[test]
    fn test_closure_provider() {
        let fixture = |_: DateTime<Utc>| {
            let mut map = Positions::new();
            map.insert("earth".to_string(), DVec3::X);
            map
        };
        assert_eq!(fixture.position_of("Earth", instant()), Some(DVec3::X));
        assert_eq!(fixture.position_of("mars", instant()), None);
    }
}
