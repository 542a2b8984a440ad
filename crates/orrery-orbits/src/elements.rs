//! Osculating orbital elements and the heliocentric position solver.

use std::f64::consts::TAU;

use chrono::{DateTime, Utc};
use glam::DVec3;
use tracing::warn;

use crate::error::ElementsError;
use crate::julian::DayCount;
use crate::kepler::solve_kepler;

/// One astronomical unit in meters.
pub const AU_TO_METERS: f64 = 1.496e11;

/// Standard gravitational parameter of the Sun, m³/s².
pub const MU_SUN: f64 = 1.327e20;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Heliocentric osculating elements of one body. Angles are in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalElements {
    /// Eccentricity in `[0, 1)`.
    pub eccentricity: f64,
    /// Semi-major axis in AU, strictly positive.
    pub semi_major_axis_au: f64,
    pub inclination_deg: f64,
    pub longitude_ascending_node_deg: f64,
    pub argument_of_periapsis_deg: f64,
    /// Time of perihelion passage as a Julian day.
    pub perihelion_passage_jd: f64,
}

impl OrbitalElements {
    /// Build and validate a set of elements.
    pub fn new(
        eccentricity: f64,
        semi_major_axis_au: f64,
        inclination_deg: f64,
        longitude_ascending_node_deg: f64,
        argument_of_periapsis_deg: f64,
        perihelion_passage_jd: f64,
    ) -> Result<Self, ElementsError> {
        let elements = Self {
            eccentricity,
            semi_major_axis_au,
            inclination_deg,
            longitude_ascending_node_deg,
            argument_of_periapsis_deg,
            perihelion_passage_jd,
        };
        elements.validate()?;
        Ok(elements)
    }

    /// Check every field is finite and the orbit is a closed ellipse.
    pub fn validate(&self) -> Result<(), ElementsError> {
        let fields = [
            ("eccentricity", self.eccentricity),
            ("semi_major_axis_au", self.semi_major_axis_au),
            ("inclination_deg", self.inclination_deg),
            (
                "longitude_ascending_node_deg",
                self.longitude_ascending_node_deg,
            ),
            ("argument_of_periapsis_deg", self.argument_of_periapsis_deg),
            ("perihelion_passage_jd", self.perihelion_passage_jd),
        ];
        if let Some((field, _)) = fields.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(ElementsError::NonFinite { field });
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(ElementsError::Eccentricity(self.eccentricity));
        }
        if self.semi_major_axis_au <= 0.0 {
            return Err(ElementsError::SemiMajorAxis(self.semi_major_axis_au));
        }
        Ok(())
    }

    /// Semi-major axis in meters.
    pub fn semi_major_axis_m(&self) -> f64 {
        self.semi_major_axis_au * AU_TO_METERS
    }

    /// Orbital period `T = 2π·√(a³/μ)` in seconds.
    pub fn period_seconds(&self) -> f64 {
        TAU * (self.semi_major_axis_m().powi(3) / MU_SUN).sqrt()
    }

    /// Mean anomaly (radians, wrapped to `[0, 2π)`) at a Julian day.
    pub fn mean_anomaly(&self, jd: f64) -> f64 {
        let elapsed_seconds = (jd - self.perihelion_passage_jd) * SECONDS_PER_DAY;
        (TAU / self.period_seconds() * elapsed_seconds).rem_euclid(TAU)
    }

    /// Heliocentric ecliptic position in meters at a Julian day.
    ///
    /// Does not validate; use [`try_position_at`](Self::try_position_at) or
    /// [`solve_position`] on untrusted elements.
    pub fn position_at_julian_day(&self, jd: f64) -> DVec3 {
        let e = self.eccentricity;
        let a = self.semi_major_axis_m();
        let e_anom = solve_kepler(self.mean_anomaly(jd), e);

        // True anomaly from eccentric anomaly.
        let true_anomaly = 2.0
            * ((1.0 + e).sqrt() * (e_anom / 2.0).sin())
                .atan2((1.0 - e).sqrt() * (e_anom / 2.0).cos());

        let r = a * (1.0 - e * e_anom.cos());

        // In-plane position measured from the ascending node.
        let u = true_anomaly + self.argument_of_periapsis_deg.to_radians();
        let x_orb = r * u.cos();
        let y_orb = r * u.sin();

        // Tilt about the line of nodes, then turn about the ecliptic pole.
        let (sin_i, cos_i) = self.inclination_deg.to_radians().sin_cos();
        let (sin_o, cos_o) = self.longitude_ascending_node_deg.to_radians().sin_cos();
        let y_tilted = y_orb * cos_i;

        DVec3::new(
            x_orb * cos_o - y_tilted * sin_o,
            x_orb * sin_o + y_tilted * cos_o,
            y_orb * sin_i,
        )
    }

    /// Validated position at the Julian Day Number of `at`.
    pub fn try_position_at(&self, at: DateTime<Utc>) -> Result<DVec3, ElementsError> {
        self.try_position_with(DayCount::DayNumber, at)
    }

    /// Validated position at `at`, converted with `day_count`.
    pub fn try_position_with(
        &self,
        day_count: DayCount,
        at: DateTime<Utc>,
    ) -> Result<DVec3, ElementsError> {
        self.validate()?;
        Ok(self.position_at_julian_day(day_count.julian_day(at)))
    }
}

/// Position of `elements` at `at`, in meters.
///
/// Invalid elements yield [`DVec3::ZERO`] and a warning instead of NaN
/// coordinates, so a bad record never poisons the scene.
pub fn solve_position(elements: &OrbitalElements, at: DateTime<Utc>) -> DVec3 {
    match elements.try_position_at(at) {
        Ok(position) => position,
        Err(err) => {
            warn!(%err, "rejecting orbital elements, using origin");
            DVec3::ZERO
        }
    }
}
