//! Keplerian orbit solving, ephemerides and orbit trails for the orrery.
//!
//! Positions come out of the solver in heliocentric ecliptic meters
//! (`z` towards the ecliptic north pole). [`WorldScale`] converts them to
//! scene units; it is the only place that conversion happens.

mod elements;
mod ephemeris;
mod error;
mod intersect;
mod julian;
mod kepler;
pub mod planets;
mod scale;
mod trail;

pub use elements::{AU_TO_METERS, MU_SUN, OrbitalElements, SECONDS_PER_DAY, solve_position};
pub use ephemeris::{EphemerisProvider, KeplerEphemeris, Positions};
pub use error::ElementsError;
pub use intersect::{clamp_nearest_sample_to_surface, segment_sphere_intersection};
pub use julian::{DayCount, julian_day, julian_day_number};
pub use kepler::{KEPLER_ITERATIONS, solve_kepler};
pub use scale::WorldScale;
pub use trail::{TrailPlan, TrailSample, sample_trail};
