//! Conversion between solver meters, astronomical units and scene units.

use glam::DVec3;

use crate::elements::AU_TO_METERS;

/// Scene units per astronomical unit.
///
/// Every distance shown to the user or placed in the scene goes through this
/// one conversion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldScale {
    units_per_au: f64,
}

impl WorldScale {
    /// 20 scene units per AU: Neptune sits about 600 units from the Sun.
    pub const DEFAULT_UNITS_PER_AU: f64 = 20.0;

    /// Non-positive or non-finite factors fall back to the default.
    pub fn new(units_per_au: f64) -> Self {
        let units_per_au = if units_per_au.is_finite() && units_per_au > 0.0 {
            units_per_au
        } else {
            Self::DEFAULT_UNITS_PER_AU
        };
        Self { units_per_au }
    }

    pub fn units_per_au(&self) -> f64 {
        self.units_per_au
    }

    /// Solver output (meters) to scene units.
    pub fn meters_to_world(&self, meters: DVec3) -> DVec3 {
        meters * (self.units_per_au / AU_TO_METERS)
    }

    pub fn au_to_world(&self, au: f64) -> f64 {
        au * self.units_per_au
    }

    /// Scene distance to AU, for UI readouts.
    pub fn world_to_au(&self, world: f64) -> f64 {
        world / self.units_per_au
    }
}

impl Default for WorldScale {
    fn default() -> Self {
        Self::new(Self::DEFAULT_UNITS_PER_AU)
    }
}
