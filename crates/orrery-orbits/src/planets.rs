//! The Sun and the eight planets: J2000 elements, display sizes and trail plans.

use crate::elements::OrbitalElements;
use crate::ephemeris::KeplerEphemeris;
use crate::trail::TrailPlan;

/// Name of the central body.
pub const SUN: &str = "sun";

/// Sun display radius in AU. Bodies are drawn far larger than life so they
/// stay visible at system scale.
pub const SUN_DISPLAY_RADIUS_AU: f64 = 0.05;

/// A planet as the orrery shows it.
#[derive(Clone, Copy, Debug)]
pub struct PlanetDef {
    /// Lowercase name, used as the ephemeris key.
    pub name: &'static str,
    pub elements: OrbitalElements,
    /// Rendered sphere radius in AU.
    pub display_radius_au: f64,
    /// How the fading orbit trail behind the planet is sampled.
    pub trail: TrailPlan,
}

const fn planet(
    name: &'static str,
    elements: [f64; 6],
    display_radius_au: f64,
    trail: TrailPlan,
) -> PlanetDef {
    let [e, a, i, node, peri, tp] = elements;
    PlanetDef {
        name,
        elements: OrbitalElements {
            eccentricity: e,
            semi_major_axis_au: a,
            inclination_deg: i,
            longitude_ascending_node_deg: node,
            argument_of_periapsis_deg: peri,
            perihelion_passage_jd: tp,
        },
        display_radius_au,
        trail,
    }
}

// Elements: [e, a (AU), i, Ω, ω (deg), perihelion passage (JD)], from the
// J2000 mean elements; the perihelion passage is consistent with the period
// the solver derives from MU_SUN.
pub const PLANETS: [PlanetDef; 8] = [
    planet(
        "mercury",
        [0.205_635_93, 0.387_099_27, 7.004_979, 48.330_766, 29.127_03, 2_451_502.28],
        0.000_175_2,
        TrailPlan::new(1.0, 70),
    ),
    planet(
        "venus",
        [0.006_776_72, 0.723_335_66, 3.394_676, 76.679_843, 54.922_62, 2_451_513.55],
        0.000_434_6,
        TrailPlan::new(1.0, 100),
    ),
    planet(
        "earth",
        [0.016_711_23, 1.000_002_61, 0.0, 0.0, 102.937_68, 2_451_182.23],
        0.000_457_5,
        TrailPlan::new(1.0, 100),
    ),
    planet(
        "mars",
        [0.093_394_10, 1.523_710_34, 1.849_691, 49.559_539, 286.496_83, 2_451_507.99],
        0.000_243_4,
        TrailPlan::new(2.0, 100),
    ),
    planet(
        "jupiter",
        [0.048_386_24, 5.202_887_00, 1.304_397, 100.473_909, 274.254_57, 2_451_308.16],
        0.005_019_9,
        TrailPlan::new(5.0, 100),
    ),
    planet(
        "saturn",
        [0.053_861_79, 9.536_675_94, 2.485_992, 113.662_424, 338.936_45, 2_442_061.54],
        0.004_181_3,
        TrailPlan::new(10.0, 100),
    ),
    planet(
        "uranus",
        [0.047_257_44, 19.189_164_64, 0.772_638, 74.016_925, 96.937_35, 2_439_409.29],
        0.001_821_1,
        TrailPlan::new(20.0, 100),
    ),
    planet(
        "neptune",
        [0.008_590_48, 30.069_922_76, 1.770_043, 131.784_226, 273.180_54, 2_408_058.37],
        0.001_768_0,
        TrailPlan::new(30.0, 100),
    ),
];

/// Look up a planet by name (case-insensitive).
pub fn planet_def(name: &str) -> Option<&'static PlanetDef> {
    PLANETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Ephemeris of the Sun and all eight planets.
pub fn solar_system() -> KeplerEphemeris {
    let mut ephemeris = KeplerEphemeris::new().with_central(SUN);
    ephemeris.extend(PLANETS.iter().map(|p| (p.name, p.elements)));
    ephemeris
}
