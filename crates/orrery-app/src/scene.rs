//! The orrery scene: the bodies, their trails and the camera flying between
//! them.
//!
//! [`Orrery::frame`] is the one per-frame entry point. It advances the target
//! animator, then the framing animator, then the orbit rig, and finally
//! projects every label once from the settled camera.

use chrono::{DateTime, Utc};
use glam::{DVec3, Vec2, Vec3};
use orrery_animation::{CubicBezier, Easing};
use orrery_camera::{
    Aabb, CameraRig, Framed, FramingAnimator, FramingLimits, LabelLayout, OrbitRig,
    ScreenProjection, TargetAnimator, TargetMotion, Timing, Viewport, WarpParams, project,
};
use orrery_config::{AnimationConfig, CameraConfig, Config, LabelConfig, MotionKind};
use orrery_orbits::planets::{self, PLANETS, SUN};
use orrery_orbits::{
    AU_TO_METERS, DayCount, EphemerisProvider, KeplerEphemeris, TrailSample, WorldScale,
    clamp_nearest_sample_to_surface, sample_trail,
};
use tracing::{debug, info, warn};

use crate::sbdb::{SmallBody, SmallBodyGroup, glow_intensity};

/// Physical radius small bodies are drawn with, meters.
pub const SMALL_BODY_RADIUS_M: f64 = 10_000.0;

/// Name of the body small-body glow is measured from.
pub const GLOW_REFERENCE: &str = "earth";

const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

/// Camera elevation above the ecliptic at start-up, degrees.
const INITIAL_ELEVATION_DEG: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    Star,
    Planet,
    SmallBody(SmallBodyGroup),
}

/// One labelled body in the scene.
#[derive(Clone, Debug)]
pub struct Body {
    /// Ephemeris key (lowercase for the Sun and planets).
    pub name: String,
    pub kind: BodyKind,
    /// Scene position.
    pub position: Vec3,
    /// Display radius in scene units.
    pub radius: f32,
    /// Fading orbit trail, newest sample first. Planets only.
    pub trail: Vec<TrailSample>,
    /// Additive glow intensity. Small bodies only.
    pub glow: f32,
    /// Linear RGB glow tint.
    pub tint: [f32; 3],
}

impl Framed for Body {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn bounding_box(&self) -> Aabb {
        Aabb::from_sphere(self.position, self.radius)
    }
}

/// A body's label for this frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub name: String,
    pub projection: ScreenProjection,
}

/// Animation timing from config.
pub fn timing(config: &AnimationConfig) -> Timing {
    Timing {
        duration: config.duration_s,
        easing: Easing::Bezier(CubicBezier::from_array(config.easing)),
    }
}

/// Target path from config.
pub fn target_motion(config: &AnimationConfig) -> TargetMotion {
    match config.motion {
        MotionKind::Blend => TargetMotion::Blend,
        MotionKind::Warp => TargetMotion::Warp(WarpParams {
            threshold: config.warp_threshold,
            departure: config.warp_departure,
            arrival: config.warp_arrival,
        }),
    }
}

pub fn framing_limits(config: &CameraConfig) -> FramingLimits {
    FramingLimits {
        min_fov_deg: config.min_fov_deg,
        max_fov_deg: config.max_fov_deg,
        max_distance: config.max_distance,
        framing_factor: config.framing_factor,
    }
}

/// Julian day conversion from config.
pub fn day_count(config: &Config) -> DayCount {
    if config.orbits.continuous_time {
        DayCount::Continuous
    } else {
        DayCount::DayNumber
    }
}

pub fn label_layout(config: &LabelConfig) -> LabelLayout {
    LabelLayout {
        clamp_to_viewport: config.clamp_to_viewport,
        half_label_size: Vec2::from_array(config.half_label_size),
        margin: config.margin,
        interactive_threshold: config.interactive_threshold,
    }
}

/// Trail behind planet `name`, optionally starting at its surface.
fn planet_trail(
    ephemeris: &KeplerEphemeris,
    scale: WorldScale,
    clamp_to_surface: bool,
    name: &str,
    center: DVec3,
    radius: f64,
    at: DateTime<Utc>,
) -> Vec<TrailSample> {
    let Some(def) = planets::planet_def(name) else {
        return Vec::new();
    };
    let mut trail = sample_trail(ephemeris, name, def.trail, at, scale);
    if clamp_to_surface {
        clamp_nearest_sample_to_surface(&mut trail, center, radius);
    }
    trail
}

/// The Sun, the planets and any loaded small bodies, plus the camera.
pub struct Orrery {
    ephemeris: KeplerEphemeris,
    bodies: Vec<Body>,
    scale: WorldScale,
    trails_enabled: bool,
    clamp_trails: bool,
    rig: OrbitRig,
    target_animator: TargetAnimator,
    framing: FramingAnimator,
    viewport: Viewport,
    layout: LabelLayout,
    labels_visible: bool,
    focused: Option<usize>,
    at: DateTime<Utc>,
}

impl Orrery {
    /// Build the solar system at `at`, with the camera looking at the Sun.
    pub fn new(config: &Config, at: DateTime<Utc>) -> Self {
        let scale = WorldScale::new(config.scale.world_units_per_au);

        let distance = config.camera.distance;
        let elevation = INITIAL_ELEVATION_DEG.to_radians();
        let position = Vec3::new(0.0, -distance * elevation.cos(), distance * elevation.sin());
        let width = config.window.width as f32;
        let height = config.window.height as f32;
        let mut rig = OrbitRig::new(position, Vec3::ZERO, config.camera.min_fov_deg, 16.0 / 9.0);
        rig.near = config.camera.near;
        rig.far = config.camera.far;
        rig.set_aspect_ratio(width, height);
        rig.update_projection_matrix();

        let timing = timing(&config.animation);
        let target_animator =
            TargetAnimator::new(&rig, timing).with_motion(target_motion(&config.animation));
        let framing = FramingAnimator::new(&rig, timing, framing_limits(&config.camera));

        let sun_radius = scale.au_to_world(planets::SUN_DISPLAY_RADIUS_AU) as f32;
        let mut bodies = vec![Body {
            name: SUN.to_string(),
            kind: BodyKind::Star,
            position: Vec3::ZERO,
            radius: sun_radius,
            trail: Vec::new(),
            glow: 0.0,
            tint: WHITE,
        }];
        bodies.extend(PLANETS.iter().map(|planet| Body {
            name: planet.name.to_string(),
            kind: BodyKind::Planet,
            position: Vec3::ZERO,
            radius: scale.au_to_world(planet.display_radius_au) as f32,
            trail: Vec::new(),
            glow: 0.0,
            tint: WHITE,
        }));

        let mut orrery = Self {
            ephemeris: planets::solar_system().with_day_count(day_count(config)),
            bodies,
            scale,
            trails_enabled: config.trails.enabled,
            clamp_trails: config.trails.clamp_to_surface,
            rig,
            target_animator,
            framing,
            viewport: Viewport::new(width, height),
            layout: label_layout(&config.labels),
            labels_visible: config.labels.visible,
            focused: None,
            at,
        };
        orrery.set_time(at);
        info!(
            bodies = orrery.bodies.len(),
            at = %at,
            "orrery scene built"
        );
        orrery
    }

    /// Add small bodies and place them at the current instant.
    pub fn add_small_bodies(&mut self, small_bodies: impl IntoIterator<Item = SmallBody>) {
        let radius = self
            .scale
            .au_to_world(SMALL_BODY_RADIUS_M / AU_TO_METERS) as f32;
        let mut added = 0usize;
        for body in small_bodies {
            if self.ephemeris.contains(&body.name) {
                warn!(body = %body.name, "duplicate body name, keeping the first");
                continue;
            }
            self.ephemeris.insert(&body.name, body.elements);
            self.bodies.push(Body {
                name: body.name,
                kind: BodyKind::SmallBody(body.group),
                position: Vec3::ZERO,
                radius,
                trail: Vec::new(),
                glow: 0.0,
                tint: body.group.glow_color(),
            });
            added += 1;
        }
        info!(added, "small bodies added to scene");
        self.set_time(self.at);
    }

    /// Move every body to its position at `at` and rebuild the trails.
    ///
    /// A focused body that is not mid-transition stays centred.
    pub fn set_time(&mut self, at: DateTime<Utc>) {
        self.at = at;
        let positions = self.ephemeris.positions(at);
        let reference = positions.get(GLOW_REFERENCE).copied();

        for body in &mut self.bodies {
            let Some(&meters) = positions.get(&body.name.to_lowercase()) else {
                continue;
            };
            let world = self.scale.meters_to_world(meters);
            body.position = world.as_vec3();

            match body.kind {
                BodyKind::Star => {}
                BodyKind::Planet => {
                    body.trail = if self.trails_enabled {
                        planet_trail(
                            &self.ephemeris,
                            self.scale,
                            self.clamp_trails,
                            &body.name,
                            world,
                            f64::from(body.radius),
                            at,
                        )
                    } else {
                        Vec::new()
                    };
                }
                BodyKind::SmallBody(_) => {
                    body.glow = reference
                        .map(|earth| glow_intensity((meters - earth).length() / AU_TO_METERS))
                        .unwrap_or(0.0);
                }
            }
        }

        if let Some(index) = self.focused
            && !self.target_animator.is_animating()
        {
            self.rig.set_target(self.bodies[index].position);
        }
    }

    /// Fly the camera to `name` and frame it. Returns `false` for an
    /// unknown body.
    pub fn focus(&mut self, name: &str) -> bool {
        let Some(index) = self
            .bodies
            .iter()
            .position(|b| b.name.eq_ignore_ascii_case(name))
        else {
            warn!(body = name, "cannot focus unknown body");
            return false;
        };

        let body = &self.bodies[index];
        self.target_animator.animate(body.position, &self.rig);
        let framing = self.framing.animate(body, &mut self.rig);
        debug!(
            body = %body.name,
            distance = self.framing.target_distance(),
            framing,
            "focusing"
        );
        self.focused = Some(index);
        true
    }

    /// Advance the camera by `delta` seconds and project the labels.
    ///
    /// Returns one label per body, or none while labels are hidden.
    pub fn frame(&mut self, delta: f32) -> Vec<Label> {
        self.target_animator.update(delta, &mut self.rig);
        self.framing.update(delta, &mut self.rig);
        self.rig.update();

        if !self.labels_visible {
            return Vec::new();
        }
        let view = self.rig.view();
        self.bodies
            .iter()
            .map(|body| Label {
                name: body.name.clone(),
                projection: project(body.position, &view, self.viewport, &self.layout),
            })
            .collect()
    }

    /// Update the viewport and camera aspect after a resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.viewport = Viewport::new(width as f32, height as f32);
        self.rig.set_aspect_ratio(width as f32, height as f32);
    }

    pub fn set_labels_visible(&mut self, visible: bool) {
        self.labels_visible = visible;
    }

    pub fn labels_visible(&self) -> bool {
        self.labels_visible
    }

    pub fn is_animating(&self) -> bool {
        self.target_animator.is_animating() || self.framing.is_animating()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name.eq_ignore_ascii_case(name))
    }

    pub fn focused(&self) -> Option<&Body> {
        self.focused.map(|index| &self.bodies[index])
    }

    pub fn rig(&self) -> &OrbitRig {
        &self.rig
    }

    pub fn framing(&self) -> &FramingAnimator {
        &self.framing
    }

    pub fn scale(&self) -> WorldScale {
        self.scale
    }

    pub fn time(&self) -> DateTime<Utc> {
        self.at
    }

    /// Camera-to-target distance in AU, for the UI readout.
    pub fn camera_distance_au(&self) -> f64 {
        self.scale.world_to_au(f64::from(self.rig.distance()))
    }
}
