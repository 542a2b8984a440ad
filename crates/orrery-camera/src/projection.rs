//! World-to-screen projection for body labels, with centre-distance falloff.

use glam::{Vec2, Vec3, Vec4Swizzles};

use crate::rig::CameraView;

/// Viewport size in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// How projected labels are laid out on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelLayout {
    /// Keep labels fully on screen instead of letting them fly off the edge.
    pub clamp_to_viewport: bool,
    /// Half the label's width and height in pixels.
    pub half_label_size: Vec2,
    /// Gap kept between a clamped label and the viewport edge, pixels.
    pub margin: f32,
    /// Labels whose falloff exceeds this accept pointer input.
    pub interactive_threshold: f32,
}

impl Default for LabelLayout {
    fn default() -> Self {
        Self {
            clamp_to_viewport: true,
            half_label_size: Vec2::new(40.0, 12.0),
            margin: 8.0,
            interactive_threshold: 0.2,
        }
    }
}

/// Where and how to draw one label this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenProjection {
    /// Pixel x, left to right.
    pub x: f32,
    /// Pixel y, top to bottom.
    pub y: f32,
    /// `|ndc.x| + |ndc.y|`: 0 at screen centre, growing outwards. Values
    /// above 1 draw fully opaque.
    pub opacity: f32,
    pub interactive: bool,
    /// Whether the body is in front of the camera.
    pub front_facing: bool,
}

/// Project `world` into pixel space for a label.
///
/// Points behind the camera have their coordinates sign-flipped so the
/// label is pushed towards the side the body actually lies on, instead of
/// the mirrored position a plain perspective divide gives.
pub fn project(
    world: Vec3,
    view: &CameraView,
    viewport: Viewport,
    layout: &LabelLayout,
) -> ScreenProjection {
    let clip = view.view_projection * world.extend(1.0);
    let ndc = if clip.is_finite() && clip.w.abs() > f32::EPSILON {
        clip.xy() / clip.w
    } else {
        Vec2::ZERO
    };

    let to_point = (world - view.position).normalize_or_zero();
    let front_facing = view.forward.dot(to_point) >= 0.0;
    let ndc = if front_facing { ndc } else { -ndc };

    let mut x = (ndc.x * 0.5 + 0.5) * viewport.width;
    let mut y = (-ndc.y * 0.5 + 0.5) * viewport.height;
    if layout.clamp_to_viewport {
        x = clamp_axis(x, viewport.width, layout.half_label_size.x + layout.margin);
        y = clamp_axis(y, viewport.height, layout.half_label_size.y + layout.margin);
    }

    let opacity = ndc.x.abs() + ndc.y.abs();
    ScreenProjection {
        x,
        y,
        opacity,
        interactive: opacity > layout.interactive_threshold,
        front_facing,
    }
}

/// Clamp to `[inset, extent − inset]`, or centre when the viewport is too
/// small to fit the label.
fn clamp_axis(value: f32, extent: f32, inset: f32) -> f32 {
    let (lo, hi) = (inset, extent - inset);
    if lo > hi || !value.is_finite() {
        extent * 0.5
    } else {
        value.clamp(lo, hi)
    }
}
