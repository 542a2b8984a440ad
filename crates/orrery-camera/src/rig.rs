//! Orbit-controls camera and the sink interface the animators write through.

use glam::{Mat4, Vec3};

/// The camera/controls surface the animators drive.
///
/// Implementors own the real camera; animators only read the current look-at
/// target and position, and write target, field of view and zoom bounds.
pub trait CameraRig {
    /// Current look-at target.
    fn target(&self) -> Vec3;
    fn set_target(&mut self, target: Vec3);
    /// Current camera position.
    fn position(&self) -> Vec3;
    /// Write the vertical field of view in degrees. Implementors must
    /// recompute their projection before the next render.
    fn set_fov(&mut self, fov_deg: f32);
    /// Write the allowed zoom distance range from the target.
    fn set_distance_bounds(&mut self, min: f32, max: f32);

    /// Distance from the camera to its look-at target.
    fn distance(&self) -> f32 {
        self.position().distance(self.target())
    }
}

/// Per-frame snapshot of the camera transform used for label projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraView {
    pub view_projection: Mat4,
    pub position: Vec3,
    /// Unit view direction.
    pub forward: Vec3,
}

/// A perspective camera orbiting a look-at target, with zoom bounds.
#[derive(Debug, Clone)]
pub struct OrbitRig {
    pub position: Vec3,
    pub target: Vec3,
    /// Preferred up direction; the scene's ecliptic north.
    pub up: Vec3,
    /// Near clip plane distance (always positive).
    pub near: f32,
    /// Far clip plane distance (always positive, > near).
    pub far: f32,
    fov_deg: f32,
    aspect_ratio: f32,
    min_distance: f32,
    max_distance: f32,
    projection: Mat4,
}

impl OrbitRig {
    pub fn new(position: Vec3, target: Vec3, fov_deg: f32, aspect_ratio: f32) -> Self {
        let mut rig = Self {
            position,
            target,
            up: Vec3::Z,
            near: 0.01,
            far: 50_000.0,
            fov_deg,
            aspect_ratio,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            projection: Mat4::IDENTITY,
        };
        rig.update_projection_matrix();
        rig
    }

    pub fn fov_deg(&self) -> f32 {
        self.fov_deg
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn distance_bounds(&self) -> (f32, f32) {
        (self.min_distance, self.max_distance)
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn set_aspect_ratio(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect_ratio = width / height;
            self.update_projection_matrix();
        }
    }

    /// Recompute the cached projection from fov, aspect and clip planes.
    pub fn update_projection_matrix(&mut self) {
        // Reverse-Z: near plane maps to z=1, far plane maps to z=0.
        self.projection = Mat4::perspective_rh(
            self.fov_deg.to_radians(),
            self.aspect_ratio,
            self.far,  // swapped: far as "near" parameter
            self.near, // swapped: near as "far" parameter
        );
    }

    /// The unit view direction. Falls back to -Y when the camera sits on
    /// its target.
    pub fn forward(&self) -> Vec3 {
        let forward = (self.target - self.position).normalize_or_zero();
        if forward == Vec3::ZERO {
            Vec3::NEG_Y
        } else {
            forward
        }
    }

    /// Up vector actually used for the view matrix: `up`, unless the camera
    /// looks straight along it.
    fn view_up(&self) -> Vec3 {
        if self.forward().cross(self.up).length_squared() < 1e-8 {
            Vec3::Y
        } else {
            self.up
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), self.view_up())
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    /// Compute the combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }

    pub fn view(&self) -> CameraView {
        CameraView {
            view_projection: self.view_projection_matrix(),
            position: self.position,
            forward: self.forward(),
        }
    }

    /// Orbit-controls update: keep the camera on its current ray from the
    /// target, at a distance clamped to the zoom bounds.
    pub fn update(&mut self) {
        let offset = self.position - self.target;
        let distance = offset.length();
        let (min, max) = (self.min_distance, self.max_distance.max(self.min_distance));
        let clamped = distance.clamp(min, max);
        if clamped == distance {
            return;
        }
        let direction = if distance > f32::EPSILON {
            offset / distance
        } else {
            -self.forward()
        };
        self.position = self.target + direction * clamped;
    }
}

impl CameraRig for OrbitRig {
    fn target(&self) -> Vec3 {
        self.target
    }

    fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_fov(&mut self, fov_deg: f32) {
        self.fov_deg = fov_deg;
        self.update_projection_matrix();
    }

    fn set_distance_bounds(&mut self, min: f32, max: f32) {
        self.min_distance = min.max(0.0);
        self.max_distance = max.max(self.min_distance);
    }
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, -30.0, 10.0), Vec3::ZERO, 50.0, 16.0 / 9.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn test_forward_points_at_target() {
        let rig = OrbitRig::new(Vec3::new(0.0, -10.0, 0.0), Vec3::ZERO, 60.0, 1.0);
        assert!((rig.forward() - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_target_projects_to_screen_center() {
        let rig = OrbitRig::default();
        let clip = rig.view_projection_matrix() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(clip.w > 0.0);
        assert!((clip.x / clip.w).abs() < 1e-5);
        assert!((clip.y / clip.w).abs() < 1e-5);
    }

    #[test]
    fn test_set_fov_recomputes_projection() {
        let mut rig = OrbitRig::default();
        let before = rig.projection_matrix();
        rig.set_fov(120.0);
        assert_eq!(rig.fov_deg(), 120.0);
        assert_ne!(rig.projection_matrix(), before);
        // Wider field of view shrinks the x scale factor.
        assert!(rig.projection_matrix().x_axis.x < before.x_axis.x);
    }

    #[test]
    fn test_update_clamps_distance_along_view_ray() {
        let mut rig = OrbitRig::new(Vec3::new(0.0, -10.0, 0.0), Vec3::ZERO, 60.0, 1.0);
        rig.set_distance_bounds(2.0, 4.0);
        rig.update();
        assert!((rig.position - Vec3::new(0.0, -4.0, 0.0)).length() < 1e-5);

        rig.set_distance_bounds(6.0, 6.0);
        rig.update();
        assert!((rig.distance() - 6.0).abs() < 1e-5);
    }

    #[test]
    fn test_update_within_bounds_is_noop() {
        let mut rig = OrbitRig::new(Vec3::new(3.0, -4.0, 0.0), Vec3::ZERO, 60.0, 1.0);
        rig.set_distance_bounds(1.0, 10.0);
        rig.update();
        assert_eq!(rig.position, Vec3::new(3.0, -4.0, 0.0));
    }

    #[test]
    fn test_looking_along_up_axis_stays_finite() {
        let rig = OrbitRig::new(Vec3::new(0.0, 0.0, 50.0), Vec3::ZERO, 60.0, 1.0);
        assert!(rig.view_matrix().is_finite());
        let clip = rig.view_projection_matrix() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((clip.x / clip.w).abs() < 1e-5);
    }

    #[test]
    fn test_aspect_ratio_ignores_zero_size() {
        let mut rig = OrbitRig::default();
        rig.set_aspect_ratio(1920.0, 1080.0);
        assert!((rig.aspect_ratio() - 16.0 / 9.0).abs() < 1e-6);
        rig.set_aspect_ratio(0.0, 1080.0);
        assert!((rig.aspect_ratio() - 16.0 / 9.0).abs() < 1e-6);
    }
}
