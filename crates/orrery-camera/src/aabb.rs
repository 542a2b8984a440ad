use glam::Vec3;

/// Axis-aligned bounding box in scene units.
///
/// Invariant: `min <= max` on every axis. The constructor sorts components.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create an AABB from two opposite corners.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_center_half_extents(center: Vec3, half: Vec3) -> Self {
        Self::new(center - half, center + half)
    }

    /// Tight box around a sphere.
    pub fn from_sphere(center: Vec3, radius: f32) -> Self {
        Self::from_center_half_extents(center, Vec3::splat(radius.abs()))
    }

    /// Smallest box enclosing both.
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Largest of the three edge lengths.
    pub fn largest_extent(&self) -> f32 {
        self.size().max_element()
    }
}

/// Something the camera can fly to and frame: a scene mesh, in practice.
pub trait Framed {
    /// World position the orbit target moves to.
    fn position(&self) -> Vec3;
    /// World-space bounds used to pick the viewing distance.
    fn bounding_box(&self) -> Aabb;
}
