//! Segment–sphere intersection for starting trails at a planet's surface.

use glam::DVec3;

use crate::trail::TrailSample;

/// Parameter `t ∈ [0, 1]` where the segment `start → end` first meets the
/// sphere, or `None` if it never does.
///
/// Solves `a·t² + b·t + c = 0` for `|start + t·(end − start) − center| = radius`
/// and returns the smaller root that lies on the segment.
pub fn segment_sphere_intersection(
    start: DVec3,
    end: DVec3,
    center: DVec3,
    radius: f64,
) -> Option<f64> {
    let d = end - start;
    let f = start - center;
    let a = d.dot(d);
    let b = 2.0 * f.dot(d);
    let c = f.dot(f) - radius * radius;

    if a <= f64::EPSILON {
        return None;
    }
    let discriminant = b * b - 4.0 * a * c;
    if !discriminant.is_finite() || discriminant < 0.0 {
        return None;
    }
    let root = discriminant.sqrt();
    let t1 = (-b - root) / (2.0 * a);
    let t2 = (-b + root) / (2.0 * a);
    [t1, t2].into_iter().find(|t| (0.0..=1.0).contains(t))
}

/// Move the newest trail sample onto the sphere surface along the first
/// trail segment, so the trail does not start inside the planet.
///
/// Returns `true` if the sample moved. Trails shorter than two samples and
/// segments that miss the sphere are left untouched.
pub fn clamp_nearest_sample_to_surface(
    samples: &mut [TrailSample],
    center: DVec3,
    radius: f64,
) -> bool {
    let [first, second, ..] = samples else {
        return false;
    };
    match segment_sphere_intersection(first.position, second.position, center, radius) {
        Some(t) => {
            first.position = first.position.lerp(second.position, t);
            true
        }
        None => false,
    }
}
