//! Ray picking against scene bodies.
//!
//! The candidate set is always supplied by the caller: hover and click
//! picking use different sets of bodies, so nothing here assumes which
//! bodies are eligible.

use glam::Vec3;

use crate::api::types::EntityId;
use crate::components::body::Body;

/// A ray in world space. `dir` must be normalized.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// Result of a successful pick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub id: EntityId,
    /// Distance along the ray to the nearest intersection point.
    pub distance: f32,
}

/// Intersect a ray with a sphere. Returns the distance to the nearest
/// intersection in front of the ray origin, or None.
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.dir);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrt_d = discriminant.sqrt();
    // Nearest root in front of the origin; the ray may start inside the sphere.
    let t = -b - sqrt_d;
    if t >= 0.0 {
        return Some(t);
    }
    let t = -b + sqrt_d;
    if t >= 0.0 {
        return Some(t);
    }
    None
}

/// Pick the nearest body intersected by the ray, by ray distance.
/// Inactive bodies are skipped. Equal distances are implementation-defined
/// (first candidate wins), which is fine for non-overlapping spheres.
pub fn pick_nearest<'a>(
    ray: &Ray,
    candidates: impl Iterator<Item = &'a Body>,
) -> Option<PickHit> {
    let mut best: Option<PickHit> = None;
    for body in candidates {
        if !body.active {
            continue;
        }
        if let Some(distance) = ray_sphere(ray, body.pos, body.radius) {
            if best.map_or(true, |hit| distance < hit.distance) {
                best = Some(PickHit {
                    id: body.id,
                    distance,
                });
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ray(origin: Vec3, dir: Vec3) -> Ray {
        Ray {
            origin,
            dir: dir.normalize(),
        }
    }

    #[test]
    fn hits_sphere_straight_on() {
        let r = ray(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        let t = ray_sphere(&r, Vec3::ZERO, 1.0).unwrap();
        assert!((t - 9.0).abs() < 1e-5);
    }

    #[test]
    fn misses_offset_sphere() {
        let r = ray(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(ray_sphere(&r, Vec3::new(5.0, 0.0, 0.0), 1.0).is_none());
    }

    #[test]
    fn sphere_behind_origin_is_ignored() {
        let r = ray(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(ray_sphere(&r, Vec3::ZERO, 1.0).is_none());
    }

    #[test]
    fn origin_inside_sphere_hits_exit_point() {
        let r = ray(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let t = ray_sphere(&r, Vec3::ZERO, 2.0).unwrap();
        assert!((t - 2.0).abs() < 1e-5);
    }

    #[test]
    fn nearest_of_two_wins() {
        let near = Body::new(EntityId(1))
            .with_pos(Vec3::new(0.0, 0.0, 5.0))
            .with_radius(0.5);
        let far = Body::new(EntityId(2))
            .with_pos(Vec3::new(0.0, 0.0, -5.0))
            .with_radius(0.5);
        let bodies = [far, near];

        let r = ray(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = pick_nearest(&r, bodies.iter()).unwrap();
        assert_eq!(hit.id, EntityId(1));
    }

    #[test]
    fn inactive_bodies_are_skipped() {
        let mut body = Body::new(EntityId(1)).with_radius(1.0);
        body.active = false;
        let bodies = [body];

        let r = ray(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(pick_nearest(&r, bodies.iter()).is_none());
    }

    #[test]
    fn empty_candidate_set_picks_nothing() {
        let none: &[Body] = &[];
        let r = ray(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(pick_nearest(&r, none.iter()).is_none());
    }
}
