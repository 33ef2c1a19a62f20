//! Utility functions for tossball

use bevy::prelude::*;

/// Intersect a ray with an infinite plane.
/// Returns the hit point, or `None` when the ray is parallel to the plane
/// or the plane lies behind the ray origin.
pub fn ray_plane_intersection(
    ray_origin: Vec3,
    ray_direction: Vec3,
    plane_origin: Vec3,
    plane_normal: Vec3,
) -> Option<Vec3> {
    let denom = ray_direction.dot(plane_normal);
    if denom.abs() < 1e-6 {
        return None;
    }

    let t = (plane_origin - ray_origin).dot(plane_normal) / denom;
    if t < 0.0 {
        return None;
    }

    Some(ray_origin + ray_direction * t)
}

/// Intersect a ray with a sphere.
/// Returns the distance along the ray to the nearest hit in front of the
/// origin, or `None` on a miss.
pub fn ray_sphere_intersection(
    ray_origin: Vec3,
    ray_direction: Vec3,
    center: Vec3,
    radius: f32,
) -> Option<f32> {
    let oc = ray_origin - center;
    let a = ray_direction.length_squared();
    let half_b = oc.dot(ray_direction);
    let c = oc.length_squared() - radius * radius;

    let discriminant = half_b * half_b - a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let near = (-half_b - sqrt_d) / a;
    if near >= 0.0 {
        return Some(near);
    }

    // Origin is inside the sphere; take the exit point
    let far = (-half_b + sqrt_d) / a;
    (far >= 0.0).then_some(far)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_plane_hit() {
        let hit = ray_plane_intersection(
            Vec3::new(0.0, 5.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::ZERO,
            Vec3::Y,
        );
        assert_eq!(hit, Some(Vec3::ZERO));
    }

    #[test]
    fn test_ray_plane_parallel_misses() {
        let hit = ray_plane_intersection(
            Vec3::new(0.0, 5.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::ZERO,
            Vec3::Y,
        );
        assert!(hit.is_none(), "Ray parallel to plane should not intersect");
    }

    #[test]
    fn test_ray_plane_behind_origin_misses() {
        let hit = ray_plane_intersection(
            Vec3::new(0.0, 5.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::ZERO,
            Vec3::Y,
        );
        assert!(hit.is_none(), "Plane behind the ray should not intersect");
    }

    #[test]
    fn test_ray_sphere_hit_distance() {
        let t = ray_sphere_intersection(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::ZERO,
            1.0,
        );
        let t = t.expect("Ray through center should hit");
        assert!((t - 9.0).abs() < 1e-4, "Expected hit at t=9, got {}", t);
    }

    #[test]
    fn test_ray_sphere_miss() {
        let t = ray_sphere_intersection(
            Vec3::new(0.0, 5.0, 10.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::ZERO,
            1.0,
        );
        assert!(t.is_none());
    }

    #[test]
    fn test_ray_sphere_behind_origin_misses() {
        let t = ray_sphere_intersection(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::ZERO,
            1.0,
        );
        assert!(t.is_none(), "Sphere behind the ray should not hit");
    }

    #[test]
    fn test_ray_sphere_inside_hits_exit() {
        let t = ray_sphere_intersection(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::ZERO,
            1.0,
        );
        let t = t.expect("Ray starting inside should hit the exit point");
        assert!((t - 1.0).abs() < 1e-4, "Expected exit at t=1, got {}", t);
    }
}
