//! Ray-sphere intersection.

use crate::Hittable;
use glint_core::Sphere;
use glint_math::{Interval, Ray};

impl Hittable for Sphere {
    /// Solve `|origin + t * dir - center|^2 = r^2` for a unit `dir`.
    ///
    /// When the origin is inside the sphere (one root on each side of zero)
    /// the exit point is returned; otherwise the smaller root. Negative
    /// results mean the sphere is behind the ray.
    fn hit_time(&self, ray: &Ray) -> Option<f32> {
        let oc = self.center() - ray.origin();
        let h = ray.direction().dot(oc);
        let r = self.radius();

        let discriminant = 4.0 * (r * r - oc.length_squared()) + 4.0 * h * h;
        if discriminant < 0.0 {
            return None;
        }

        let half_sqrtd = 0.5 * discriminant.sqrt();
        let t1 = h - half_sqrtd;
        let t2 = h + half_sqrtd;

        let t = if t1 < 0.0 && t2 > 0.0 { t2 } else { t1.min(t2) };
        Interval::FORWARD.contains(t).then_some(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::{Color, Vec3};

    fn sphere(center: Vec3, radius: f32) -> Sphere {
        Sphere::new(center, radius, Color::ONE).unwrap()
    }

    #[test]
    fn test_sphere_hit_front_surface() {
        let sphere = sphere(Vec3::new(0.0, 0.0, 300.0), 200.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        // t = |oc| - r
        assert_eq!(sphere.hit_time(&ray), Some(100.0));
        assert_eq!(sphere.intersect(&ray), Some(Vec3::new(0.0, 0.0, 100.0)));
    }

    #[test]
    fn test_sphere_hit_off_axis() {
        let center = Vec3::new(30.0, -40.0, 120.0);
        let sphere = sphere(center, 10.0);
        let ray = Ray::from_direction(Vec3::ZERO, center).unwrap();

        let t = sphere.hit_time(&ray).unwrap();
        assert!((t - (center.length() - 10.0)).abs() < 1e-3);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = sphere(Vec3::new(0.0, 0.0, 100.0), 10.0);

        // Perpendicular offset of 11 > radius
        let ray = Ray::new(Vec3::new(11.0, 0.0, 0.0), Vec3::Z);
        assert_eq!(sphere.hit_time(&ray), None);

        // Pointing away
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert_eq!(sphere.intersect(&ray), None);
    }

    #[test]
    fn test_sphere_behind_ray() {
        let sphere = sphere(Vec3::new(0.0, 0.0, -100.0), 10.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert_eq!(sphere.hit_time(&ray), None);
    }

    #[test]
    fn test_sphere_inside_returns_exit_point() {
        let sphere = sphere(Vec3::new(0.0, 0.0, 10.0), 50.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        // Roots are -40 and 60; the far exit wins
        assert_eq!(sphere.hit_time(&ray), Some(60.0));
        assert_eq!(sphere.intersect(&ray), Some(Vec3::new(0.0, 0.0, 60.0)));
    }

    #[test]
    fn test_sphere_from_center() {
        let sphere = sphere(Vec3::new(5.0, 5.0, 5.0), 2.0);
        let ray = Ray::new(Vec3::new(5.0, 5.0, 5.0), Vec3::X);
        assert_eq!(sphere.hit_time(&ray), Some(2.0));
    }

    #[test]
    fn test_sphere_tangent() {
        let sphere = sphere(Vec3::new(0.0, 0.0, 100.0), 10.0);
        let ray = Ray::new(Vec3::new(10.0, 0.0, 0.0), Vec3::Z);
        assert_eq!(sphere.hit_time(&ray), Some(100.0));
    }
}
