//! Shadow ray visibility tests.
//!
//! Any intersection counts as occlusion, regardless of whether it lies
//! beyond the light.

use crate::Hittable;
use glint_core::Scene;
use glint_math::Ray;

/// Returns true if any sphere in the scene intersects the ray.
pub fn is_occluded(scene: &Scene, ray: &Ray) -> bool {
    is_occluded_except(scene, ray, None)
}

/// Like [`is_occluded`], but ignores the sphere at index `skip`.
pub fn is_occluded_except(scene: &Scene, ray: &Ray, skip: Option<usize>) -> bool {
    scene
        .spheres()
        .iter()
        .enumerate()
        .filter(|(index, _)| Some(*index) != skip)
        .any(|(_, sphere)| sphere.hit_time(ray).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::Sphere;
    use glint_math::{Color, Vec3};

    fn blocker(center: Vec3) -> Sphere {
        Sphere::new(center, 10.0, Color::ONE).unwrap()
    }

    #[test]
    fn test_blocker_between_point_and_light() {
        let point = Vec3::ZERO;
        let light = Vec3::new(0.0, 100.0, 0.0);
        let ray = Ray::toward(point, light).unwrap();

        let scene = Scene::from_spheres(vec![blocker(Vec3::new(0.0, 50.0, 0.0))]);
        assert!(is_occluded(&scene, &ray));

        let scene = Scene::new();
        assert!(!is_occluded(&scene, &ray));
    }

    #[test]
    fn test_blocker_beyond_light_still_occludes() {
        let ray = Ray::toward(Vec3::ZERO, Vec3::new(0.0, 100.0, 0.0)).unwrap();
        let scene = Scene::from_spheres(vec![blocker(Vec3::new(0.0, 1000.0, 0.0))]);
        assert!(is_occluded(&scene, &ray));
    }

    #[test]
    fn test_blocker_off_axis() {
        let ray = Ray::toward(Vec3::ZERO, Vec3::new(0.0, 100.0, 0.0)).unwrap();
        let scene = Scene::from_spheres(vec![blocker(Vec3::new(50.0, 50.0, 0.0))]);
        assert!(!is_occluded(&scene, &ray));
    }

    #[test]
    fn test_skip_index() {
        let ray = Ray::toward(Vec3::ZERO, Vec3::new(0.0, 100.0, 0.0)).unwrap();
        let scene = Scene::from_spheres(vec![
            blocker(Vec3::new(0.0, 50.0, 0.0)),
            blocker(Vec3::new(50.0, 50.0, 0.0)),
        ]);

        assert!(!is_occluded_except(&scene, &ray, Some(0)));
        assert!(is_occluded_except(&scene, &ray, Some(1)));
        assert!(is_occluded_except(&scene, &ray, None));
    }
}
