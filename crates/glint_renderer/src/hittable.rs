//! Hittable trait and scene-level intersection queries.

use glint_core::{HitRule, Scene, Sphere};
use glint_math::{Ray, Vec3};

/// Record of a ray-sphere intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// The sphere that was hit
    pub sphere: &'a Sphere,
    /// Index of the sphere in the scene
    pub index: usize,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable {
    /// Ray parameter of the intersection, or `None` on a miss.
    fn hit_time(&self, ray: &Ray) -> Option<f32>;

    /// Point of intersection, or `None` on a miss.
    fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        self.hit_time(ray).map(|t| ray.at(t))
    }
}

/// Find the sphere a ray hits under the given rule.
///
/// With [`HitRule::FirstInList`] the first sphere in scene order that
/// reports any intersection wins, even when a later sphere is nearer.
pub fn first_hit<'a>(scene: &'a Scene, ray: &Ray, rule: HitRule) -> Option<HitRecord<'a>> {
    let mut hits = scene
        .spheres()
        .iter()
        .enumerate()
        .filter_map(|(index, sphere)| {
            sphere.hit_time(ray).map(|t| HitRecord {
                sphere,
                index,
                t,
                point: ray.at(t),
            })
        });

    match rule {
        HitRule::FirstInList => hits.next(),
        // min_by keeps the earliest sphere on exact ties
        HitRule::Nearest => hits.min_by(|a, b| a.t.total_cmp(&b.t)),
    }
}
