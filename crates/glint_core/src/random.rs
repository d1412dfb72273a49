//! Seeded random scene generation.

use glint_math::{from_rgb8, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ConfigError;
use crate::scene::{Scene, Sphere};

/// Parameters for a randomly scattered sphere scene.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomSceneParams {
    /// Number of spheres to generate
    pub count: usize,
    /// Center of the jitter box
    pub center: Vec3,
    /// Half-extent of the jitter box on each axis
    pub jitter: Vec3,
    /// Smallest radius
    pub radius_min: f32,
    /// Largest radius
    pub radius_max: f32,
}

impl Default for RandomSceneParams {
    fn default() -> Self {
        Self {
            count: 8,
            center: Vec3::new(0.0, 0.0, 400.0),
            jitter: Vec3::new(300.0, 200.0, 150.0),
            radius_min: 20.0,
            radius_max: 100.0,
        }
    }
}

impl RandomSceneParams {
    /// Reject bounds the generator cannot sample from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let radius_ok = self.radius_min.is_finite()
            && self.radius_max.is_finite()
            && self.radius_min > 0.0
            && self.radius_min <= self.radius_max;
        if !radius_ok {
            return Err(ConfigError::InvalidRadiusBounds {
                min: self.radius_min,
                max: self.radius_max,
            });
        }
        if !(self.jitter.is_finite() && self.jitter.min_element() >= 0.0) {
            return Err(ConfigError::InvalidJitter(self.jitter));
        }
        Ok(())
    }

    /// Generate a scene by drawing from `rng`.
    ///
    /// Spheres are appended in generation order, which is also their
    /// tie-break order.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Scene, ConfigError> {
        self.validate()?;

        let mut scene = Scene::new();
        for _ in 0..self.count {
            let offset = Vec3::new(
                rng.gen_range(-self.jitter.x..=self.jitter.x),
                rng.gen_range(-self.jitter.y..=self.jitter.y),
                rng.gen_range(-self.jitter.z..=self.jitter.z),
            );
            let radius = rng.gen_range(self.radius_min..=self.radius_max);
            let color = from_rgb8([rng.gen(), rng.gen(), rng.gen()]);
            scene.add(Sphere::new(self.center + offset, radius, color)?);
        }

        log::debug!("Generated {} random spheres", scene.len());
        Ok(scene)
    }
}

/// Generate a reproducible random scene from a seed.
pub fn random_scene(params: &RandomSceneParams, seed: u64) -> Result<Scene, ConfigError> {
    let mut rng = StdRng::seed_from_u64(seed);
    params.generate(&mut rng)
}
