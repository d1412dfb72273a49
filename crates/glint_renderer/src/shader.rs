//! Recursive shading.
//!
//! Each call finds the first hit, lights it from the point light with a
//! shadow test, and (in the recursive modes) blends in the colors seen along
//! the reflected and refracted rays:
//!
//! ```text
//! color = direct * brightness * surface
//!       + reflection_fraction * trace(reflected)
//!       + refraction_fraction * trace(refracted)
//! ```
//!
//! Recursion stops once the bounce budget is spent, so depth is bounded by
//! `max_bounces`.

use crate::{first_hit, is_occluded_except, HitRecord};
use glint_core::{ConfigError, Light, Scene, ShaderConfig, ShadingMode};
use glint_math::{normalize_checked, reflect, refract, Color, MathError, Ray, Vec3};

/// Evaluates the color seen along a ray.
pub struct Shader<'a> {
    scene: &'a Scene,
    light: Light,
    config: &'a ShaderConfig,
}

impl<'a> Shader<'a> {
    /// Create a shader over a scene. Invalid settings are rejected here,
    /// before any ray is traced.
    pub fn new(scene: &'a Scene, light: Light, config: &'a ShaderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        if config.direct_fraction() < 0.0 {
            log::warn!(
                "Reflection + refraction fractions sum to {} (> 1.0)",
                config.reflection_fraction + config.refraction_fraction
            );
        }
        Ok(Self {
            scene,
            light,
            config,
        })
    }

    /// Shade a primary ray travelling through the ambient medium.
    pub fn shade(&self, ray: &Ray) -> Result<Color, MathError> {
        self.trace(ray, 0, true)
    }

    /// Shade a ray at the given bounce depth.
    ///
    /// `in_air` tracks whether the ray travels through the ambient medium or
    /// inside a sphere; only [`ShadingMode::RecursiveMedium`] reads it.
    pub fn trace(&self, ray: &Ray, bounce: u32, in_air: bool) -> Result<Color, MathError> {
        let config = self.config;
        if config.mode.is_recursive() && bounce >= config.max_bounces {
            return Ok(Color::ZERO);
        }

        let Some(hit) = first_hit(self.scene, ray, config.hit_rule) else {
            return Ok(config.background);
        };
        let normal = normalize_checked(hit.point - hit.sphere.center())?;

        if config.debug_normals {
            return Ok(normal_color(normal));
        }

        match config.mode {
            ShadingMode::Flat => {
                if self.in_shadow(&hit)? {
                    Ok(config.shadow_color)
                } else {
                    Ok(hit.sphere.color())
                }
            }
            ShadingMode::DistanceAttenuated => {
                let distance = self.light.position.distance(hit.point);
                let brightness = (config.falloff / distance).min(1.0);
                Ok(brightness * hit.sphere.color())
            }
            ShadingMode::RecursiveSimple | ShadingMode::RecursiveMedium => {
                self.blend(ray, &hit, normal, bounce, in_air)
            }
        }
    }

    /// Direct light plus weighted reflection and refraction.
    fn blend(
        &self,
        ray: &Ray,
        hit: &HitRecord,
        normal: Vec3,
        bounce: u32,
        in_air: bool,
    ) -> Result<Color, MathError> {
        let config = self.config;
        let brightness = if self.in_shadow(hit)? {
            config.shadowed_brightness
        } else {
            config.lit_brightness
        };

        let reflected = Ray::new(hit.point, reflect(-ray.direction(), normal)).nudged(config.epsilon);
        let reflection = self.trace(&reflected, bounce + 1, in_air)?;

        let refraction = match self.refracted(ray, hit, normal, in_air) {
            Some((refracted, next_in_air)) => self.trace(&refracted, bounce + 1, next_in_air)?,
            // Total internal reflection contributes nothing
            None => Color::ZERO,
        };

        Ok(config.direct_fraction() * brightness * hit.sphere.color()
            + config.reflection_fraction * reflection
            + config.refraction_fraction * refraction)
    }

    /// Test the hit point against the light.
    fn in_shadow(&self, hit: &HitRecord) -> Result<bool, MathError> {
        let shadow_ray = Ray::toward(hit.point, self.light.position)?.nudged(self.config.epsilon);
        let skip = (!self.config.self_shadowing).then_some(hit.index);
        Ok(is_occluded_except(self.scene, &shadow_ray, skip))
    }

    /// Build the refracted ray and the medium it travels through next.
    fn refracted(&self, ray: &Ray, hit: &HitRecord, normal: Vec3, in_air: bool) -> Option<(Ray, bool)> {
        let index = self.config.refractive_index;
        let (eta, next_in_air) = match self.config.mode {
            ShadingMode::RecursiveMedium if in_air => (1.0 / index, false),
            ShadingMode::RecursiveMedium => (index, true),
            _ => (1.0 / index, in_air),
        };

        // Snell's law wants the normal on the incoming side
        let facing = if ray.direction().dot(normal) > 0.0 {
            -normal
        } else {
            normal
        };

        let direction = refract(ray.direction(), facing, eta)?;
        Some((Ray::new(hit.point, direction).nudged(self.config.epsilon), next_in_air))
    }
}

/// Map a unit normal into 0-255 color channels.
fn normal_color(normal: Vec3) -> Color {
    (normal + Vec3::ONE) * 0.5 * 255.0
}
