//! Pinhole camera for primary ray generation.

use glint_core::{ConfigError, RenderConfig};
use glint_math::{MathError, Ray, Vec3};

/// Pinhole camera looking down +Z.
///
/// Pixel `(x, y)` maps to the direction `(x - W/2, y - H/2 + k, focal)`,
/// where `k` is the vertical offset of a ray within the pixel's fan.
/// `W/2` and `H/2` use integer division.
#[derive(Debug, Clone)]
pub struct PinholeCamera {
    pub image_width: u32,
    pub image_height: u32,
    origin: Vec3,
    focal_length: f32,
    fan_half_width: u32,
}

impl PinholeCamera {
    /// Create a camera at the origin with no ray fan.
    pub fn new(image_width: u32, image_height: u32, focal_length: f32) -> Result<Self, ConfigError> {
        if image_width == 0 || image_height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: image_width,
                height: image_height,
            });
        }
        if !(focal_length.is_finite() && focal_length > 0.0) {
            return Err(ConfigError::InvalidFocalLength(focal_length));
        }
        Ok(Self {
            image_width,
            image_height,
            origin: Vec3::ZERO,
            focal_length,
            fan_half_width: 0,
        })
    }

    /// Create a camera from render settings.
    pub fn from_config(config: &RenderConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.width, config.height, config.focal_length)?
            .with_origin(config.camera_origin)
            .with_fan(config.fan_half_width))
    }

    /// Set camera position.
    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    /// Set the ray fan half-width `n`.
    pub fn with_fan(mut self, half_width: u32) -> Self {
        self.fan_half_width = half_width;
        self
    }

    /// Get the ray fan half-width.
    pub fn fan_half_width(&self) -> u32 {
        self.fan_half_width
    }

    /// Unnormalized direction through pixel (x, y) with vertical offset k.
    pub fn direction(&self, x: u32, y: u32, k: i32) -> Vec3 {
        Vec3::new(
            x as f32 - (self.image_width / 2) as f32,
            y as f32 - (self.image_height / 2) as f32 + k as f32,
            self.focal_length,
        )
    }

    /// Generate the ray for pixel (x, y) with vertical offset k.
    pub fn get_ray(&self, x: u32, y: u32, k: i32) -> Result<Ray, MathError> {
        Ray::from_direction(self.origin, self.direction(x, y, k))
    }

    /// Vertical offsets of the pixel's ray fan, `-n..=n`.
    pub fn fan_offsets(&self) -> std::ops::RangeInclusive<i32> {
        let n = self.fan_half_width as i32;
        -n..=n
    }
}
