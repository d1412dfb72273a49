//! Render configuration.
//!
//! All knobs that used to be global toggles live here and are handed to the
//! renderer by value. Defaults reproduce the reference renders.

use glint_math::{Color, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Shading profile used by the shader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadingMode {
    /// No recursion; lit points take the sphere color, shadowed points the
    /// shadow marker color.
    Flat,
    /// Recursive reflection/refraction with a fixed refractive index.
    RecursiveSimple,
    /// Recursive reflection/refraction that tracks whether the ray is inside
    /// a sphere and switches the relative index accordingly.
    #[default]
    RecursiveMedium,
    /// Brightness falls off with distance to the light. No shadows, no recursion.
    DistanceAttenuated,
}

impl ShadingMode {
    /// Whether this mode spawns reflection and refraction rays.
    pub fn is_recursive(self) -> bool {
        matches!(self, Self::RecursiveSimple | Self::RecursiveMedium)
    }
}

/// How the scene picks the sphere a ray hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitRule {
    /// The first sphere in scene order that reports an intersection wins.
    #[default]
    FirstInList,
    /// The intersection with the smallest ray parameter wins.
    Nearest,
}

/// Divisor used when averaging a ray fan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FanNormalization {
    /// Divide the summed fan by its half-width `n` (reference output).
    #[default]
    HalfWidth,
    /// Divide by the number of rays cast, `2n + 1`.
    SampleCount,
}

impl FanNormalization {
    /// Divisor for a fan of half-width `n` (`n > 0`).
    pub fn divisor(self, half_width: u32) -> f32 {
        match self {
            Self::HalfWidth => half_width as f32,
            Self::SampleCount => (2 * half_width + 1) as f32,
        }
    }
}

/// Shader configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderConfig {
    /// Shading profile
    pub mode: ShadingMode,
    /// Bounce budget for recursive modes
    pub max_bounces: u32,
    /// Offset applied to secondary ray origins
    pub epsilon: f32,
    /// Direct-light brightness when the light is visible
    pub lit_brightness: f32,
    /// Direct-light brightness when the point is in shadow
    pub shadowed_brightness: f32,
    /// Weight of the reflected contribution
    pub reflection_fraction: f32,
    /// Weight of the refracted contribution
    pub refraction_fraction: f32,
    /// Refractive index of sphere interiors (the ambient medium is 1.0)
    pub refractive_index: f32,
    /// Color written for shadowed points in flat mode
    pub shadow_color: Color,
    /// Distance at which attenuated brightness drops below 1.0
    pub falloff: f32,
    /// Sphere selection rule
    pub hit_rule: HitRule,
    /// Let a sphere block its own shadow rays
    pub self_shadowing: bool,
    /// Color normals instead of shading (debug aid)
    pub debug_normals: bool,
    /// Color returned when a ray escapes the scene
    pub background: Color,
}

impl Default for ShaderConfig {
    fn default() -> Self {
        Self {
            mode: ShadingMode::default(),
            max_bounces: 3,
            epsilon: 0.05,
            lit_brightness: 1.0,
            shadowed_brightness: 0.25,
            reflection_fraction: 0.25,
            refraction_fraction: 0.25,
            refractive_index: 1.5,
            shadow_color: Color::new(0.0, 127.0, 0.0),
            falloff: 500.0,
            hit_rule: HitRule::default(),
            self_shadowing: false,
            debug_normals: false,
            background: Color::ZERO,
        }
    }
}

impl ShaderConfig {
    /// Set the shading mode.
    pub fn with_mode(mut self, mode: ShadingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the bounce budget.
    pub fn with_max_bounces(mut self, max_bounces: u32) -> Self {
        self.max_bounces = max_bounces;
        self
    }

    /// Set lit / shadowed brightness.
    pub fn with_brightness(mut self, lit: f32, shadowed: f32) -> Self {
        self.lit_brightness = lit;
        self.shadowed_brightness = shadowed;
        self
    }

    /// Set the reflection / refraction blend weights.
    pub fn with_fractions(mut self, reflection: f32, refraction: f32) -> Self {
        self.reflection_fraction = reflection;
        self.refraction_fraction = refraction;
        self
    }

    /// Set the sphere selection rule.
    pub fn with_hit_rule(mut self, hit_rule: HitRule) -> Self {
        self.hit_rule = hit_rule;
        self
    }

    /// Count the shaded sphere itself as a shadow caster.
    pub fn with_self_shadowing(mut self, enabled: bool) -> Self {
        self.self_shadowing = enabled;
        self
    }

    /// Toggle normal visualization.
    pub fn with_debug_normals(mut self, enabled: bool) -> Self {
        self.debug_normals = enabled;
        self
    }

    /// Weight left for the direct-light term.
    pub fn direct_fraction(&self) -> f32 {
        1.0 - self.reflection_fraction - self.refraction_fraction
    }

    /// Reject values that would make shading meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.epsilon.is_finite() && self.epsilon >= 0.0) {
            return Err(ConfigError::InvalidEpsilon(self.epsilon));
        }
        for brightness in [self.lit_brightness, self.shadowed_brightness] {
            if !(brightness.is_finite() && brightness >= 0.0) {
                return Err(ConfigError::InvalidBrightness(brightness));
            }
        }
        for (name, value) in [
            ("reflection_fraction", self.reflection_fraction),
            ("refraction_fraction", self.refraction_fraction),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidFraction { name, value });
            }
        }
        if !(self.refractive_index.is_finite() && self.refractive_index > 0.0) {
            return Err(ConfigError::InvalidRefractiveIndex(self.refractive_index));
        }
        if !(self.falloff.is_finite() && self.falloff > 0.0) {
            return Err(ConfigError::InvalidFalloff(self.falloff));
        }
        Ok(())
    }
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Distance from the pinhole to the image plane, in pixels
    pub focal_length: f32,
    /// Camera position
    pub camera_origin: Vec3,
    /// Ray fan half-width `n`; `2n + 1` rays per pixel when non-zero
    pub fan_half_width: u32,
    /// How a ray fan is averaged
    pub fan_normalization: FanNormalization,
    /// Shading settings
    pub shader: ShaderConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            focal_length: 100.0,
            camera_origin: Vec3::ZERO,
            fan_half_width: 0,
            fan_normalization: FanNormalization::default(),
            shader: ShaderConfig::default(),
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the pinhole focal length.
    pub fn with_focal_length(mut self, focal_length: f32) -> Self {
        self.focal_length = focal_length;
        self
    }

    /// Set the anti-aliasing ray fan.
    pub fn with_fan(mut self, half_width: u32, normalization: FanNormalization) -> Self {
        self.fan_half_width = half_width;
        self.fan_normalization = normalization;
        self
    }

    /// Set the shader configuration.
    pub fn with_shader(mut self, shader: ShaderConfig) -> Self {
        self.shader = shader;
        self
    }

    /// Number of rays cast per pixel.
    pub fn samples_per_pixel(&self) -> u32 {
        2 * self.fan_half_width + 1
    }

    /// Reject invalid configuration before rendering starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.focal_length.is_finite() && self.focal_length > 0.0) {
            return Err(ConfigError::InvalidFocalLength(self.focal_length));
        }
        self.shader.validate()
    }
}
