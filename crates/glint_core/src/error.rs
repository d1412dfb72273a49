//! Error types for scene setup and configuration.

use glint_math::Vec3;
use thiserror::Error;

/// Invalid configuration, rejected before any rendering starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("image dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("focal length must be positive and finite, got {0}")]
    InvalidFocalLength(f32),

    #[error("epsilon must be non-negative and finite, got {0}")]
    InvalidEpsilon(f32),

    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("radius bounds must satisfy 0 < min <= max, got {min}..{max}")]
    InvalidRadiusBounds { min: f32, max: f32 },

    #[error("position jitter must be non-negative and finite, got {0}")]
    InvalidJitter(Vec3),

    #[error("{name} must be within [0, 1], got {value}")]
    InvalidFraction { name: &'static str, value: f32 },

    #[error("brightness must be non-negative and finite, got {0}")]
    InvalidBrightness(f32),

    #[error("refractive index must be positive and finite, got {0}")]
    InvalidRefractiveIndex(f32),

    #[error("distance falloff must be positive and finite, got {0}")]
    InvalidFalloff(f32),
}

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("sphere {index}: {source}")]
    Sphere {
        index: usize,
        #[source]
        source: ConfigError,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
