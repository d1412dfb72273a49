//! Glint Renderer - recursive Whitted-style sphere ray tracing.
//!
//! Casts rays from a pinhole camera through a scene of spheres, shades hits
//! with a point light and shadows, and blends in reflected and refracted rays
//! up to a bounce limit.

mod camera;
mod error;
mod hittable;
mod output;
mod renderer;
mod shader;
mod sphere;
mod visibility;

pub use camera::PinholeCamera;
pub use error::RenderError;
pub use hittable::{first_hit, HitRecord, Hittable};
pub use output::save_png;
pub use renderer::{render, render_pixel, ImageBuffer};
pub use shader::Shader;
pub use visibility::{is_occluded, is_occluded_except};

/// Re-export scene and configuration types from glint_core
pub use glint_core::{
    FanNormalization, HitRule, Light, RenderConfig, Scene, ShaderConfig, ShadingMode, Sphere,
};

/// Re-export Vec3 and common math types from glint_math
pub use glint_math::{Color, Ray, Vec3};
