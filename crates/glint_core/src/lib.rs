//! Glint Core - scene description and render configuration.
//!
//! This crate provides:
//!
//! - **Scene types**: `Sphere`, `Scene`, `Light`
//! - **Scene files**: JSON scene descriptions and seeded random scenes
//! - **Configuration**: `RenderConfig` / `ShaderConfig` with validation
//!
//! # Example
//!
//! ```ignore
//! use glint_core::{load_scene, RandomSceneParams};
//!
//! let description = load_scene("scene.json")?;
//! let (scene, light) = description.build()?;
//! println!("Loaded {} spheres", scene.len());
//! ```

pub mod config;
pub mod description;
pub mod error;
pub mod random;
pub mod scene;

// Re-export commonly used types
pub use config::{FanNormalization, HitRule, RenderConfig, ShaderConfig, ShadingMode};
pub use description::{load_scene, SceneDescription, SphereDescription};
pub use error::{ConfigError, SceneError};
pub use random::{random_scene, RandomSceneParams};
pub use scene::{Light, Scene, Sphere};
