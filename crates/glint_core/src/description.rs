//! Scene description files.
//!
//! A scene file is JSON:
//!
//! ```json
//! {
//!   "light": [500, 500, 300],
//!   "spheres": [
//!     { "center": [0, 0, 300], "radius": 200, "color": [127, 0, 127] }
//!   ],
//!   "config": { "shader": { "mode": "flat" } }
//! }
//! ```
//!
//! `config` is optional. Sphere order in the file is the tie-break order.

use std::path::Path;

use glint_math::{from_rgb8, Vec3};
use serde::{Deserialize, Serialize};

use crate::config::RenderConfig;
use crate::error::SceneError;
use crate::scene::{Light, Scene, Sphere};

/// A sphere as written in a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereDescription {
    pub center: Vec3,
    pub radius: f32,
    pub color: [u8; 3],
}

/// A complete scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Point light position
    pub light: Vec3,
    /// Spheres in tie-break order
    pub spheres: Vec<SphereDescription>,
    /// Render settings stored alongside the scene
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<RenderConfig>,
}

impl SceneDescription {
    /// The single-sphere reference scene.
    pub fn reference() -> Self {
        Self {
            light: Vec3::new(500.0, 500.0, 300.0),
            spheres: vec![SphereDescription {
                center: Vec3::new(0.0, 0.0, 300.0),
                radius: 200.0,
                color: [127, 0, 127],
            }],
            config: None,
        }
    }

    /// Parse a scene description from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate every sphere and build the renderable scene and light.
    pub fn build(&self) -> Result<(Scene, Light), SceneError> {
        let spheres = self
            .spheres
            .iter()
            .enumerate()
            .map(|(index, desc)| {
                Sphere::new(desc.center, desc.radius, from_rgb8(desc.color))
                    .map_err(|source| SceneError::Sphere { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(config) = &self.config {
            config.validate()?;
        }

        Ok((Scene::from_spheres(spheres), Light::new(self.light)))
    }
}

/// Load a scene description from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<SceneDescription, SceneError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let description = SceneDescription::from_json_str(&json)?;

    log::info!(
        "Loaded {} spheres from {}",
        description.spheres.len(),
        path.display()
    );
    Ok(description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShadingMode;
    use crate::error::ConfigError;

    const SCENE_JSON: &str = r#"{
        "light": [500, 500, 300],
        "spheres": [
            { "center": [0, 0, 300], "radius": 200, "color": [127, 0, 127] },
            { "center": [100, 100, 150], "radius": 20, "color": [255, 255, 255] }
        ],
        "config": { "width": 320, "height": 240, "shader": { "mode": "flat" } }
    }"#;

    #[test]
    fn test_parse_scene() {
        let description = SceneDescription::from_json_str(SCENE_JSON).unwrap();
        assert_eq!(description.light, Vec3::new(500.0, 500.0, 300.0));
        assert_eq!(description.spheres.len(), 2);

        let config = description.config.as_ref().unwrap();
        assert_eq!((config.width, config.height), (320, 240));
        assert_eq!(config.shader.mode, ShadingMode::Flat);

        let (scene, light) = description.build().unwrap();
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.spheres()[1].radius(), 20.0);
        assert_eq!(light.position, description.light);
    }

    #[test]
    fn test_config_is_optional() {
        let json = r#"{ "light": [0, 0, 0], "spheres": [] }"#;
        let description = SceneDescription::from_json_str(json).unwrap();
        assert!(description.config.is_none());
        assert!(description.build().unwrap().0.is_empty());
    }

    #[test]
    fn test_negative_radius_reports_index() {
        let json = r#"{
            "light": [0, 0, 0],
            "spheres": [
                { "center": [0, 0, 10], "radius": 1, "color": [0, 0, 0] },
                { "center": [0, 0, 20], "radius": -5, "color": [0, 0, 0] }
            ]
        }"#;
        let err = SceneDescription::from_json_str(json).unwrap().build().unwrap_err();
        assert!(matches!(
            err,
            SceneError::Sphere {
                index: 1,
                source: ConfigError::InvalidRadius(_)
            }
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let json = r#"{ "light": [0, 0, 0], "spheres": [], "config": { "width": 0 } }"#;
        let err = SceneDescription::from_json_str(json).unwrap().build().unwrap_err();
        assert!(matches!(
            err,
            SceneError::Config(ConfigError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            SceneDescription::from_json_str("{ not json"),
            Err(SceneError::Json(_))
        ));
    }

    #[test]
    fn test_reference_json_roundtrip() {
        let reference = SceneDescription::reference();
        let json = reference.to_json_string().unwrap();
        assert_eq!(SceneDescription::from_json_str(&json).unwrap(), reference);
    }

    #[test]
    fn test_bundled_scenes() {
        for json in [
            include_str!("../../../scenes/reference.json"),
            include_str!("../../../scenes/occluded.json"),
            include_str!("../../../scenes/glass.json"),
        ] {
            let description = SceneDescription::from_json_str(json).unwrap();
            let (scene, _) = description.build().unwrap();
            assert!(!scene.is_empty());
        }
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_scene("does/not/exist.json"),
            Err(SceneError::Io(_))
        ));
    }
}
