//! Scene types for Glint.
//!
//! A scene is an ordered list of spheres lit by a single point light. Order
//! matters: under the default hit rule the first sphere in the list that a
//! ray intersects wins, even if a later sphere is nearer.

use glint_math::{Color, Vec3};

use crate::error::ConfigError;

/// A sphere with a flat color. Immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    color: Color,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive and finite.
    pub fn new(center: Vec3, radius: f32, color: Color) -> Result<Self, ConfigError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ConfigError::InvalidRadius(radius));
        }
        Ok(Self {
            center,
            radius,
            color,
        })
    }

    /// Center of the sphere.
    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Radius of the sphere.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Surface color (0-255 channels).
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }
}

/// A point light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub position: Vec3,
}

impl Light {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }
}

/// An ordered collection of spheres.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    spheres: Vec<Sphere>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scene from spheres in tie-break order.
    pub fn from_spheres(spheres: Vec<Sphere>) -> Self {
        Self { spheres }
    }

    /// Append a sphere. It loses first-hit ties to every sphere already present.
    pub fn add(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Spheres in insertion order.
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// Get the number of spheres.
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_creation() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 300.0), 200.0, Color::new(127.0, 0.0, 127.0))
            .unwrap();

        assert_eq!(sphere.center(), Vec3::new(0.0, 0.0, 300.0));
        assert_eq!(sphere.radius(), 200.0);
        assert_eq!(sphere.color(), Color::new(127.0, 0.0, 127.0));
    }

    #[test]
    fn test_sphere_rejects_bad_radius() {
        for radius in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let result = Sphere::new(Vec3::ZERO, radius, Color::ONE);
            assert!(
                matches!(result, Err(ConfigError::InvalidRadius(_))),
                "radius {radius} should be rejected"
            );
        }
    }

    #[test]
    fn test_scene_preserves_order() {
        let a = Sphere::new(Vec3::ZERO, 1.0, Color::X).unwrap();
        let b = Sphere::new(Vec3::ONE, 2.0, Color::Y).unwrap();

        let mut scene = Scene::new();
        assert!(scene.is_empty());
        scene.add(a);
        scene.add(b);

        assert_eq!(scene.len(), 2);
        assert_eq!(scene.spheres(), &[a, b]);
    }
}
