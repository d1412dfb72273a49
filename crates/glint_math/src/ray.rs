use crate::{normalize_checked, MathError, Vec3};

/// A ray in 3D space with an origin and a unit-length direction.
///
/// The intersection algebra relies on `|direction| == 1`, so callers either
/// pass an already normalized direction to [`Ray::new`] or go through
/// [`Ray::from_direction`], which normalizes and rejects degenerate input.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray from an origin and a unit direction.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        debug_assert!(
            (direction.length_squared() - 1.0).abs() < 1e-3,
            "ray direction must be normalized, got {direction}"
        );
        Self { origin, direction }
    }

    /// Create a ray, normalizing `direction` first.
    pub fn from_direction(origin: Vec3, direction: Vec3) -> Result<Self, MathError> {
        Ok(Self::new(origin, normalize_checked(direction)?))
    }

    /// Create a ray starting at `origin` and heading toward `target`.
    pub fn toward(origin: Vec3, target: Vec3) -> Result<Self, MathError> {
        Self::from_direction(origin, target - origin)
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// The same ray with its origin pushed `epsilon` along the direction.
    ///
    /// Secondary rays are nudged off the surface they leave so they do not
    /// immediately re-hit it.
    #[inline]
    pub fn nudged(&self, epsilon: f32) -> Self {
        Self {
            origin: self.at(epsilon),
            direction: self.direction,
        }
    }
}
