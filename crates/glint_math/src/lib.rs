//! Glint math - vector algebra, rays and color helpers.
//!
//! Re-exports `glam` so downstream crates share one `Vec3` type.

// Re-export glam for convenience
pub use glam::*;

mod color;
mod interval;
mod ray;
mod vector;

pub use color::{from_rgb8, to_rgb8, Color, CHANNEL_RANGE};
pub use interval::Interval;
pub use ray::Ray;
pub use vector::{normalize_checked, reflect, refract, MathError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).length(), 5.0);
    }
}
