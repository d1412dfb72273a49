//! Vector helpers shared by the intersector and the shader.

use crate::Vec3;
use thiserror::Error;

/// Errors produced by vector algebra on degenerate input.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    #[error("cannot normalize degenerate vector {0}")]
    DegenerateVector(Vec3),
}

/// Normalize `v`, failing on zero-length or non-finite input instead of
/// producing NaNs.
#[inline]
pub fn normalize_checked(v: Vec3) -> Result<Vec3, MathError> {
    v.try_normalize().ok_or(MathError::DegenerateVector(v))
}

/// Reflect a vector about a normal.
///
/// `reflect(i, n) = i - 2 * dot(i, n) * n`
#[inline]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * incident.dot(normal) * normal
}

/// Refract a unit vector through a surface using Snell's law.
///
/// `eta` is the ratio of the refractive index on the incident side to the
/// index on the transmitted side. `normal` must face against `incident`.
/// Returns `None` on total internal reflection.
#[inline]
pub fn refract(incident: Vec3, normal: Vec3, eta: f32) -> Option<Vec3> {
    let cos_i = (-incident.dot(normal)).clamp(-1.0, 1.0);
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        return None;
    }
    Some(eta * incident + (eta * cos_i - k.sqrt()) * normal)
}
