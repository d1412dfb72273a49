//! Color representation.
//!
//! Colors are carried as `Vec3` with channels on a 0..255 scale. Blending may
//! leave that range; channels are only saturated when stored as 8-bit values.

use crate::{Interval, Vec3};

/// Color type alias (RGB channels, nominally 0-255)
pub type Color = Vec3;

/// Valid range of a stored 8-bit channel.
pub const CHANNEL_RANGE: Interval = Interval {
    min: 0.0,
    max: 255.0,
};

/// Convert an 8-bit color to the blending representation.
#[inline]
pub fn from_rgb8(rgb: [u8; 3]) -> Color {
    Color::new(rgb[0] as f32, rgb[1] as f32, rgb[2] as f32)
}

/// Saturate a color into 8-bit channels (fractions are truncated).
#[inline]
pub fn to_rgb8(color: Color) -> [u8; 3] {
    [
        CHANNEL_RANGE.clamp(color.x) as u8,
        CHANNEL_RANGE.clamp(color.y) as u8,
        CHANNEL_RANGE.clamp(color.z) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb8_conversion() {
        let c = from_rgb8([127, 0, 255]);
        assert_eq!(c, Color::new(127.0, 0.0, 255.0));
        assert_eq!(to_rgb8(c), [127, 0, 255]);
    }

    #[test]
    fn test_to_rgb8_saturates() {
        assert_eq!(to_rgb8(Color::new(300.0, -20.0, 63.5)), [255, 0, 63]);
    }

    #[test]
    fn test_blending_is_not_clamped() {
        // Intermediate sums may exceed the channel range
        let sum = from_rgb8([200, 0, 0]) + from_rgb8([200, 0, 0]);
        assert_eq!(sum.x, 400.0);
        assert_eq!(to_rgb8(sum * 0.5), [200, 0, 0]);
    }
}
