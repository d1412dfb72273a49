//! PNG output.

use std::path::Path;

use glint_math::to_rgb8;
use image::{ImageFormat, ImageResult, Rgb, RgbImage};

use crate::ImageBuffer;

impl ImageBuffer {
    /// Convert to an 8-bit RGB image, saturating each channel.
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| Rgb(to_rgb8(self.get(x, y))))
    }
}

/// Save an image buffer as PNG.
pub fn save_png<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> ImageResult<()> {
    let path = path.as_ref();
    image.to_rgb_image().save_with_format(path, ImageFormat::Png)?;
    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Color;

    #[test]
    fn test_to_rgb_image() {
        let mut buffer = ImageBuffer::new(3, 2);
        buffer.set(2, 1, Color::new(127.0, 400.0, -3.0));

        let image = buffer.to_rgb_image();
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.get_pixel(2, 1), &Rgb([127, 255, 0]));
        assert_eq!(image.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(image.as_raw(), &buffer.to_rgb8());
    }

    #[test]
    fn test_save_png() {
        let mut buffer = ImageBuffer::new(4, 4);
        buffer.set(1, 2, Color::new(10.0, 20.0, 30.0));

        let path = std::env::temp_dir().join(format!("glint_output_{}.png", std::process::id()));
        save_png(&buffer, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgb8();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, buffer.to_rgb_image());
    }
}
