//! Image rendering.
//!
//! Scanlines are shaded in parallel with rayon. Every pixel is independent
//! and rows are collected in order, so output does not depend on thread count.

use std::time::Instant;

use glint_core::{FanNormalization, Light, RenderConfig, Scene};
use glint_math::{to_rgb8, Color};
use rayon::prelude::*;

use crate::{PinholeCamera, RenderError, Shader};

/// Render a single pixel, averaging its ray fan.
///
/// With a fan half-width of `n > 0`, `2n + 1` rays are summed and divided
/// per `normalization`.
pub fn render_pixel(
    camera: &PinholeCamera,
    shader: &Shader,
    x: u32,
    y: u32,
    normalization: FanNormalization,
) -> Result<Color, RenderError> {
    let degenerate = |source| RenderError::DegenerateRay { x, y, source };

    let n = camera.fan_half_width();
    if n == 0 {
        let ray = camera.get_ray(x, y, 0).map_err(degenerate)?;
        return shader.shade(&ray).map_err(degenerate);
    }

    let mut pixel_color = Color::ZERO;
    for k in camera.fan_offsets() {
        let ray = camera.get_ray(x, y, k).map_err(degenerate)?;
        pixel_color += shader.shade(&ray).map_err(degenerate)?;
    }

    Ok(pixel_color / normalization.divisor(n))
}

/// Row-major image buffer, origin top-left.
///
/// Stores unclamped colors; channels saturate only in [`ImageBuffer::to_rgb8`].
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Convert to saturated 8-bit RGB bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&to_rgb8(*color));
        }
        bytes
    }
}

/// Render the entire scene to an image buffer.
///
/// Configuration is validated before any ray is cast. A failing pixel aborts
/// the render; when several fail, the error reported is the first in scan
/// order.
pub fn render(scene: &Scene, light: Light, config: &RenderConfig) -> Result<ImageBuffer, RenderError> {
    config.validate()?;
    let camera = PinholeCamera::from_config(config)?;
    let shader = Shader::new(scene, light, &config.shader)?;

    log::info!(
        "Rendering {}x{} ({:?}, {} rays/pixel, {} spheres)",
        config.width,
        config.height,
        config.shader.mode,
        config.samples_per_pixel(),
        scene.len()
    );
    let start = Instant::now();

    let rows: Vec<Result<Vec<Color>, RenderError>> = (0..config.height)
        .into_par_iter()
        .map(|y| {
            (0..config.width)
                .map(|x| render_pixel(&camera, &shader, x, y, config.fan_normalization))
                .collect()
        })
        .collect();
    let rows = rows.into_iter().collect::<Result<Vec<_>, _>>()?;

    let image = ImageBuffer {
        width: config.width,
        height: config.height,
        pixels: rows.into_iter().flatten().collect(),
    };

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}
