//! Render errors.

use glint_core::ConfigError;
use glint_math::MathError;
use thiserror::Error;

/// Errors that abort a render.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("degenerate ray at pixel ({x}, {y}): {source}")]
    DegenerateRay {
        x: u32,
        y: u32,
        #[source]
        source: MathError,
    },
}
