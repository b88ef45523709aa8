//! Error types for the path tracing core.

use orb_math::MathError;
use thiserror::Error;

/// Invalid scene, camera, buffer or render parameters.
///
/// Raised at construction time. Values are never silently clamped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("samples_per_pixel must be at least 1")]
    ZeroSamples,

    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("sphere center must be finite, got ({0}, {1}, {2})")]
    InvalidCenter(f32, f32, f32),

    #[error("albedo components must lie in [0, 1], got ({0}, {1}, {2})")]
    InvalidAlbedo(f32, f32, f32),

    #[error("camera {name} must be positive and finite, got {value}")]
    InvalidCamera { name: &'static str, value: f32 },

    #[error("image dimensions must be non-zero, got {width}x{height}")]
    ZeroDimensions { width: u32, height: u32 },

    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("pixel ({x}, {y}) lies outside a {width}x{height} image")]
    PixelOutOfBounds { x: u32, y: u32, width: u32, height: u32 },
}

/// Failure while tracing or writing pixels.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("numeric failure: {0}")]
    Math(#[from] MathError),

    #[error("random source rejected {rejections} unit-sphere candidates in a row; generator is defective")]
    DefectiveRandomSource { rejections: u32 },
}

pub type RenderResult<T> = Result<T, RenderError>;
