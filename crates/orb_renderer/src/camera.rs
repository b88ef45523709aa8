//! Camera for ray generation.

use crate::{ConfigError, Ray};
use orb_math::Vec3;

/// Viewport height in world units.
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 2.0;
/// Distance from the eye to the viewport plane.
pub const DEFAULT_FOCAL_LENGTH: f32 = 1.0;

/// Fixed pinhole camera at the world origin looking down -Z.
///
/// Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Camera {
    /// Create a camera with the default viewport height and focal length.
    pub fn new(aspect_ratio: f32) -> Result<Self, ConfigError> {
        Self::with_viewport(aspect_ratio, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_FOCAL_LENGTH)
    }

    /// Create a camera whose aspect ratio matches an image.
    pub fn for_image(width: u32, height: u32) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroDimensions { width, height });
        }
        Self::new(width as f32 / height as f32)
    }

    /// Create a camera with an explicit viewport.
    pub fn with_viewport(
        aspect_ratio: f32,
        viewport_height: f32,
        focal_length: f32,
    ) -> Result<Self, ConfigError> {
        check_positive("aspect_ratio", aspect_ratio)?;
        check_positive("viewport_height", viewport_height)?;
        check_positive("focal_length", focal_length)?;

        let viewport_width = aspect_ratio * viewport_height;

        let origin = Vec3::ZERO;
        let horizontal = Vec3::new(viewport_width, 0.0, 0.0);
        let vertical = Vec3::new(0.0, viewport_height, 0.0);
        let lower_left_corner =
            origin - horizontal / 2.0 - vertical / 2.0 - Vec3::new(0.0, 0.0, focal_length);

        Ok(Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
        })
    }

    /// Ray from the eye through viewport coordinates (u, v).
    ///
    /// (0, 0) is the lower-left of the viewport, (1, 1) the upper-right.
    /// The direction is not normalized.
    #[inline]
    pub fn get_ray(&self, u: f32, v: f32) -> Ray {
        Ray::new(
            self.origin,
            self.lower_left_corner + u * self.horizontal + v * self.vertical - self.origin,
        )
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn lower_left_corner(&self) -> Vec3 {
        self.lower_left_corner
    }

    pub fn horizontal(&self) -> Vec3 {
        self.horizontal
    }

    pub fn vertical(&self) -> Vec3 {
        self.vertical
    }
}

fn check_positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidCamera { name, value })
    }
}
