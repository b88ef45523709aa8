//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with configurable depth
//! - Gamma correction
//! - Anti-aliasing via multi-sampling

use crate::buffer::write_pixel;
use crate::random::{gen_f32, scanline_rng};
use crate::{Camera, Color, ConfigError, Hittable, PixelBuffer, Ray, RenderResult};
use orb_math::{unit_vector, Interval};
use rand::RngCore;

/// Minimum hit distance for traced rays. Keeps bounced rays from
/// re-hitting the surface they start on (shadow acne).
pub const SHADOW_ACNE_EPSILON: f32 = 0.001;

/// What a ray reports when it hits a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shading {
    /// Full material scattering.
    #[default]
    PathTraced,
    /// Surface normal mapped to RGB, no bounces.
    Normals,
}

impl Shading {
    /// Whether pixels go through gamma correction. Normal maps are written
    /// linearly.
    pub fn gamma_corrected(self) -> bool {
        matches!(self, Shading::PathTraced)
    }

    /// Quantize an averaged pixel color for this shading mode.
    pub fn to_rgb8(self, color: Color) -> [u8; 3] {
        if self.gamma_corrected() {
            color_to_rgb8(color)
        } else {
            linear_color_to_rgb8(color)
        }
    }
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    pub shading: Shading,
    /// Jitter samples within the pixel footprint. When off, every sample
    /// goes through the pixel corner.
    pub jitter: bool,
    /// Seed for the per-scanline random streams
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 100,
            max_depth: 50,
            shading: Shading::PathTraced,
            jitter: true,
            seed: 0,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.samples_per_pixel == 0 {
            return Err(ConfigError::ZeroSamples);
        }
        Ok(())
    }
}

/// Compute the color seen by a ray.
///
/// This is the core path tracing function. It traces the ray through
/// the scene, bouncing off surfaces and multiplying in each attenuation.
/// Recursion depth is bounded by `depth`.
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> RenderResult<Color> {
    // If we've exceeded max depth, return black (no light)
    if depth == 0 {
        return Ok(Color::ZERO);
    }

    let Some(rec) = world.hit(ray, Interval::new(SHADOW_ACNE_EPSILON, f32::INFINITY)) else {
        return sky_gradient(ray);
    };

    match config.shading {
        Shading::Normals => Ok(0.5 * (rec.normal + Color::ONE)),
        Shading::PathTraced => match rec.material.scatter(ray, &rec, rng)? {
            Some(result) => {
                let incoming = ray_color(&result.scattered, world, depth - 1, config, rng)?;
                Ok(result.attenuation * incoming)
            }
            None => Ok(Color::ZERO),
        },
    }
}

/// Compute sky gradient background.
///
/// Blends white to sky blue by the height of the normalized direction.
pub fn sky_gradient(ray: &Ray) -> RenderResult<Color> {
    let unit_direction = unit_vector(ray.direction())?;
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    Ok((1.0 - a) * white + a * blue)
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

#[inline]
fn quantize(c: f32) -> u8 {
    (255.999 * Interval::UNIT.clamp(c)) as u8
}

/// Convert a linear color to gamma-corrected 8-bit RGB.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let channel = |c: f32| quantize(linear_to_gamma(c));
    [channel(color.x), channel(color.y), channel(color.z)]
}

/// Convert a color to 8-bit RGB without gamma correction.
pub fn linear_color_to_rgb8(color: Color) -> [u8; 3] {
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

fn check_pixel(x: u32, y: u32, width: u32, height: u32) -> Result<(), ConfigError> {
    if width == 0 || height == 0 {
        return Err(ConfigError::ZeroDimensions { width, height });
    }
    if x >= width || y >= height {
        return Err(ConfigError::PixelOutOfBounds { x, y, width, height });
    }
    Ok(())
}

/// Viewport coordinates for a pixel, with the vertical axis flipped.
///
/// Row 0 is the top of the image, `v = 0` the bottom of the viewport.
pub fn pixel_uv(
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    du: f32,
    dv: f32,
) -> Result<(f32, f32), ConfigError> {
    check_pixel(x, y, width, height)?;
    Ok(viewport_uv(x, y, width, height, du, dv))
}

// Caller guarantees x < width and y < height.
#[inline]
fn viewport_uv(x: u32, y: u32, width: u32, height: u32, du: f32, dv: f32) -> (f32, f32) {
    let u_span = width.saturating_sub(1).max(1) as f32;
    let v_span = height.saturating_sub(1).max(1) as f32;
    let u = (x as f32 + du) / u_span;
    let v = ((height - 1 - y) as f32 + dv) / v_span;
    (u, v)
}

/// Render a single pixel with multi-sampling.
///
/// Returns the averaged linear color, before gamma correction.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    (x, y): (u32, u32),
    (width, height): (u32, u32),
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> RenderResult<Color> {
    config.validate()?;
    check_pixel(x, y, width, height)?;
    sample_pixel(camera, world, (x, y), (width, height), config, rng)
}

/// Sampling loop behind `render_pixel`, for callers that have already
/// validated the config and the pixel coordinates.
fn sample_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    (x, y): (u32, u32),
    (width, height): (u32, u32),
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> RenderResult<Color> {
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let (du, dv) = if config.jitter {
            (gen_f32(rng), gen_f32(rng))
        } else {
            (0.0, 0.0)
        };
        let (u, v) = viewport_uv(x, y, width, height, du, dv);
        let ray = camera.get_ray(u, v);
        pixel_color += ray_color(&ray, world, config.max_depth, config, rng)?;
    }

    // Average the samples
    Ok(pixel_color / config.samples_per_pixel as f32)
}

/// Render one scanline into its slice of the output buffer.
///
/// `config` must already be validated and `row` must hold `width` pixels.
pub(crate) fn render_scanline(
    row: &mut [u8],
    y: u32,
    (width, height): (u32, u32),
    channels: usize,
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
) -> RenderResult<()> {
    let mut rng = scanline_rng(config.seed, y);

    for (x, pixel) in row.chunks_exact_mut(channels).enumerate() {
        let color = sample_pixel(camera, world, (x as u32, y), (width, height), config, &mut rng)?;
        write_pixel(pixel, config.shading.to_rgb8(color));
    }

    log::trace!("scanline {} done", y);
    Ok(())
}

/// Render the entire scene into `buffer`, one scanline at a time.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    buffer: &mut PixelBuffer,
) -> RenderResult<()> {
    config.validate()?;

    let size = (buffer.width(), buffer.height());
    let channels = buffer.format().channels();
    let stride = buffer.row_stride();
    log::debug!(
        "rendering {}x{} @ {} spp, max depth {}, {:?}",
        size.0,
        size.1,
        config.samples_per_pixel,
        config.max_depth,
        config.shading
    );

    for (y, row) in buffer.data_mut().chunks_exact_mut(stride).enumerate() {
        render_scanline(row, y as u32, size, channels, camera, world, config)?;
    }

    log::debug!("render complete");
    Ok(())
}
