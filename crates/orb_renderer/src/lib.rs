//! Orb renderer - CPU Path Tracing
//!
//! A Monte Carlo path tracer for scenes of spheres with diffuse and
//! mirror materials, writing gamma-corrected 8-bit pixels into a
//! caller-owned buffer.

mod buffer;
mod camera;
mod error;
mod hittable;
mod material;
pub mod random;
mod renderer;
mod scanline;
mod scene;
mod sphere;

pub use buffer::{PixelBuffer, PixelFormat};
pub use camera::{Camera, DEFAULT_FOCAL_LENGTH, DEFAULT_VIEWPORT_HEIGHT};
pub use error::{ConfigError, RenderError, RenderResult};
pub use hittable::{HitRecord, Hittable};
pub use material::{Color, Lambertian, Material, Metal, ScatterResult};
pub use renderer::{
    color_to_rgb8, linear_color_to_rgb8, linear_to_gamma, pixel_uv, ray_color, render,
    render_pixel, sky_gradient, RenderConfig, Shading, SHADOW_ACNE_EPSILON,
};
pub use scanline::render_parallel;
pub use scene::Scene;
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from orb_math
pub use orb_math::{Interval, MathError, Ray, Vec3};
