//! Surface scattering models.

use orb_math::{near_zero, reflect, Interval, Vec3};
use rand::RngCore;

use crate::{hittable::HitRecord, random::random_in_unit_sphere, ConfigError, Ray, RenderResult};

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Result of a scatter: how much light survives and where it goes next.
#[derive(Debug, Clone, Copy)]
pub struct ScatterResult {
    pub attenuation: Color,
    pub scattered: Ray,
}

/// The closed set of surface materials.
#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    Lambertian(Lambertian),
    Metal(Metal),
}

impl Material {
    /// Scatter an incoming ray.
    ///
    /// Returns `None` if the ray is absorbed. Neither variant absorbs today,
    /// so callers always get a continuation ray back. Errors only come from
    /// a defective random source.
    pub fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> RenderResult<Option<ScatterResult>> {
        match self {
            Material::Lambertian(m) => m.scatter(ray_in, rec, rng),
            Material::Metal(m) => Ok(m.scatter(ray_in, rec)),
        }
    }

    /// Base color of the material.
    pub fn albedo(&self) -> Color {
        match self {
            Material::Lambertian(m) => m.albedo,
            Material::Metal(m) => m.albedo,
        }
    }
}

impl From<Lambertian> for Material {
    fn from(m: Lambertian) -> Self {
        Material::Lambertian(m)
    }
}

impl From<Metal> for Material {
    fn from(m: Metal) -> Self {
        Material::Metal(m)
    }
}

fn check_albedo(albedo: Color) -> Result<Color, ConfigError> {
    if albedo.to_array().iter().all(|&c| Interval::UNIT.contains(c)) {
        Ok(albedo)
    } else {
        Err(ConfigError::InvalidAlbedo(albedo.x, albedo.y, albedo.z))
    }
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone, PartialEq)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo color.
    pub fn new(albedo: Color) -> Result<Self, ConfigError> {
        Ok(Self {
            albedo: check_albedo(albedo)?,
        })
    }

    fn scatter(
        &self,
        _ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> RenderResult<Option<ScatterResult>> {
        let mut scatter_direction = rec.normal + random_in_unit_sphere(rng)?;

        // Catch degenerate scatter direction
        if near_zero(scatter_direction) {
            scatter_direction = rec.normal;
        }

        Ok(Some(ScatterResult {
            attenuation: self.albedo,
            scattered: Ray::new(rec.p, scatter_direction),
        }))
    }
}

/// Metal (mirror) material.
#[derive(Debug, Clone, PartialEq)]
pub struct Metal {
    albedo: Color,
}

impl Metal {
    /// Create a new perfectly smooth metal.
    pub fn new(albedo: Color) -> Result<Self, ConfigError> {
        Ok(Self {
            albedo: check_albedo(albedo)?,
        })
    }

    fn scatter(&self, ray_in: &Ray, rec: &HitRecord) -> Option<ScatterResult> {
        let reflected = reflect(ray_in.direction(), rec.normal);
        Some(ScatterResult {
            attenuation: self.albedo,
            scattered: Ray::new(rec.p, reflected),
        })
    }
}
