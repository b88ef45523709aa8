//! Sphere primitive for ray tracing.

use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Hittable},
    ConfigError, Material, Ray,
};
use orb_math::{Interval, Vec3};

/// A sphere primitive.
///
/// The material is shared, so one material can back several spheres.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive and finite.
    pub fn new(center: Vec3, radius: f32, material: Arc<Material>) -> Result<Self, ConfigError> {
        if !center.is_finite() {
            return Err(ConfigError::InvalidCenter(center.x, center.y, center.z));
        }
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(ConfigError::InvalidRadius(radius));
        }

        Ok(Self {
            center,
            radius,
            material,
        })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let half_b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (-half_b - sqrtd) / a;
        if !ray_t.accepts(root) {
            root = (-half_b + sqrtd) / a;
            if !ray_t.accepts(root) {
                return None;
            }
        }

        let outward_normal = (ray.at(root) - self.center) / self.radius;
        Some(HitRecord::new(ray, root, outward_normal, &self.material))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Lambertian, Metal};

    fn gray() -> Arc<Material> {
        Arc::new(Lambertian::new(Vec3::splat(0.5)).unwrap().into())
    }

    fn unit_sphere_at(center: Vec3) -> Sphere {
        Sphere::new(center, 0.5, gray()).unwrap()
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -1.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.hit(&ray, Interval::new(0.001, f32::INFINITY)).unwrap();

        assert!((rec.t - 0.5).abs() < 1e-6);
        assert!(rec.front_face);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -1.0));
        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));

        assert!(sphere.hit(&ray, Interval::new(0.001, f32::INFINITY)).is_none());
    }

    #[test]
    fn test_hit_at_distance_minus_radius() {
        let center = Vec3::new(1.0, 2.0, -6.0);
        let radius = 1.5;
        let sphere = Sphere::new(center, radius, gray()).unwrap();
        let origin = Vec3::new(-2.0, 0.5, 3.0);
        // Unnormalized on purpose: t scales with 1 / |direction|
        let direction = (center - origin) * 0.25;
        let ray = Ray::new(origin, direction);

        let rec = sphere.hit(&ray, Interval::new(0.001, f32::INFINITY)).unwrap();

        let expected_t = ((center - origin).length() - radius) / direction.length();
        assert!((rec.t - expected_t).abs() < 1e-4, "t = {}, expected {}", rec.t, expected_t);
        assert!((rec.p - ray.at(rec.t)).length() < 1e-6);
        assert!((rec.normal.length() - 1.0).abs() < 1e-5);
        // Parallel to (point - center)
        let radial = (rec.p - center).normalize();
        assert!(rec.normal.cross(radial).length() < 1e-4);
        assert!(rec.normal.dot(radial) > 0.0);
    }

    #[test]
    fn test_nearer_root_preferred() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -2.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        // Roots at 1.5 and 2.5
        let rec = sphere.hit(&ray, Interval::new(0.001, 10.0)).unwrap();
        assert!((rec.t - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_far_root_when_near_root_out_of_range() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -2.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.hit(&ray, Interval::new(2.0, 10.0)).unwrap();
        assert!((rec.t - 2.5).abs() < 1e-6);
        // Exiting the sphere: the stored normal faces the ray
        assert!(!rec.front_face);
        assert_eq!(rec.normal, Vec3::Z);
    }

    #[test]
    fn test_inside_sphere_hits_exit() {
        let sphere = unit_sphere_at(Vec3::ZERO);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let rec = sphere.hit(&ray, Interval::new(0.001, f32::INFINITY)).unwrap();
        assert!((rec.t - 0.5).abs() < 1e-6);
        assert_eq!(rec.normal, -Vec3::X);
    }

    #[test]
    fn test_interval_bounds_are_half_open() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -2.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        // t_max inclusive
        let rec = sphere.hit(&ray, Interval::new(0.001, 1.5)).unwrap();
        assert_eq!(rec.t, 1.5);

        // t_min exclusive: both roots rejected
        assert!(sphere.hit(&ray, Interval::new(2.5, 10.0)).is_none());

        // Both roots beyond t_max
        assert!(sphere.hit(&ray, Interval::new(0.001, 1.4)).is_none());
    }

    #[test]
    fn test_hit_iff_discriminant_and_root_in_range() {
        let center = Vec3::new(0.0, 0.0, -3.0);
        let radius = 1.0;
        let sphere = Sphere::new(center, radius, gray()).unwrap();
        let ray_t = Interval::new(0.001, 100.0);

        for i in -20..=20 {
            for j in -20..=20 {
                let direction = Vec3::new(i as f32 * 0.03, j as f32 * 0.03, -1.0);
                let ray = Ray::new(Vec3::ZERO, direction);

                let oc = ray.origin() - center;
                let a = direction.length_squared();
                let half_b = oc.dot(direction);
                let c = oc.length_squared() - radius * radius;
                let disc = half_b * half_b - a * c;
                let expected = if disc >= 0.0 {
                    let r1 = (-half_b - disc.sqrt()) / a;
                    let r2 = (-half_b + disc.sqrt()) / a;
                    [r1, r2].into_iter().find(|&r| ray_t.accepts(r))
                } else {
                    None
                };

                let got = sphere.hit(&ray, ray_t).map(|rec| rec.t);
                assert_eq!(got, expected, "direction {:?}", direction);
            }
        }
    }

    #[test]
    fn test_hit_reports_own_material() {
        let metal: Arc<Material> = Arc::new(Metal::new(Vec3::new(0.8, 0.6, 0.2)).unwrap().into());
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, metal.clone()).unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.hit(&ray, Interval::new(0.001, f32::INFINITY)).unwrap();
        assert!(std::ptr::eq(rec.material, metal.as_ref()));
    }

    #[test]
    fn test_sphere_accessors() {
        let sphere = Sphere::new(Vec3::new(1.0, -2.0, -3.0), 0.25, gray()).unwrap();

        assert_eq!(sphere.center(), Vec3::new(1.0, -2.0, -3.0));
        assert_eq!(sphere.radius(), 0.25);
    }

    #[test]
    fn test_invalid_sphere_rejected() {
        assert_eq!(
            Sphere::new(Vec3::ZERO, 0.0, gray()).unwrap_err(),
            ConfigError::InvalidRadius(0.0)
        );
        assert_eq!(
            Sphere::new(Vec3::ZERO, -1.0, gray()).unwrap_err(),
            ConfigError::InvalidRadius(-1.0)
        );
        assert!(Sphere::new(Vec3::ZERO, f32::NAN, gray()).is_err());
        assert!(Sphere::new(Vec3::ZERO, f32::INFINITY, gray()).is_err());
        assert!(Sphere::new(Vec3::new(f32::NAN, 0.0, 0.0), 1.0, gray()).is_err());
    }

    #[test]
    fn test_shared_material() {
        let shared = gray();
        let a = Sphere::new(Vec3::ZERO, 1.0, shared.clone()).unwrap();
        let b = Sphere::new(Vec3::X * 3.0, 1.0, shared.clone()).unwrap();

        assert!(Arc::ptr_eq(a.material(), b.material()));
        assert_eq!(Arc::strong_count(&shared), 3);
    }
}
