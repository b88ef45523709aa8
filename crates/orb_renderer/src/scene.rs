//! Scene: the ordered set of spheres a render traces against.

use crate::{
    hittable::{HitRecord, Hittable},
    Ray, Sphere,
};
use orb_math::Interval;

/// A list of spheres, resolved as one hittable.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    spheres: Vec<Sphere>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sphere to the scene.
    pub fn add(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Builder form of [`Scene::add`].
    pub fn with(mut self, sphere: Sphere) -> Self {
        self.add(sphere);
        self
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// Get the number of spheres.
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }
}

impl FromIterator<Sphere> for Scene {
    fn from_iter<I: IntoIterator<Item = Sphere>>(iter: I) -> Self {
        Self {
            spheres: iter.into_iter().collect(),
        }
    }
}

impl Hittable for Scene {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;
        let mut closest_so_far = ray_t.max;

        for sphere in &self.spheres {
            if let Some(rec) = sphere.hit(ray, ray_t.with_max(closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Lambertian, Material, Metal};
    use orb_math::Vec3;
    use std::sync::Arc;

    fn lambert(c: f32) -> Arc<Material> {
        Arc::new(Lambertian::new(Vec3::splat(c)).unwrap().into())
    }

    fn metal(c: f32) -> Arc<Material> {
        Arc::new(Metal::new(Vec3::splat(c)).unwrap().into())
    }

    fn forward() -> Ray {
        Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn test_empty_scene_misses() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        assert!(scene.hit(&forward(), Interval::new(0.001, f32::INFINITY)).is_none());
    }

    #[test]
    fn test_nearest_hit_wins_regardless_of_order() {
        let far = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, metal(0.9)).unwrap();
        let near = Sphere::new(Vec3::new(0.0, 0.0, -2.0), 0.5, lambert(0.2)).unwrap();

        let far_first = Scene::new().with(far.clone()).with(near.clone());
        let near_first = Scene::new().with(near).with(far);

        for scene in [&far_first, &near_first] {
            let rec = scene.hit(&forward(), Interval::new(0.001, f32::INFINITY)).unwrap();
            assert!((rec.t - 1.5).abs() < 1e-6);
            assert!(matches!(rec.material, Material::Lambertian(_)));
        }
    }

    #[test]
    fn test_overlapping_spheres_resolve_nearer_material() {
        // Two overlapping spheres along the same ray
        let back = Sphere::new(Vec3::new(0.0, 0.0, -2.0), 1.0, metal(0.8)).unwrap();
        let front = Sphere::new(Vec3::new(0.0, 0.0, -1.5), 1.0, lambert(0.4)).unwrap();
        let scene: Scene = vec![back, front].into_iter().collect();

        let rec = scene.hit(&forward(), Interval::new(0.001, f32::INFINITY)).unwrap();

        assert!((rec.t - 0.5).abs() < 1e-6);
        assert_eq!(rec.material.albedo(), Vec3::splat(0.4));
    }

    #[test]
    fn test_hit_respects_original_interval() {
        let scene = Scene::new()
            .with(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, lambert(0.5)).unwrap());

        assert!(scene.hit(&forward(), Interval::new(0.001, 3.0)).is_none());
        assert!(scene.hit(&forward(), Interval::new(0.001, 4.0)).is_some());
    }
}
