//! JSON scene descriptions.
//!
//! Materials can be declared once under `materials` and referenced by name
//! from several spheres, or written inline on a sphere.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use orb_renderer::{Lambertian, Material, Metal, Scene, Sphere, Vec3};
use serde::Deserialize;

use crate::cli::RenderOverrides;

const LESSON_SCENE: &str = include_str!("../scenes/lesson.json");

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MaterialDesc {
    Lambertian { albedo: [f32; 3] },
    Metal { albedo: [f32; 3] },
}

impl MaterialDesc {
    fn build(&self) -> Result<Material> {
        let material: Material = match self {
            MaterialDesc::Lambertian { albedo } => Lambertian::new(Vec3::from(*albedo))?.into(),
            MaterialDesc::Metal { albedo } => Metal::new(Vec3::from(*albedo))?.into(),
        };
        Ok(material)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MaterialRef {
    Named(String),
    Inline(MaterialDesc),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SphereDesc {
    pub center: [f32; 3],
    pub radius: f32,
    pub material: MaterialRef,
}

/// A scene file as read from disk.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneFile {
    #[serde(default)]
    pub materials: BTreeMap<String, MaterialDesc>,
    pub spheres: Vec<SphereDesc>,
    #[serde(default)]
    pub render: RenderOverrides,
}

impl SceneFile {
    /// Load a scene file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid scene file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// The built-in scene: ground, a diffuse sphere and two mirrors.
    pub fn lesson() -> Result<Self> {
        Self::parse(LESSON_SCENE).context("Built-in scene is invalid")
    }

    /// Build the renderable scene, sharing named materials between spheres.
    pub fn build(&self) -> Result<Scene> {
        let mut named = BTreeMap::new();
        for (name, desc) in &self.materials {
            let material = desc
                .build()
                .with_context(|| format!("Material '{}'", name))?;
            named.insert(name.as_str(), Arc::new(material));
        }

        let mut scene = Scene::new();
        for (index, desc) in self.spheres.iter().enumerate() {
            let material = match &desc.material {
                MaterialRef::Named(name) => named
                    .get(name.as_str())
                    .cloned()
                    .ok_or_else(|| anyhow!("Sphere {} references unknown material '{}'", index, name))?,
                MaterialRef::Inline(inline) => Arc::new(
                    inline
                        .build()
                        .with_context(|| format!("Sphere {} material", index))?,
                ),
            };

            let sphere = Sphere::new(Vec3::from(desc.center), desc.radius, material)
                .with_context(|| format!("Sphere {}", index))?;
            scene.add(sphere);
        }

        log::debug!(
            "Built scene with {} spheres and {} named materials",
            scene.len(),
            named.len()
        );
        Ok(scene)
    }
}
