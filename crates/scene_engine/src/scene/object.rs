//! Declarative scene content records
//!
//! A scene is static configuration data: materials, lights, texture files,
//! and an ordered list of object records. The renderer consumes the records
//! with one uniform draw loop; there is no per-object code.

use std::path::PathBuf;

use crate::foundation::math::Vec3;
use crate::render::{Material, PointLight, ShapeKind, TransformParams};

/// How an object's surface is shaded: sampled texture or solid color
#[derive(Debug, Clone, PartialEq)]
pub enum Surface {
    /// Sample the texture registered under this tag
    Textured {
        /// Texture registry tag
        tag: String,
    },
    /// Solid RGBA color, texturing disabled
    Flat {
        /// RGBA color components
        color: [f32; 4],
    },
}

/// A texture file to register during preparation
#[derive(Debug, Clone, PartialEq)]
pub struct TextureSource {
    /// Image file path
    pub path: PathBuf,
    /// Registry tag the texture is looked up by
    pub tag: String,
}

/// One drawable object in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    /// Debug label used in log output
    pub name: String,
    /// Primitive mesh the object is drawn with
    pub shape: ShapeKind,
    /// Scale, rotation and position of the object
    pub transform: TransformParams,
    /// Texture coordinate multiplier (tiling)
    pub uv_scale: (f32, f32),
    /// Texture tag or flat color
    pub surface: Surface,
    /// Material tag, if the object is lit through a material
    pub material_tag: Option<String>,
}

impl SceneObject {
    /// Create an object with identity transform and a white flat surface
    pub fn new(name: impl Into<String>, shape: ShapeKind) -> Self {
        Self {
            name: name.into(),
            shape,
            transform: TransformParams::default(),
            uv_scale: (1.0, 1.0),
            surface: Surface::Flat {
                color: [1.0, 1.0, 1.0, 1.0],
            },
            material_tag: None,
        }
    }

    /// Set the per-axis scale
    pub fn with_scale(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.scale = Vec3::new(x, y, z);
        self
    }

    /// Set the Euler rotation in degrees (applied about X, then Y, then Z)
    pub fn with_rotation_deg(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.rotation_deg = Vec3::new(x, y, z);
        self
    }

    /// Set the world-space position
    pub fn with_position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.translation = Vec3::new(x, y, z);
        self
    }

    /// Set the texture coordinate multiplier
    pub fn with_uv_scale(mut self, u: f32, v: f32) -> Self {
        self.uv_scale = (u, v);
        self
    }

    /// Shade the surface from the texture registered under `tag`
    pub fn with_texture(mut self, tag: impl Into<String>) -> Self {
        self.surface = Surface::Textured { tag: tag.into() };
        self
    }

    /// Shade the surface with a solid RGBA color
    pub fn with_color(mut self, r: f32, g: f32, b: f32, a: f32) -> Self {
        self.surface = Surface::Flat { color: [r, g, b, a] };
        self
    }

    /// Light the surface through the material registered under `tag`
    pub fn with_material(mut self, tag: impl Into<String>) -> Self {
        self.material_tag = Some(tag.into());
        self
    }
}

/// Complete static scene content
///
/// Iteration order everywhere is insertion order, so draws, texture units and
/// light indices are deterministic and reproducible across frames.
#[derive(Debug, Default)]
pub struct SceneDescription {
    /// Material presets registered during preparation
    pub materials: Vec<Material>,
    /// Light sources configured during preparation
    pub lights: Vec<PointLight>,
    /// Texture files registered during preparation, in unit order
    pub textures: Vec<TextureSource>,
    /// Drawable objects in draw order
    pub objects: Vec<SceneObject>,
}

impl SceneDescription {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a material preset
    pub fn with_material(mut self, material: Material) -> Self {
        self.materials.push(material);
        self
    }

    /// Add a light source
    pub fn with_light(mut self, light: PointLight) -> Self {
        self.lights.push(light);
        self
    }

    /// Add a texture file to register under `tag`
    pub fn with_texture(mut self, path: impl Into<PathBuf>, tag: impl Into<String>) -> Self {
        self.textures.push(TextureSource {
            path: path.into(),
            tag: tag.into(),
        });
        self
    }

    /// Add a drawable object at the end of the draw order
    pub fn with_object(mut self, object: SceneObject) -> Self {
        self.objects.push(object);
        self
    }

    /// Distinct shapes referenced by the object list, in first-appearance order
    ///
    /// This is the set of meshes preparation loads exactly once each.
    pub fn distinct_shapes(&self) -> Vec<ShapeKind> {
        let mut shapes = Vec::new();
        for object in &self.objects {
            if !shapes.contains(&object.shape) {
                shapes.push(object.shape);
            }
        }
        shapes
    }
}
