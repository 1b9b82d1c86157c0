//! Surface materials and the tagged material registry

use crate::foundation::math::Vec3;
use crate::render::shader::{uniform, ShaderProgram};

/// Phong-style surface material looked up by tag at draw time
///
/// Materials are defined once during scene preparation and immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Lookup tag
    pub tag: String,
    /// Ambient reflectance color
    pub ambient_color: Vec3,
    /// Ambient contribution multiplier
    pub ambient_strength: f32,
    /// Diffuse reflectance color
    pub diffuse_color: Vec3,
    /// Specular reflectance color
    pub specular_color: Vec3,
    /// Specular exponent
    pub shininess: f32,
}

impl Material {
    /// Create a neutral material registered under `tag`
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ambient_color: Vec3::new(0.0, 0.0, 0.0),
            ambient_strength: 0.0,
            diffuse_color: Vec3::new(1.0, 1.0, 1.0),
            specular_color: Vec3::new(0.0, 0.0, 0.0),
            shininess: 0.0,
        }
    }

    /// Set the ambient color and strength
    pub fn with_ambient(mut self, color: Vec3, strength: f32) -> Self {
        self.ambient_color = color;
        self.ambient_strength = strength;
        self
    }

    /// Set the diffuse color
    pub fn with_diffuse(mut self, color: Vec3) -> Self {
        self.diffuse_color = color;
        self
    }

    /// Set the specular color
    pub fn with_specular(mut self, color: Vec3) -> Self {
        self.specular_color = color;
        self
    }

    /// Set the specular exponent
    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }

    /// Submit the material's five uniform fields to the shader
    ///
    /// There is no atomic material block on the shader side; each field is a
    /// separate named uniform.
    pub fn submit_uniforms(&self, shader: &mut dyn ShaderProgram) {
        shader.set_vec3(uniform::material::AMBIENT_COLOR, self.ambient_color);
        shader.set_float(uniform::material::AMBIENT_STRENGTH, self.ambient_strength);
        shader.set_vec3(uniform::material::DIFFUSE_COLOR, self.diffuse_color);
        shader.set_vec3(uniform::material::SPECULAR_COLOR, self.specular_color);
        shader.set_float(uniform::material::SHININESS, self.shininess);
    }
}

/// Insertion-ordered material registry with first-match tag lookup
///
/// Tags are not required to be unique; the earliest registration wins on
/// lookup.
#[derive(Debug, Default)]
pub struct MaterialRegistry {
    materials: Vec<Material>,
}

impl MaterialRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a material; no uniqueness check, no range validation
    pub fn register(&mut self, material: Material) {
        log::debug!("Registered material {:?}", material.tag);
        self.materials.push(material);
    }

    /// Look up the first material registered under `tag`
    pub fn find(&self, tag: &str) -> Option<&Material> {
        self.materials.iter().find(|material| material.tag == tag)
    }

    /// Number of registered materials
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Whether the registry holds no materials
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Remove every material (scene teardown)
    pub fn clear(&mut self) {
        self.materials.clear();
    }
}
