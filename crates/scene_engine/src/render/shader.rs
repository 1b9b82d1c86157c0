//! Shader program abstraction
//!
//! The engine depends only on a flat named-uniform contract: values are
//! submitted under string names and read by whatever program the backend has
//! active during draw execution. Shader compilation and program switching are
//! backend concerns and never surface here.

use crate::foundation::math::{Mat4, Vec2, Vec3, Vec4};

/// Uniform names consumed by the scene shaders
///
/// These are part of the wire contract with the shader source and must match
/// it exactly.
pub mod uniform {
    /// Model matrix (object space to world space)
    pub const MODEL: &str = "model";

    /// Solid object color, used when texturing is disabled
    pub const OBJECT_COLOR: &str = "objectColor";

    /// Sampler index of the active object texture
    pub const OBJECT_TEXTURE: &str = "objectTexture";

    /// Flag selecting texture sampling over solid color
    pub const USE_TEXTURE: &str = "bUseTexture";

    /// Flag enabling the custom lighting path
    pub const USE_LIGHTING: &str = "bUseLighting";

    /// Texture coordinate multiplier controlling tiling
    pub const UV_SCALE: &str = "UVscale";

    /// Material field uniforms
    pub mod material {
        /// Ambient reflectance color
        pub const AMBIENT_COLOR: &str = "material.ambientColor";
        /// Ambient contribution multiplier
        pub const AMBIENT_STRENGTH: &str = "material.ambientStrength";
        /// Diffuse reflectance color
        pub const DIFFUSE_COLOR: &str = "material.diffuseColor";
        /// Specular reflectance color
        pub const SPECULAR_COLOR: &str = "material.specularColor";
        /// Specular exponent
        pub const SHININESS: &str = "material.shininess";
    }

    /// Indexed light-source uniform names (`lightSources[i].*`)
    pub mod light {
        /// World-space position of light `index`
        pub fn position(index: usize) -> String {
            format!("lightSources[{index}].position")
        }
        /// Ambient color of light `index`
        pub fn ambient(index: usize) -> String {
            format!("lightSources[{index}].ambientC")
        }
        /// Diffuse color of light `index`
        pub fn diffuse(index: usize) -> String {
            format!("lightSources[{index}].diffuseC")
        }
        /// Specular color of light `index`
        pub fn specular(index: usize) -> String {
            format!("lightSources[{index}].specularC")
        }
        /// Focal strength of light `index`
        pub fn focal_strength(index: usize) -> String {
            format!("lightSources[{index}].focalStr")
        }
        /// Specular intensity of light `index`
        pub fn specular_intensity(index: usize) -> String {
            format!("lightSources[{index}].specularInt")
        }
    }
}

/// Named-uniform setter contract implemented by shader backends
///
/// Each setter mutates the active program's uniform state; the next draw call
/// reads that state implicitly. Callers are responsible for invoking the
/// setter sequence immediately before the corresponding draw.
pub trait ShaderProgram {
    /// Submit a 4x4 matrix uniform
    fn set_mat4(&mut self, name: &str, value: &Mat4);

    /// Submit a 4-component vector uniform
    fn set_vec4(&mut self, name: &str, value: Vec4);

    /// Submit a 3-component vector uniform
    fn set_vec3(&mut self, name: &str, value: Vec3);

    /// Submit a 2-component vector uniform
    fn set_vec2(&mut self, name: &str, value: Vec2);

    /// Submit a float uniform
    fn set_float(&mut self, name: &str, value: f32);

    /// Submit an integer uniform
    fn set_int(&mut self, name: &str, value: i32);

    /// Submit a boolean uniform
    fn set_bool(&mut self, name: &str, value: bool);

    /// Submit a 2D sampler index uniform
    ///
    /// `-1` is the sentinel for "no texture resolved"; sampling through it is
    /// a caller error the backend is free to render as undefined output.
    fn set_sampler(&mut self, name: &str, unit: i32);
}
