//! # Scene Engine
//!
//! A small rendering core for static 3D scenes built from primitive meshes,
//! tagged textures, tagged materials, and point lights.
//!
//! The engine owns the scene-preparation and per-frame rendering pipeline:
//! texture registration and unit assignment, material lookup, model-matrix
//! composition, and the uniform submission protocol that ties these together
//! before each mesh draw call. The graphics API itself stays behind three
//! trait seams ([`render::ShaderProgram`], [`render::GraphicsDevice`],
//! [`render::MeshLibrary`]) so the core carries no windowing or GPU-binding
//! dependency.
//!
//! ## Quick Start
//!
//! ```rust
//! use scene_engine::prelude::*;
//! # use scene_engine::render::TextureParams;
//! # struct Device(u64);
//! # impl GraphicsDevice for Device {
//! #     fn create_texture_2d(&mut self, _: &ImageData, _: &TextureParams) -> TextureHandle {
//! #         self.0 += 1;
//! #         TextureHandle(self.0)
//! #     }
//! #     fn bind_texture_unit(&mut self, _: u32, _: TextureHandle) {}
//! #     fn delete_texture(&mut self, _: TextureHandle) {}
//! # }
//! # struct Shader;
//! # impl ShaderProgram for Shader {
//! #     fn set_mat4(&mut self, _: &str, _: &Mat4) {}
//! #     fn set_vec4(&mut self, _: &str, _: Vec4) {}
//! #     fn set_vec3(&mut self, _: &str, _: Vec3) {}
//! #     fn set_vec2(&mut self, _: &str, _: Vec2) {}
//! #     fn set_float(&mut self, _: &str, _: f32) {}
//! #     fn set_int(&mut self, _: &str, _: i32) {}
//! #     fn set_bool(&mut self, _: &str, _: bool) {}
//! #     fn set_sampler(&mut self, _: &str, _: i32) {}
//! # }
//! # struct Meshes;
//! # impl MeshLibrary for Meshes {
//! #     fn load(&mut self, _: ShapeKind) {}
//! #     fn draw(&mut self, _: ShapeKind) {}
//! # }
//!
//! fn main() -> Result<(), SceneError> {
//!     let scene = SceneDescription::new()
//!         .with_material(Material::new("silver"))
//!         .with_object(
//!             SceneObject::new("floor", ShapeKind::Plane)
//!                 .with_color(0.8, 0.8, 0.8, 1.0)
//!                 .with_material("silver"),
//!         );
//!
//!     let (mut device, mut shader, mut meshes) = (Device(0), Shader, Meshes);
//!     let mut manager = SceneManager::new(scene);
//!     manager.prepare_scene(&mut device, &mut shader, &mut meshes)?;
//!     manager.render_scene(&mut shader, &mut meshes);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod assets;
pub mod foundation;
pub mod render;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        assets::{AssetError, ImageData},
        foundation::math::{Mat4, Mat4Ext, Vec2, Vec3, Vec4},
        render::{
            compose_model_matrix, GraphicsDevice, Material, MaterialRegistry, MeshLibrary,
            PointLight, LightingRig, ShaderProgram, ShapeKind, TextureHandle, TextureRegistry,
            TransformParams,
        },
        scene::{SceneDescription, SceneError, SceneManager, SceneObject, Surface, TextureSource},
    };
}
