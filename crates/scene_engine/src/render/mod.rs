//! # Rendering Core
//!
//! This module provides the rendering-side building blocks of the engine:
//! the trait seams over the graphics API ([`ShaderProgram`],
//! [`GraphicsDevice`], [`MeshLibrary`]), the tag-indexed resource registries
//! ([`TextureRegistry`], [`MaterialRegistry`]), point-light state
//! ([`LightingRig`]) and model-matrix composition ([`compose_model_matrix`]).
//!
//! ## Architecture
//!
//! Uniform and texture-unit state on the graphics side is process-wide
//! mutable state. Every operation that mutates it takes the shader or device
//! explicitly by reference so that ordering dependencies stay visible in
//! signatures rather than hiding behind ambient globals.

pub mod device;
pub mod lighting;
pub mod materials;
pub mod mesh_library;
pub mod shader;
pub mod texture;
pub mod transform;

pub use device::{FilterMode, GraphicsDevice, TextureHandle, TextureParams, WrapMode};
pub use lighting::{LightingRig, PointLight, MAX_LIGHTS};
pub use materials::{Material, MaterialRegistry};
pub use mesh_library::{MeshLibrary, ShapeKind};
pub use shader::{uniform, ShaderProgram};
pub use texture::{TextureError, TextureRegistry, TextureSlot, MAX_TEXTURE_UNITS};
pub use transform::{compose_model_matrix, submit_model_matrix, TransformParams};
