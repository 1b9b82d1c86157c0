//! Scene description and the prepare/render pipeline

pub mod object;
pub mod scene_manager;

pub use object::{SceneDescription, SceneObject, Surface, TextureSource};
pub use scene_manager::SceneManager;

use thiserror::Error;

use crate::render::TextureError;

/// Fatal scene preparation errors
///
/// Individual texture decode failures are logged and skipped (preparation is
/// best-effort); only contract violations such as exceeding texture capacity
/// abort preparation.
#[derive(Error, Debug)]
pub enum SceneError {
    /// Texture registration failed in a way that breaks registry invariants
    #[error("texture registration failed: {0}")]
    Texture(#[from] TextureError),
}
