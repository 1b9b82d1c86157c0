//! Asset loading for scene preparation

pub mod image_loader;

pub use image_loader::ImageData;

use thiserror::Error;

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset not found
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Failed to decode asset data
    #[error("Failed to decode asset: {0}")]
    Decode(#[from] image::ImageError),

    /// IO error during asset loading
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
