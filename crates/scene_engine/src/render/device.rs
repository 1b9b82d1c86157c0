//! Graphics device abstraction for texture resources
//!
//! Texture upload, unit binding and deletion are graphics-API calls; the
//! registry only needs this narrow seam over them.

use crate::assets::ImageData;

/// Handle to a texture resource stored in the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// Texture filtering modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Nearest neighbor filtering
    Nearest,
    /// Linear filtering
    Linear,
}

/// Texture wrapping modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    /// Repeat the texture
    Repeat,
    /// Mirror the texture
    MirroredRepeat,
    /// Clamp to edge
    ClampToEdge,
}

/// Texture creation parameters
#[derive(Debug, Clone)]
pub struct TextureParams {
    /// Texture filtering mode
    pub filter_mode: FilterMode,
    /// Texture wrapping mode
    pub wrap_mode: WrapMode,
    /// Generate mipmaps
    pub generate_mipmaps: bool,
}

impl Default for TextureParams {
    fn default() -> Self {
        Self {
            filter_mode: FilterMode::Linear,
            wrap_mode: WrapMode::Repeat,
            generate_mipmaps: true,
        }
    }
}

/// Texture-resource operations implemented by graphics backends
///
/// Unit bindings are global rendering state on the backend side; the caller
/// sequences these operations on the thread owning the graphics context.
pub trait GraphicsDevice {
    /// Upload a decoded image as a 2D texture and return its handle
    ///
    /// The image is guaranteed by the caller to have 3 or 4 channels.
    fn create_texture_2d(&mut self, image: &ImageData, params: &TextureParams) -> TextureHandle;

    /// Bind a texture handle to the numbered texture unit
    fn bind_texture_unit(&mut self, unit: u32, handle: TextureHandle);

    /// Release a texture resource
    fn delete_texture(&mut self, handle: TextureHandle);
}
