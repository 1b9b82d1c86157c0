//! Tagged texture registry with texture-unit assignment
//!
//! Textures are registered once during scene preparation and looked up by
//! string tag at draw time. A slot's position in the registry doubles as the
//! texture unit it is bound to, so registration order determines sampler
//! indices.

use std::path::Path;

use thiserror::Error;

use crate::assets::{AssetError, ImageData};
use crate::render::device::{GraphicsDevice, TextureHandle, TextureParams};

/// Hardware ceiling on simultaneously bound scene textures
pub const MAX_TEXTURE_UNITS: usize = 16;

/// Texture registry errors
#[derive(Error, Debug)]
pub enum TextureError {
    /// The image file could not be read or decoded
    #[error("failed to load texture image: {0}")]
    Load(#[from] AssetError),

    /// The decoded image is neither 3- nor 4-channel color
    #[error("unsupported channel count {channels} in texture image {path}")]
    UnsupportedChannels {
        /// Offending image path
        path: String,
        /// Channel count found in the decoded image
        channels: u8,
    },

    /// All texture units are already occupied
    #[error("texture capacity exceeded: at most {max} textures may be registered")]
    CapacityExceeded {
        /// The enforced unit ceiling
        max: usize,
    },

    /// The tag is already registered
    #[error("texture tag {0:?} is already registered")]
    DuplicateTag(String),
}

/// A populated registry entry: tag plus the backend resource it names
#[derive(Debug, Clone)]
pub struct TextureSlot {
    /// Lookup tag
    pub tag: String,
    /// Backend texture resource
    pub handle: TextureHandle,
}

/// Registry mapping string tags to texture resources and units
///
/// Slot index equals texture unit. Tags are unique among registered slots.
#[derive(Debug, Default)]
pub struct TextureRegistry {
    slots: Vec<TextureSlot>,
}

impl TextureRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode an image file and register it under `tag`
    ///
    /// Only 3- and 4-channel images are accepted; anything else is rejected
    /// without consuming a slot. The uploaded texture uses the default
    /// filtered, mipmapped, wrap-repeating parameters.
    pub fn register<P: AsRef<Path>>(
        &mut self,
        device: &mut dyn GraphicsDevice,
        path: P,
        tag: &str,
    ) -> Result<(), TextureError> {
        let path_ref = path.as_ref();

        if self.slots.len() >= MAX_TEXTURE_UNITS {
            return Err(TextureError::CapacityExceeded {
                max: MAX_TEXTURE_UNITS,
            });
        }
        if self.find_unit(tag).is_some() {
            return Err(TextureError::DuplicateTag(tag.to_string()));
        }

        let image = ImageData::from_file(path_ref)?;
        if image.channels != 3 && image.channels != 4 {
            return Err(TextureError::UnsupportedChannels {
                path: path_ref.display().to_string(),
                channels: image.channels,
            });
        }

        let handle = device.create_texture_2d(&image, &TextureParams::default());
        log::info!(
            "Registered texture {:?} from {:?} on unit {}",
            tag,
            path_ref,
            self.slots.len()
        );
        self.slots.push(TextureSlot {
            tag: tag.to_string(),
            handle,
        });

        Ok(())
    }

    /// Register an already-decoded image under `tag`
    ///
    /// Same contract as [`register`](Self::register) minus the file access;
    /// useful for embedded and procedurally generated textures.
    pub fn register_image(
        &mut self,
        device: &mut dyn GraphicsDevice,
        image: &ImageData,
        tag: &str,
    ) -> Result<(), TextureError> {
        if self.slots.len() >= MAX_TEXTURE_UNITS {
            return Err(TextureError::CapacityExceeded {
                max: MAX_TEXTURE_UNITS,
            });
        }
        if self.find_unit(tag).is_some() {
            return Err(TextureError::DuplicateTag(tag.to_string()));
        }
        if image.channels != 3 && image.channels != 4 {
            return Err(TextureError::UnsupportedChannels {
                path: format!("<memory image {:?}>", tag),
                channels: image.channels,
            });
        }

        let handle = device.create_texture_2d(image, &TextureParams::default());
        log::info!(
            "Registered texture {:?} on unit {}",
            tag,
            self.slots.len()
        );
        self.slots.push(TextureSlot {
            tag: tag.to_string(),
            handle,
        });

        Ok(())
    }

    /// Bind every registered texture to the unit numbered by its slot index
    ///
    /// Unit bindings are global backend state; call once after registration
    /// and before any draw that samples a texture. Calling again reproduces
    /// the same bindings.
    pub fn bind_all(&self, device: &mut dyn GraphicsDevice) {
        for (unit, slot) in self.slots.iter().enumerate() {
            device.bind_texture_unit(unit as u32, slot.handle);
        }
        log::debug!("Bound {} texture(s) to texture units", self.slots.len());
    }

    /// Look up the texture unit assigned to `tag` (first match)
    pub fn find_unit(&self, tag: &str) -> Option<u32> {
        self.slots
            .iter()
            .position(|slot| slot.tag == tag)
            .map(|index| index as u32)
    }

    /// Look up the backend handle registered under `tag` (first match)
    pub fn find_handle(&self, tag: &str) -> Option<TextureHandle> {
        self.slots
            .iter()
            .find(|slot| slot.tag == tag)
            .map(|slot| slot.handle)
    }

    /// Release every texture resource and clear the registry
    pub fn release_all(&mut self, device: &mut dyn GraphicsDevice) {
        for slot in self.slots.drain(..) {
            device.delete_texture(slot.handle);
        }
    }

    /// Number of registered textures
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the registry holds no textures
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate over the registered slots in unit order
    pub fn slots(&self) -> impl Iterator<Item = &TextureSlot> {
        self.slots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Device double that hands out sequential handles and records bindings
    #[derive(Default)]
    struct RecordingDevice {
        next_handle: u64,
        bindings: Vec<(u32, TextureHandle)>,
        deleted: Vec<TextureHandle>,
    }

    impl GraphicsDevice for RecordingDevice {
        fn create_texture_2d(
            &mut self,
            _image: &ImageData,
            _params: &TextureParams,
        ) -> TextureHandle {
            self.next_handle += 1;
            TextureHandle(self.next_handle)
        }

        fn bind_texture_unit(&mut self, unit: u32, handle: TextureHandle) {
            self.bindings.push((unit, handle));
        }

        fn delete_texture(&mut self, handle: TextureHandle) {
            self.deleted.push(handle);
        }
    }

    fn rgb_image() -> ImageData {
        ImageData {
            data: vec![0; 4 * 4 * 3],
            width: 4,
            height: 4,
            channels: 3,
        }
    }

    fn gray_image() -> ImageData {
        ImageData {
            data: vec![0; 4 * 4],
            width: 4,
            height: 4,
            channels: 1,
        }
    }

    #[test]
    fn test_register_assigns_sequential_units() {
        let mut device = RecordingDevice::default();
        let mut registry = TextureRegistry::new();

        for tag in ["pot", "gold", "rustic"] {
            registry
                .register_image(&mut device, &rgb_image(), tag)
                .unwrap();
        }

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.find_unit("pot"), Some(0));
        assert_eq!(registry.find_unit("gold"), Some(1));
        assert_eq!(registry.find_unit("rustic"), Some(2));
        assert!(registry.find_handle("gold").is_some());
        assert_eq!(registry.find_unit("missing"), None);
        assert_eq!(registry.find_handle("missing"), None);
    }

    #[test]
    fn test_rgba_image_accepted() {
        let mut device = RecordingDevice::default();
        let mut registry = TextureRegistry::new();

        registry
            .register_image(&mut device, &ImageData::solid_color(2, 2, [1, 2, 3, 4]), "rgba")
            .unwrap();

        let unit = registry.find_unit("rgba").unwrap();
        assert!((unit as usize) < MAX_TEXTURE_UNITS);
    }

    #[test]
    fn test_unsupported_channel_count_rejected() {
        let mut device = RecordingDevice::default();
        let mut registry = TextureRegistry::new();

        let err = registry
            .register_image(&mut device, &gray_image(), "gray")
            .unwrap_err();

        assert!(matches!(
            err,
            TextureError::UnsupportedChannels { channels: 1, .. }
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_capacity_enforced() {
        let mut device = RecordingDevice::default();
        let mut registry = TextureRegistry::new();

        for i in 0..MAX_TEXTURE_UNITS {
            registry
                .register_image(&mut device, &rgb_image(), &format!("tex{i}"))
                .unwrap();
        }
        let err = registry
            .register_image(&mut device, &rgb_image(), "one-too-many")
            .unwrap_err();

        assert!(matches!(err, TextureError::CapacityExceeded { max: 16 }));
        assert_eq!(registry.len(), MAX_TEXTURE_UNITS);
    }

    #[test]
    fn test_duplicate_tag_rejected() {
        let mut device = RecordingDevice::default();
        let mut registry = TextureRegistry::new();

        registry
            .register_image(&mut device, &rgb_image(), "pot")
            .unwrap();
        let err = registry
            .register_image(&mut device, &rgb_image(), "pot")
            .unwrap_err();

        assert!(matches!(err, TextureError::DuplicateTag(_)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_bind_all_is_idempotent() {
        let mut device = RecordingDevice::default();
        let mut registry = TextureRegistry::new();

        registry
            .register_image(&mut device, &rgb_image(), "a")
            .unwrap();
        registry
            .register_image(&mut device, &rgb_image(), "b")
            .unwrap();

        registry.bind_all(&mut device);
        let first: Vec<_> = device.bindings.clone();
        registry.bind_all(&mut device);
        let second = device.bindings[first.len()..].to_vec();

        assert_eq!(first, second);
        assert_eq!(first, vec![(0, TextureHandle(1)), (1, TextureHandle(2))]);
    }

    #[test]
    fn test_release_all_deletes_every_handle() {
        let mut device = RecordingDevice::default();
        let mut registry = TextureRegistry::new();

        registry
            .register_image(&mut device, &rgb_image(), "a")
            .unwrap();
        registry
            .register_image(&mut device, &rgb_image(), "b")
            .unwrap();
        registry.release_all(&mut device);

        assert!(registry.is_empty());
        assert_eq!(device.deleted, vec![TextureHandle(1), TextureHandle(2)]);
    }

    #[test]
    fn test_missing_file_reports_load_error() {
        let mut device = RecordingDevice::default();
        let mut registry = TextureRegistry::new();

        let err = registry
            .register(&mut device, "no/such/file.png", "ghost")
            .unwrap_err();

        assert!(matches!(err, TextureError::Load(_)));
        assert!(registry.is_empty());
    }
}
