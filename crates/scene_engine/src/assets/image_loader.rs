//! Image loading utilities for texture data
//!
//! Provides PNG, JPEG, BMP and other image format loading for use with the
//! texture registry. Unlike a general-purpose loader this one preserves the
//! source channel count: the registry only accepts 3- and 4-channel images,
//! so forcing everything to RGBA here would mask caller errors.

use std::path::Path;

use image::GenericImageView;

use crate::assets::AssetError;

/// Decoded image data ready for GPU upload
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Raw pixel data, tightly packed rows, bottom row first
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of color channels in the source image (1, 2, 3 or 4)
    pub channels: u8,
}

impl ImageData {
    /// Load an image from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();

        log::debug!("Loading image from: {:?}", path_ref);

        if !path_ref.exists() {
            return Err(AssetError::NotFound(path_ref.display().to_string()));
        }

        let img = image::open(path_ref)?;
        let loaded = Self::from_dynamic(img);

        log::info!(
            "Loaded image {}x{} ({} channels) from {:?}",
            loaded.width,
            loaded.height,
            loaded.channels,
            path_ref
        );

        Ok(loaded)
    }

    /// Load an image from memory (useful for embedded resources and tests)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes)?;
        let loaded = Self::from_dynamic(img);

        log::debug!(
            "Loaded image {}x{} ({} channels) from memory",
            loaded.width,
            loaded.height,
            loaded.channels
        );

        Ok(loaded)
    }

    /// Create a solid color RGBA image (useful for testing and defaults)
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixel_count = (width * height) as usize;
        let mut data = Vec::with_capacity(pixel_count * 4);

        for _ in 0..pixel_count {
            data.extend_from_slice(&color);
        }

        Self {
            data,
            width,
            height,
            channels: 4,
        }
    }

    /// Get the size of the image data in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    // Texture coordinates put v = 0 at the bottom edge while image files store
    // the top row first, hence the vertical flip before extracting pixels.
    fn from_dynamic(img: image::DynamicImage) -> Self {
        let img = img.flipv();
        let (width, height) = img.dimensions();
        let channels = img.color().channel_count();

        let (data, channels) = match channels {
            1 => (img.to_luma8().into_raw(), 1),
            2 => (img.to_luma_alpha8().into_raw(), 2),
            3 => (img.to_rgb8().into_raw(), 3),
            _ => (img.to_rgba8().into_raw(), 4),
        };

        Self {
            data,
            width,
            height,
            channels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode_png(img: image::DynamicImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .expect("png encoding failed");
        bytes
    }

    #[test]
    fn test_rgb_image_keeps_three_channels() {
        let img = image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            4,
            2,
            image::Rgb([10, 20, 30]),
        ));
        let loaded = ImageData::from_bytes(&encode_png(img)).unwrap();

        assert_eq!(loaded.width, 4);
        assert_eq!(loaded.height, 2);
        assert_eq!(loaded.channels, 3);
        assert_eq!(loaded.size_bytes(), 4 * 2 * 3);
    }

    #[test]
    fn test_grayscale_image_keeps_one_channel() {
        let img = image::DynamicImage::ImageLuma8(image::GrayImage::from_pixel(
            2,
            2,
            image::Luma([128]),
        ));
        let loaded = ImageData::from_bytes(&encode_png(img)).unwrap();

        assert_eq!(loaded.channels, 1);
        assert_eq!(loaded.size_bytes(), 4);
    }

    #[test]
    fn test_vertical_flip_on_load() {
        let mut img = image::RgbImage::from_pixel(1, 2, image::Rgb([0, 0, 0]));
        img.put_pixel(0, 0, image::Rgb([255, 0, 0])); // top row red
        let loaded =
            ImageData::from_bytes(&encode_png(image::DynamicImage::ImageRgb8(img))).unwrap();

        // After the flip the bottom row comes first, so red lands at the end
        assert_eq!(&loaded.data[0..3], &[0, 0, 0]);
        assert_eq!(&loaded.data[3..6], &[255, 0, 0]);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = ImageData::from_file("does/not/exist.png").unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
    }

    #[test]
    fn test_solid_color_image() {
        let img = ImageData::solid_color(4, 4, [255, 0, 0, 255]);
        assert_eq!(img.width, 4);
        assert_eq!(img.height, 4);
        assert_eq!(img.channels, 4);
        assert_eq!(img.size_bytes(), 4 * 4 * 4);
        assert_eq!(&img.data[0..4], &[255, 0, 0, 255]);
    }
}
