//! Resize implementation on top of the `image` crate.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, ImageDecoder, ImageError, ImageReader};

use crate::Transform;
use crate::error::TransformError;

/// Production [`Transform`] backed by the `image` crate.
#[derive(Debug, Clone, Copy)]
pub struct ImageResizer {
    filter: FilterType,
}

impl ImageResizer {
    /// Create a resizer using Lanczos3 resampling.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            filter: FilterType::Lanczos3,
        }
    }
}

impl Default for ImageResizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for ImageResizer {
    fn transform(&self, input: &[u8], target_width: u32) -> Result<Vec<u8>, TransformError> {
        if target_width == 0 {
            return Err(TransformError::InvalidWidth(target_width));
        }

        let reader = ImageReader::new(Cursor::new(input))
            .with_guessed_format()
            .map_err(|e| TransformError::Decode(ImageError::IoError(e)))?;
        let format = reader.format().ok_or(TransformError::UnsupportedFormat)?;

        let mut decoder = reader.into_decoder().map_err(TransformError::Decode)?;
        let orientation = decoder.orientation().map_err(TransformError::Decode)?;
        let mut image = DynamicImage::from_decoder(decoder).map_err(TransformError::Decode)?;

        // Orientation first so the target width applies to the displayed image
        image.apply_orientation(orientation);

        let height = scaled_height(image.width(), image.height(), target_width);
        log::trace!(
            "Resizing {format:?} {}x{} -> {target_width}x{height}",
            image.width(),
            image.height()
        );
        let resized = image.resize_exact(target_width, height, self.filter);

        let mut output = Vec::new();
        resized
            .write_to(&mut Cursor::new(&mut output), format)
            .map_err(TransformError::Encode)?;

        Ok(output)
    }
}

/// Height that keeps the aspect ratio of a `width` x `height` image scaled to
/// `target_width`. Never returns zero.
#[must_use]
pub fn scaled_height(width: u32, height: u32, target_width: u32) -> u32 {
    if width == 0 {
        return height.max(1);
    }

    let scaled =
        (u64::from(height) * u64::from(target_width) + u64::from(width) / 2) / u64::from(width);

    u32::try_from(scaled).unwrap_or(u32::MAX).max(1)
}
