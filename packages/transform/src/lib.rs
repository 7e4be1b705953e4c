//! Image resizing capability for image-mirror.
//!
//! The mirror engine only needs one thing from an image library: turn the
//! bytes of an image into the bytes of a narrower one. That capability is the
//! [`Transform`] trait, and [`ImageResizer`] implements it on top of the
//! `image` crate:
//!
//! * Format detection by content sniffing (file extensions are ignored)
//! * EXIF orientation applied before resizing
//! * Aspect-preserving resize to the requested width (Lanczos3)
//! * Re-encoding in the same format as the input
//!
//! # Example
//!
//! ```rust,ignore
//! use image_mirror_transform::{ImageResizer, Transform};
//!
//! let resized = ImageResizer::new().transform(&bytes, 500)?;
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod resize;

pub use error::TransformError;
pub use resize::{ImageResizer, scaled_height};

/// Capability that converts image bytes into resized image bytes.
pub trait Transform: Send + Sync {
    /// Resize `input` to `target_width` pixels wide, normalizing orientation.
    ///
    /// # Errors
    ///
    /// * If `input` is malformed or in an unsupported format
    /// * If the result cannot be encoded
    fn transform(&self, input: &[u8], target_width: u32) -> Result<Vec<u8>, TransformError>;
}
