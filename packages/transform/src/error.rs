//! Error types for image transforms.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error;

/// Errors that can occur while transforming an image.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The input bytes are not in a recognised image format.
    #[error("Unsupported image format")]
    UnsupportedFormat,

    /// The input could not be decoded.
    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    /// The resized image could not be encoded.
    #[error("Failed to encode image: {0}")]
    Encode(#[source] image::ImageError),

    /// The requested width cannot be produced.
    #[error("Invalid target width: {0}")]
    InvalidWidth(u32),
}
