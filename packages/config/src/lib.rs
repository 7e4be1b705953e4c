//! Configuration for image-mirror.
//!
//! A run is driven by a [`MirrorConfig`]: the size threshold above which files
//! are resized, the target width, the skip prefix for derived artifacts, and the
//! worker count. Every field has a documented default and may be overridden by
//! a TOML file.
//!
//! # Example
//!
//! ```rust,ignore
//! use image_mirror_config::{MirrorConfig, load_toml_config};
//!
//! let config = match config_path {
//!     Some(path) => load_toml_config(&path)?,
//!     None => MirrorConfig::default(),
//! };
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod toml_loader;
mod types;

pub use error::ConfigError;
pub use toml_loader::load_toml_config;
pub use types::{
    DEFAULT_SIZE_THRESHOLD, DEFAULT_SKIP_PREFIX, DEFAULT_TARGET_WIDTH, MirrorConfig,
};
