//! Configuration types for image-mirror.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Files strictly larger than this many bytes are resized.
pub const DEFAULT_SIZE_THRESHOLD: u64 = 600 * 1024;

/// Width in pixels that resized images are scaled to.
pub const DEFAULT_TARGET_WIDTH: u32 = 500;

/// File name prefix marking derived artifacts that are never mirrored.
pub const DEFAULT_SKIP_PREFIX: &str = "thumb-";

/// Tunable parameters for a mirror run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MirrorConfig {
    /// Size in bytes above which a file is transformed instead of copied.
    pub size_threshold: u64,

    /// Target width in pixels for transformed images.
    pub target_width: u32,

    /// Files whose name starts with this prefix are skipped.
    pub skip_prefix: String,

    /// Maximum number of files processed at the same time.
    pub concurrency: usize,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            size_threshold: DEFAULT_SIZE_THRESHOLD,
            target_width: DEFAULT_TARGET_WIDTH,
            skip_prefix: DEFAULT_SKIP_PREFIX.to_string(),
            concurrency: num_cpus::get(),
        }
    }
}

impl MirrorConfig {
    /// Check that the configuration can drive a run.
    ///
    /// # Errors
    ///
    /// * If `target_width` is zero
    /// * If `concurrency` is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_width == 0 {
            return Err(ConfigError::Invalid(
                "targetWidth must be greater than zero".to_string(),
            ));
        }
        if self.concurrency == 0 {
            return Err(ConfigError::Invalid(
                "concurrency must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether a file with this name is a derived artifact that must be skipped.
    #[must_use]
    pub fn is_skipped_name(&self, file_name: &str) -> bool {
        !self.skip_prefix.is_empty() && file_name.starts_with(&self.skip_prefix)
    }

    /// Whether a file of `size_bytes` should be transformed.
    #[must_use]
    pub const fn exceeds_threshold(&self, size_bytes: u64) -> bool {
        size_bytes > self.size_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MirrorConfig::default();

        assert_eq!(config.size_threshold, 614_400);
        assert_eq!(config.target_width, 500);
        assert_eq!(config.skip_prefix, "thumb-");
        assert!(config.concurrency >= 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_threshold_boundary() {
        let config = MirrorConfig::default();

        assert!(!config.exceeds_threshold(600 * 1024));
        assert!(config.exceeds_threshold(600 * 1024 + 1));
        assert!(!config.exceeds_threshold(0));
    }

    #[test]
    fn test_skip_prefix() {
        let config = MirrorConfig::default();

        assert!(config.is_skipped_name("thumb-avatar.png"));
        assert!(!config.is_skipped_name("avatar-thumb-.png"));
        assert!(!config.is_skipped_name("photo.jpg"));
    }

    #[test]
    fn test_empty_skip_prefix_skips_nothing() {
        let config = MirrorConfig {
            skip_prefix: String::new(),
            ..MirrorConfig::default()
        };

        assert!(!config.is_skipped_name("thumb-avatar.png"));
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let zero_width = MirrorConfig {
            target_width: 0,
            ..MirrorConfig::default()
        };
        assert!(matches!(zero_width.validate(), Err(ConfigError::Invalid(_))));

        let zero_jobs = MirrorConfig {
            concurrency: 0,
            ..MirrorConfig::default()
        };
        assert!(matches!(zero_jobs.validate(), Err(ConfigError::Invalid(_))));
    }
}
