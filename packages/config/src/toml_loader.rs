//! TOML configuration file loader.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::types::MirrorConfig;

/// Load a TOML configuration file.
///
/// Keys missing from the file keep their defaults.
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// * If the file cannot be read
/// * If the file cannot be parsed as TOML
/// * If the resulting configuration is invalid
pub fn load_toml_config(path: &Path) -> Result<MirrorConfig, ConfigError> {
    log::debug!("Loading TOML config from {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config: MirrorConfig =
        toml::from_str(&content).map_err(|e| ConfigError::TomlParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

    config.validate()?;

    log::debug!("Loaded config: {config:?}");

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_toml_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
sizeThreshold = 1024
targetWidth = 320
skipPrefix = "preview-"
concurrency = 3
"#
        )
        .unwrap();

        let config = load_toml_config(file.path()).unwrap();

        assert_eq!(config.size_threshold, 1024);
        assert_eq!(config.target_width, 320);
        assert_eq!(config.skip_prefix, "preview-");
        assert_eq!(config.concurrency, 3);
    }

    #[test]
    fn test_load_partial_toml_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "targetWidth = 800").unwrap();

        let config = load_toml_config(file.path()).unwrap();

        assert_eq!(config.target_width, 800);
        assert_eq!(config.size_threshold, 600 * 1024);
        assert_eq!(config.skip_prefix, "thumb-");
    }

    #[test]
    fn test_load_invalid_toml_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "targetWidth = \"wide\"").unwrap();

        let result = load_toml_config(file.path());

        assert!(matches!(result, Err(ConfigError::TomlParseError { .. })));
    }

    #[test]
    fn test_load_zero_width_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "targetWidth = 0").unwrap();

        let result = load_toml_config(file.path());

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_toml_config(Path::new("/nonexistent/image-mirror.toml"));

        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }
}
