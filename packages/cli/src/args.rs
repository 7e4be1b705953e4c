//! CLI argument definitions.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use clap::Parser;
use image_mirror_config::MirrorConfig;

/// CLI arguments for image-mirror.
#[derive(Debug, Parser)]
#[command(
    name = "image-mirror",
    about = "Mirror a directory tree of images, resizing large files and copying the rest",
    version
)]
pub struct Args {
    /// Directory to mirror.
    #[arg(index = 1, default_value = "data")]
    pub source: PathBuf,

    /// Directory to mirror into (created if missing).
    #[arg(index = 2, default_value = "resized")]
    pub dest: PathBuf,

    /// TOML config file with sizeThreshold, targetWidth, skipPrefix, concurrency.
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// File that errors and skipped files are appended to.
    #[arg(long = "log-file", default_value = "error_log.txt")]
    pub log_file: PathBuf,

    /// Resize files larger than this many bytes.
    #[arg(long)]
    pub threshold: Option<u64>,

    /// Width in pixels to resize to.
    #[arg(long)]
    pub width: Option<u32>,

    /// Number of files processed in parallel.
    #[arg(long, short = 'j')]
    pub jobs: Option<usize>,

    /// Disable progress bars (useful for CI environments).
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// Enable verbose output.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Args {
    /// Apply command-line overrides on top of `config`.
    #[must_use]
    pub fn apply_overrides(&self, mut config: MirrorConfig) -> MirrorConfig {
        if let Some(threshold) = self.threshold {
            config.size_threshold = threshold;
        }
        if let Some(width) = self.width {
            config.target_width = width;
        }
        if let Some(jobs) = self.jobs {
            config.concurrency = jobs;
        }
        config
    }

    /// Determine if we should show progress bars.
    #[must_use]
    pub const fn should_show_progress(&self) -> bool {
        !self.no_progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["image-mirror"]);

        assert_eq!(args.source, PathBuf::from("data"));
        assert_eq!(args.dest, PathBuf::from("resized"));
        assert_eq!(args.log_file, PathBuf::from("error_log.txt"));
        assert!(args.should_show_progress());
        assert_eq!(
            args.apply_overrides(MirrorConfig::default()),
            MirrorConfig::default()
        );
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "image-mirror",
            "photos",
            "out",
            "--threshold",
            "1000",
            "--width",
            "320",
            "-j",
            "2",
            "--no-progress",
        ]);

        let config = args.apply_overrides(MirrorConfig::default());

        assert_eq!(args.source, PathBuf::from("photos"));
        assert_eq!(args.dest, PathBuf::from("out"));
        assert_eq!(config.size_threshold, 1000);
        assert_eq!(config.target_width, 320);
        assert_eq!(config.concurrency, 2);
        assert_eq!(config.skip_prefix, "thumb-");
        assert!(!args.should_show_progress());
    }
}
