//! Per-file decision: resize, copy, or give up.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::Path;

use image_mirror_config::MirrorConfig;
use image_mirror_transform::Transform;

use crate::copy::copy_verbatim;
use crate::error::MirrorError;
use crate::outcome::{FileEntry, ProcessingOutcome};
use crate::run_log::RunLog;

/// Mirrors single files from a source tree into a destination tree.
///
/// Every error is written to the run log before it is returned inside
/// [`ProcessingOutcome::Failed`], so callers only need to count outcomes.
pub struct FileProcessor<'a> {
    config: &'a MirrorConfig,
    transform: &'a dyn Transform,
    log: &'a RunLog,
    dest_root: &'a Path,
}

impl<'a> FileProcessor<'a> {
    /// Create a processor writing under `dest_root`.
    #[must_use]
    pub fn new(
        config: &'a MirrorConfig,
        transform: &'a dyn Transform,
        log: &'a RunLog,
        dest_root: &'a Path,
    ) -> Self {
        Self {
            config,
            transform,
            log,
            dest_root,
        }
    }

    /// Process the file at `source`, whose path relative to the source root is
    /// `relative_path`.
    ///
    /// Files above the size threshold are resized; if the resize fails the
    /// file is copied verbatim instead. Everything else is copied verbatim.
    #[must_use]
    pub fn process(&self, source: &Path, relative_path: &Path) -> ProcessingOutcome {
        let metadata = match fs::metadata(source) {
            Ok(metadata) => metadata,
            Err(e) => {
                return self.fail(MirrorError::Stat {
                    path: source.to_path_buf(),
                    io_error: e,
                });
            }
        };

        let entry =
            FileEntry::from_metadata(source.to_path_buf(), relative_path.to_path_buf(), &metadata);
        let target = self.dest_root.join(&entry.relative_path);

        if self.config.exceeds_threshold(entry.size_bytes) {
            self.resize(&entry, &target)
        } else {
            log::trace!(
                "{} is {} bytes, copying",
                entry.absolute_path.display(),
                entry.size_bytes
            );
            match copy_verbatim(&entry.absolute_path, &target) {
                Ok(()) => ProcessingOutcome::Copied { degraded: false },
                Err(e) => self.fail(e),
            }
        }
    }

    fn resize(&self, entry: &FileEntry, target: &Path) -> ProcessingOutcome {
        log::debug!(
            "Resizing {} ({} bytes) to width {}",
            entry.absolute_path.display(),
            entry.size_bytes,
            self.config.target_width
        );

        let input = match fs::read(&entry.absolute_path) {
            Ok(input) => input,
            Err(e) => {
                return self.fail(MirrorError::ReadFile {
                    path: entry.absolute_path.clone(),
                    io_error: e,
                });
            }
        };

        match self.transform.transform(&input, self.config.target_width) {
            Ok(output) => match fs::write(target, output) {
                Ok(()) => ProcessingOutcome::Transformed,
                Err(e) => self.fail(MirrorError::WriteFile {
                    path: target.to_path_buf(),
                    io_error: e,
                }),
            },
            Err(e) => {
                self.log.error(&MirrorError::Transform {
                    path: entry.absolute_path.clone(),
                    source: e,
                });
                match copy_verbatim(&entry.absolute_path, target) {
                    Ok(()) => ProcessingOutcome::Copied { degraded: true },
                    Err(e) => self.fail(e),
                }
            }
        }
    }

    fn fail(&self, error: MirrorError) -> ProcessingOutcome {
        self.log.error(&error);
        ProcessingOutcome::Failed(error)
    }
}
