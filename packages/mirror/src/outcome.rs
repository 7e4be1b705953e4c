//! Per-file data: what the walker found and what became of it.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs::Metadata;
use std::path::PathBuf;

use crate::error::MirrorError;

/// A stat'ed entry of the source tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path of the entry in the source tree.
    pub absolute_path: PathBuf,
    /// Path relative to the source root (also the path under the destination root).
    pub relative_path: PathBuf,
    /// Size in bytes at stat time.
    pub size_bytes: u64,
    /// Whether the entry is a directory.
    pub is_directory: bool,
}

impl FileEntry {
    /// Build an entry from metadata read from `absolute_path`.
    #[must_use]
    pub fn from_metadata(
        absolute_path: PathBuf,
        relative_path: PathBuf,
        metadata: &Metadata,
    ) -> Self {
        Self {
            absolute_path,
            relative_path,
            size_bytes: metadata.len(),
            is_directory: metadata.is_dir(),
        }
    }
}

/// Terminal classification of one file's processing attempt.
#[derive(Debug)]
pub enum ProcessingOutcome {
    /// The file was resized and the result written.
    Transformed,
    /// The file was copied verbatim.
    Copied {
        /// `true` when the copy replaced a failed transform.
        degraded: bool,
    },
    /// The file was not touched.
    Skipped,
    /// The file could not be mirrored.
    Failed(MirrorError),
}

impl std::fmt::Display for ProcessingOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transformed => write!(f, "resized"),
            Self::Copied { degraded: false } => write!(f, "copied"),
            Self::Copied { degraded: true } => write!(f, "copied (resize failed)"),
            Self::Skipped => write!(f, "skipped"),
            Self::Failed(e) => write!(f, "failed: {e}"),
        }
    }
}
