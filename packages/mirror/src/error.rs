//! Error types for mirror runs.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use image_mirror_transform::TransformError;

/// Errors that can occur while mirroring a tree.
///
/// Only [`MirrorError::CreateDestRoot`], [`MirrorError::OpenLog`] and
/// [`MirrorError::ThreadPool`] end a run. Everything else is recorded in the
/// run log and attached to the file's outcome.
#[derive(Debug, thiserror::Error)]
pub enum MirrorError {
    /// Failed to read a source directory.
    #[error("Failed to read directory {}: {message}", path.display())]
    ReadDir {
        /// The directory path.
        path: PathBuf,
        /// Error message from the walker.
        message: String,
    },

    /// Failed to create a destination directory.
    #[error("Failed to create directory {}: {io_error}", path.display())]
    CreateDir {
        /// The directory path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Failed to create the destination root.
    #[error("Failed to create destination root {}: {io_error}", path.display())]
    CreateDestRoot {
        /// The destination root.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Failed to get file metadata.
    #[error("Failed to get metadata for {}: {io_error}", path.display())]
    Stat {
        /// The file path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Failed to read a source file.
    #[error("Failed to read {}: {io_error}", path.display())]
    ReadFile {
        /// The file path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Failed to write transformed bytes.
    #[error("Failed to write {}: {io_error}", path.display())]
    WriteFile {
        /// The target path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Failed to copy a file.
    #[error("Failed to copy {} to {}: {io_error}", source_path.display(), target_path.display())]
    FileCopy {
        /// Source file path.
        source_path: PathBuf,
        /// Target file path.
        target_path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// The image transform rejected a file.
    #[error("Failed to process {}: {source}", path.display())]
    Transform {
        /// The source file path.
        path: PathBuf,
        /// The transform error.
        #[source]
        source: TransformError,
    },

    /// Failed to open the run log.
    #[error("Failed to open log file {}: {io_error}", path.display())]
    OpenLog {
        /// The log file path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Failed to start the worker pool.
    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
