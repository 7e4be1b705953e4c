//! Mirror a directory tree of images, resizing large files and copying the rest.
//!
//! This crate provides the engine behind `image-mirror`:
//!
//! * Depth-first traversal using `jwalk`, recreating each directory in the
//!   destination before any file inside it is touched
//! * A bounded `rayon` worker pool for per-file processing
//! * Size-based dispatch: files above the threshold go through a
//!   [`Transform`](image_mirror_transform::Transform), the rest are copied
//!   verbatim (reflink when the filesystem supports it)
//! * Automatic fallback to a verbatim copy when a transform fails
//! * An append-only run log and progress callbacks for UI integration
//!
//! # Example
//!
//! ```rust,ignore
//! use image_mirror::{Mirror, RunLog};
//! use image_mirror_config::MirrorConfig;
//! use image_mirror_transform::ImageResizer;
//!
//! let log = RunLog::open(Path::new("error_log.txt"))?;
//! let mirror = Mirror::new(MirrorConfig::default(), ImageResizer::new(), log);
//!
//! let summary = mirror.run(source, target, |progress| {
//!     println!("{}/{} files", progress.files_processed, progress.files_total);
//! })?;
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod copy;
mod error;
mod outcome;
mod processor;
mod progress;
mod run_log;
mod walker;

pub use copy::copy_verbatim;
pub use error::MirrorError;
pub use outcome::{FileEntry, ProcessingOutcome};
pub use processor::FileProcessor;
pub use progress::{MirrorProgress, RunState, RunSummary};
pub use run_log::RunLog;
pub use walker::Mirror;
