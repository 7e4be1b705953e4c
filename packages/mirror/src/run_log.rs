//! Append-only run log.
//!
//! Every per-file and per-directory problem ends up here as one line of the
//! form `<ISO-8601 timestamp>: <message>`. The log is the only place partial
//! failures are reported, so it is inspected after the run.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use chrono::{SecondsFormat, Utc};

use crate::error::MirrorError;

/// Shared writer for the run log file.
#[derive(Debug)]
pub struct RunLog {
    path: PathBuf,
    file: Mutex<File>,
    entries: AtomicU64,
}

impl RunLog {
    /// Open `path` for appending, creating it if needed.
    ///
    /// # Errors
    ///
    /// * If the file cannot be opened
    pub fn open(path: &Path) -> Result<Self, MirrorError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| MirrorError::OpenLog {
                path: path.to_path_buf(),
                io_error: e,
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| MirrorError::OpenLog {
                path: path.to_path_buf(),
                io_error: e,
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
            entries: AtomicU64::new(0),
        })
    }

    /// Path of the log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of lines appended by this run.
    #[must_use]
    pub fn entries(&self) -> u64 {
        self.entries.load(Ordering::SeqCst)
    }

    /// Append one timestamped line.
    pub fn record(&self, message: impl Display) {
        let line = format_line(&Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true), &message);
        log::warn!("{message}");

        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = file.write_all(line.as_bytes()) {
            log::error!("Failed to write to {}: {e}", self.path.display());
            return;
        }
        self.entries.fetch_add(1, Ordering::SeqCst);
    }

    /// Append an error line.
    pub fn error(&self, error: &MirrorError) {
        self.record(error);
    }
}

fn format_line(timestamp: &str, message: &dyn Display) -> String {
    format!("{timestamp}: {message}\n")
}
