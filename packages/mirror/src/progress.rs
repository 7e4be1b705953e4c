//! Run state and progress tracking for mirror runs.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::sync::atomic::{AtomicU64, Ordering};

use crate::outcome::ProcessingOutcome;

/// Progress information for a mirror run.
#[derive(Debug, Clone)]
pub struct MirrorProgress {
    /// Number of files discovered so far.
    pub files_total: u64,
    /// Number of files that reached a terminal outcome.
    pub files_processed: u64,
    /// File that triggered this report (if any).
    pub current_file: Option<String>,
}

impl MirrorProgress {
    /// Create a new progress report.
    #[must_use]
    pub const fn new(files_total: u64, files_processed: u64, current_file: Option<String>) -> Self {
        Self {
            files_total,
            files_processed,
            current_file,
        }
    }
}

/// Final tallies of a mirror run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files discovered and dispatched.
    pub total: u64,
    /// Files that reached a terminal outcome.
    pub processed: u64,
    /// Files resized and written.
    pub transformed: u64,
    /// Files copied verbatim, including degraded copies.
    pub copied: u64,
    /// Copies made because the transform failed.
    pub degraded: u64,
    /// Files skipped by name. Not part of `total`.
    pub skipped: u64,
    /// Files that could not be mirrored.
    pub failed: u64,
}

impl RunSummary {
    /// Whether every discovered file reached an outcome.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.processed == self.total
    }
}

/// Counters shared by the walker and every in-flight file.
///
/// The walker bumps the total before dispatching a file, and each file bumps
/// the processed count exactly once, so `processed <= total` holds at every
/// observation.
#[derive(Debug, Default)]
pub struct RunState {
    files_total: AtomicU64,
    files_processed: AtomicU64,
    transformed: AtomicU64,
    copied: AtomicU64,
    degraded: AtomicU64,
    skipped: AtomicU64,
    failed: AtomicU64,
}

impl RunState {
    /// Create a new run state with all counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a newly discovered file. Returns the new total.
    pub fn discovered(&self) -> u64 {
        self.files_total.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Count a file skipped by name.
    pub fn skipped(&self) {
        self.skipped.fetch_add(1, Ordering::SeqCst);
    }

    /// Record an outcome. Returns the processed count afterwards.
    ///
    /// `Skipped` is tallied like [`Self::skipped`]: skipped files were never
    /// discovered, so they leave `processed` alone.
    pub fn record(&self, outcome: &ProcessingOutcome) -> u64 {
        match outcome {
            ProcessingOutcome::Transformed => {
                self.transformed.fetch_add(1, Ordering::SeqCst);
            }
            ProcessingOutcome::Copied { degraded } => {
                self.copied.fetch_add(1, Ordering::SeqCst);
                if *degraded {
                    self.degraded.fetch_add(1, Ordering::SeqCst);
                }
            }
            ProcessingOutcome::Skipped => {
                self.skipped();
                return self.processed();
            }
            ProcessingOutcome::Failed(_) => {
                self.failed.fetch_add(1, Ordering::SeqCst);
            }
        }

        self.files_processed.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Get the current total.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.files_total.load(Ordering::SeqCst)
    }

    /// Get the current processed count.
    #[must_use]
    pub fn processed(&self) -> u64 {
        self.files_processed.load(Ordering::SeqCst)
    }

    /// Get a progress snapshot.
    #[must_use]
    pub fn snapshot(&self, current_file: Option<String>) -> MirrorProgress {
        // Processed first: reading total second can only make it larger
        let processed = self.processed();
        MirrorProgress::new(self.total(), processed, current_file)
    }

    /// Get the tallies recorded so far.
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        let processed = self.processed();
        RunSummary {
            total: self.total(),
            processed,
            transformed: self.transformed.load(Ordering::SeqCst),
            copied: self.copied.load(Ordering::SeqCst),
            degraded: self.degraded.load(Ordering::SeqCst),
            skipped: self.skipped.load(Ordering::SeqCst),
            failed: self.failed.load(Ordering::SeqCst),
        }
    }
}
