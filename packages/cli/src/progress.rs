//! Progress bar utilities for the CLI.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::sync::Mutex;

use image_mirror::MirrorProgress;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for a mirror run.
///
/// The total grows while the tree is still being walked, so the bar length is
/// refreshed on every update. Reports arrive from several workers in any order;
/// neither the length nor the position ever moves backwards.
pub struct RunProgress {
    bar: ProgressBar,
    update_lock: Mutex<()>,
}

impl RunProgress {
    /// Create the run progress bar.
    ///
    /// If progress is disabled, the bar is hidden.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        if !enabled {
            return Self::with_bar(ProgressBar::hidden());
        }

        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("|{bar:40.cyan/dim}| {pos}/{len} || {percent}% || time: {elapsed_precise}")
                .expect("Invalid progress bar template")
                .progress_chars("█░"),
        );
        Self::with_bar(bar)
    }

    fn with_bar(bar: ProgressBar) -> Self {
        Self {
            bar,
            update_lock: Mutex::new(()),
        }
    }

    /// Reflect a progress report from the mirror engine.
    pub fn update(&self, progress: &MirrorProgress) {
        if progress.files_total == 0 {
            return;
        }

        let _guard = self
            .update_lock
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if progress.files_total > self.bar.length().unwrap_or(0) {
            self.bar.set_length(progress.files_total);
        }
        if progress.files_processed > self.bar.position() {
            self.bar.set_position(progress.files_processed);
        }
    }

    /// Clear the bar once the run is over.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
