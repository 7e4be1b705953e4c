//! Tree walking and dispatch onto the worker pool.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::{Path, PathBuf};

use image_mirror_config::MirrorConfig;
use image_mirror_transform::Transform;

use crate::error::MirrorError;
use crate::processor::FileProcessor;
use crate::progress::{MirrorProgress, RunState, RunSummary};
use crate::run_log::RunLog;

/// Mirrors a source tree into a destination tree.
pub struct Mirror<T: Transform> {
    config: MirrorConfig,
    transform: T,
    log: RunLog,
}

impl<T: Transform> Mirror<T> {
    /// Create a mirror that records problems in `log`.
    #[must_use]
    pub fn new(config: MirrorConfig, transform: T, log: RunLog) -> Self {
        Self {
            config,
            transform,
            log,
        }
    }

    /// The configuration driving this mirror.
    #[must_use]
    pub const fn config(&self) -> &MirrorConfig {
        &self.config
    }

    /// The run log.
    #[must_use]
    pub const fn log(&self) -> &RunLog {
        &self.log
    }

    /// Mirror `source_root` into `dest_root`.
    ///
    /// The tree is walked depth-first on the calling thread. Each destination
    /// directory is created before any file inside it is dispatched, and files
    /// are processed on a pool of `config.concurrency` workers. Returns once
    /// every dispatched file has reached an outcome.
    ///
    /// # Arguments
    ///
    /// * `source_root` - Directory to mirror
    /// * `dest_root` - Directory to mirror into (created if missing)
    /// * `on_progress` - Callback for progress updates, called on every discovery and completion
    ///
    /// # Errors
    ///
    /// * If the destination root cannot be created
    /// * If the worker pool cannot be started
    pub fn run<F>(
        &self,
        source_root: &Path,
        dest_root: &Path,
        on_progress: F,
    ) -> Result<RunSummary, MirrorError>
    where
        F: Fn(&MirrorProgress) + Sync,
    {
        log::debug!(
            "Mirroring {} -> {}",
            source_root.display(),
            dest_root.display()
        );

        fs::create_dir_all(dest_root).map_err(|e| MirrorError::CreateDestRoot {
            path: dest_root.to_path_buf(),
            io_error: e,
        })?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.concurrency)
            .thread_name(|i| format!("image-mirror-{i}"))
            .build()?;

        let state = RunState::new();

        if let Err(e) = fs::read_dir(source_root) {
            self.log.error(&MirrorError::ReadDir {
                path: source_root.to_path_buf(),
                message: e.to_string(),
            });
            return Ok(state.summary());
        }

        let processor = FileProcessor::new(&self.config, &self.transform, &self.log, dest_root);

        pool.in_place_scope(|scope| {
            self.walk(source_root, dest_root, &state, |source, relative| {
                state.discovered();
                on_progress(&state.snapshot(None));

                let (state, processor, on_progress) = (&state, &processor, &on_progress);
                scope.spawn(move |_| {
                    let outcome = processor.process(&source, &relative);
                    log::debug!("{}: {outcome}", relative.display());
                    state.record(&outcome);
                    on_progress(&state.snapshot(Some(relative.to_string_lossy().to_string())));
                });
            });
        });

        let summary = state.summary();
        log::debug!("Run finished: {summary:?}");

        Ok(summary)
    }

    /// Walk `source_root`, creating directories under `dest_root` and handing
    /// every regular, non-skipped file to `dispatch`.
    fn walk<D>(&self, source_root: &Path, dest_root: &Path, state: &RunState, mut dispatch: D)
    where
        D: FnMut(PathBuf, PathBuf),
    {
        let walker = jwalk::WalkDir::new(source_root)
            .skip_hidden(false)
            .follow_links(false)
            .sort(true)
            .parallelism(jwalk::Parallelism::Serial);

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    // The unreadable subtree is dropped, siblings carry on
                    self.log.error(&MirrorError::ReadDir {
                        path: e
                            .path()
                            .map_or_else(|| source_root.to_path_buf(), Path::to_path_buf),
                        message: e.to_string(),
                    });
                    continue;
                }
            };

            let source_path = entry.path();
            if source_path == source_root {
                continue;
            }

            let Ok(relative) = source_path.strip_prefix(source_root) else {
                continue;
            };
            let relative = relative.to_path_buf();
            let file_type = entry.file_type();

            if file_type.is_dir() {
                self.enter_directory(
                    &source_path,
                    &dest_root.join(&relative),
                    entry.read_children_error.as_ref().map(ToString::to_string),
                );
                continue;
            }

            if !file_type.is_file() {
                log::trace!("Ignoring {}: not a regular file", source_path.display());
                continue;
            }

            if self
                .config
                .is_skipped_name(&entry.file_name().to_string_lossy())
            {
                self.log.record(format_args!(
                    "Skipping processing for thumbnail: {}",
                    source_path.display()
                ));
                state.skipped();
                continue;
            }

            dispatch(source_path, relative);
        }
    }

    /// Create the destination for a source directory and log a failed read of
    /// its children. The walker yields nothing below an unreadable directory.
    fn enter_directory(&self, source_path: &Path, target: &Path, read_error: Option<String>) {
        if let Err(e) = fs::create_dir_all(target) {
            self.log.error(&MirrorError::CreateDir {
                path: target.to_path_buf(),
                io_error: e,
            });
        }

        if let Some(message) = read_error {
            self.log.error(&MirrorError::ReadDir {
                path: source_path.to_path_buf(),
                message,
            });
        }
    }
}
