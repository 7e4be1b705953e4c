//! image-mirror CLI entry point.
//!
//! Mirrors a directory tree of images into another directory, resizing files
//! above a size threshold and copying everything else verbatim.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod args;
mod output;
mod progress;

use std::env;
use std::path::{Path, PathBuf};

use clap::Parser;
use path_clean::PathClean;

use args::Args;
use image_mirror::{Mirror, RunLog};
use image_mirror_config::{MirrorConfig, load_toml_config};
use image_mirror_transform::ImageResizer;
use progress::RunProgress;

fn main() {
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        // SAFETY: We're setting this before any other threads are spawned
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    pretty_env_logger::init();

    if let Err(e) = run(&args) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Main application logic.
fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = env::current_dir()?;
    let source = absolute(&cwd, &args.source);
    let dest = absolute(&cwd, &args.dest);
    let log_path = absolute(&cwd, &args.log_file);

    let config = match &args.config {
        Some(path) => load_toml_config(&absolute(&cwd, path))?,
        None => MirrorConfig::default(),
    };
    let config = args.apply_overrides(config);
    config.validate()?;

    log::debug!("Using config: {config:?}");

    output::print_header("Image Mirror");
    output::print_paths(&source, &dest);

    let log = RunLog::open(&log_path)?;
    let mirror = Mirror::new(config, ImageResizer::new(), log);

    let progress = RunProgress::new(args.should_show_progress());
    let summary = mirror.run(&source, &dest, |p| progress.update(p))?;
    progress.finish();

    output::print_summary(&summary);

    let entries = mirror.log().entries();
    if entries > 0 {
        output::print_log_notice(mirror.log().path(), entries);
    }

    output::print_success(summary.processed);
    Ok(())
}

/// Resolve `path` against `cwd` and normalize it.
fn absolute(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.clean()
    } else {
        cwd.join(path).clean()
    }
}
