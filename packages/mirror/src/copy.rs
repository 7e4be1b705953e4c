//! Verbatim file copies.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::Path;

use crate::error::MirrorError;

/// Copy `source` to `target` byte for byte, replacing any existing target.
///
/// Tries a reflink first (copy-on-write, instant on APFS/Btrfs/ReFS) and falls
/// back to a regular copy. The parent of `target` must already exist.
///
/// # Errors
///
/// * If the copy operation fails
pub fn copy_verbatim(source: &Path, target: &Path) -> Result<(), MirrorError> {
    // Reflink refuses to replace an existing file
    if !target.exists() && reflink_copy::reflink(source, target).is_ok() {
        log::trace!("Reflinked {} -> {}", source.display(), target.display());
        return Ok(());
    }

    fs::copy(source, target).map_err(|e| MirrorError::FileCopy {
        source_path: source.to_path_buf(),
        target_path: target.to_path_buf(),
        io_error: e,
    })?;
    log::trace!("Copied {} -> {}", source.display(), target.display());

    Ok(())
}
