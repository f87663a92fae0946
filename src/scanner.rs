//! Directory scanner producing (directory, filename) pairs.
//!
//! The scanner walks the input tree top-down and yields one [`FileEntry`]
//! per regular file, skipping entries named exactly `.` or exactly `~`.
//! Directories are always recursed into; sibling order follows the
//! underlying directory-listing order, not sorted.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// A single file observed during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Directory directly containing the file, rooted at the scanned path.
    pub directory: PathBuf,
    /// Name of the file within that directory.
    pub filename: String,
}

/// Check whether a file name is excluded from the manifest.
///
/// Exclusion is exact string equality on the name, never pattern matching.
fn is_excluded(name: &str) -> bool {
    name == "." || name == "~"
}

/// Walk `root` recursively and yield a [`FileEntry`] for every qualifying
/// file, top-down, lazily.
///
/// The caller is responsible for checking that `root` exists and is a
/// directory before invoking; a bad root surfaces as `Err` items from the
/// walk itself.
///
/// # Errors
///
/// Individual items are `Err` when a directory entry cannot be read
/// (e.g. permission denied partway through the tree).
pub fn scan_files(root: &Path) -> impl Iterator<Item = Result<FileEntry>> + '_ {
    let root_display = root.display().to_string();

    WalkDir::new(root).into_iter().filter_map(move |entry| {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                return Some(Err(anyhow::Error::new(e).context(format!(
                    "Failed to read directory entry under {root_display}"
                ))));
            }
        };

        if !entry.file_type().is_file() {
            return None;
        }

        let filename = entry.file_name().to_string_lossy().into_owned();
        if is_excluded(&filename) {
            debug!(name = %filename, "Skipping excluded entry");
            return None;
        }

        let directory = entry
            .path()
            .parent()
            .unwrap_or(root)
            .to_path_buf();

        Some(Ok(FileEntry {
            directory,
            filename,
        }))
    })
}

/// Collect every qualifying file entry under `root`.
///
/// Convenience wrapper over [`scan_files`] that materializes the lazy walk,
/// propagating the first traversal error.
///
/// # Errors
///
/// Returns an error if any directory entry cannot be read.
pub fn collect_files(root: &Path) -> Result<Vec<FileEntry>> {
    scan_files(root)
        .collect::<Result<Vec<_>>>()
        .with_context(|| format!("Failed to scan {}", root.display()))
}
