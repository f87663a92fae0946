//! Manifest accumulation and JSON output.
//!
//! The [`Manifest`] maps each visited directory path to the list of
//! qualifying filenames it directly contains. Keys appear in first-seen
//! order and filename lists preserve traversal order; `serde_json`'s
//! `preserve_order` feature keeps the serialized object in the same order.
//!
//! A directory only gains a key once a qualifying file is recorded for it,
//! so directories containing nothing but subdirectories (or only excluded
//! entries) never appear in the output.

use crate::OUTPUT_FILE;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// In-memory file map built from one traversal, serialized once per run.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Manifest {
    /// Directory path -> filenames, in insertion order.
    entries: Map<String, Value>,
}

impl Manifest {
    /// Create a new empty manifest.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Map::new(),
        }
    }

    /// Record a file observed as a direct child of `directory`.
    ///
    /// Creates the directory's entry on first sight; filenames accumulate
    /// in the order they are recorded.
    pub fn record(&mut self, directory: &Path, filename: String) {
        let key = directory.to_string_lossy().into_owned();
        let entry = self
            .entries
            .entry(key)
            .or_insert_with(|| Value::Array(Vec::new()));
        // Entries are only ever created as arrays above.
        if let Value::Array(files) = entry {
            files.push(Value::String(filename));
        }
    }

    /// Whether no files were recorded at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of directories holding at least one qualifying file.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Serialize the manifest as a compact single-line JSON object.
    ///
    /// Non-ASCII characters are emitted verbatim (UTF-8), not escaped.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize manifest")
    }

    /// Write the manifest to `output.json` inside `output_dir`, overwriting
    /// any existing file, and return the path written.
    ///
    /// `fs::write` opens, writes, and closes the file within one call, so
    /// the handle is released on every exit path.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write itself fails.
    pub fn write_to(&self, output_dir: &Path) -> Result<PathBuf> {
        let output_path = output_dir.join(OUTPUT_FILE);
        let json = self.to_json()?;

        fs::write(&output_path, json).with_context(|| {
            format!("Failed to write manifest to {}", output_path.display())
        })?;

        debug!(
            path = %output_path.display(),
            directories = self.len(),
            "Wrote file map"
        );
        Ok(output_path)
    }
}
