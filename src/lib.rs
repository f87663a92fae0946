#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # Filemap - Directory Tree Manifest Generator
//!
//! Filemap walks a directory tree and emits a JSON manifest mapping every
//! directory path to the filenames it directly contains. The manifest is a
//! single-line JSON object written to `output.json` inside a chosen output
//! directory, intended for downstream tooling that needs a cheap description
//! of a source tree's layout.
//!
//! Entries named exactly `.` or exactly `~` are skipped; everything else is
//! recorded in traversal order. No file contents are ever read.
//!
//! ## Architecture
//!
//! - [`cli`]: Command-line argument definitions
//! - [`scanner`]: Recursive directory traversal yielding file entries
//! - [`manifest`]: Manifest accumulation and JSON serialization
//!
//! ## Example Usage
//!
//! ```no_run
//! use filemap::manifest::Manifest;
//! use filemap::scanner;
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut manifest = Manifest::new();
//! for entry in scanner::scan_files(Path::new("src")) {
//!     let entry = entry?;
//!     manifest.record(&entry.directory, entry.filename);
//! }
//! manifest.write_to(Path::new("out"))?;
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions (argument parsing structures).
pub mod cli;

/// Manifest accumulation and JSON output.
pub mod manifest;

/// Recursive directory traversal yielding file entries.
pub mod scanner;

/// Current version of the filemap binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the manifest file written inside the output directory.
pub const OUTPUT_FILE: &str = "output.json";
