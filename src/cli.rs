//! Command-line interface definitions for filemap.
//!
//! Argument parsing structures using clap's derive macros.
//!
//! Note: Field-level documentation is provided via clap attributes, so we
//! allow missing_docs for this module to avoid redundant documentation.

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use clap::Parser;
use std::path::PathBuf;

/// Main CLI structure for filemap.
///
/// Both directory options are optional at the parser level: the tool performs
/// its own validation so that a missing option exits with status 1 and a
/// plain message rather than clap's usage error (status 2).
#[derive(Parser, Debug)]
#[command(
    name = "filemap",
    version = crate::VERSION,
    about = "Emit a JSON manifest of a directory tree's file layout",
    long_about = "Walks a directory tree and writes output.json mapping each \
                  directory to the files it directly contains"
)]
pub struct Cli {
    /// Directory to which the file map will be emitted (created if missing)
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Directory tree to scan
    #[arg(short = 'i', long, value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_short_flags() {
        let cli = Cli::parse_from(["filemap", "-o", "out", "-i", "in"]);
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
        assert_eq!(cli.input_dir, Some(PathBuf::from("in")));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_flags_are_optional_to_the_parser() {
        // Required-in-practice validation happens in run(), not here.
        let cli = Cli::parse_from(["filemap"]);
        assert_eq!(cli.output_dir, None);
        assert_eq!(cli.input_dir, None);
    }

    #[test]
    fn test_parses_long_flags_and_verbose() {
        let cli = Cli::parse_from(["filemap", "--output-dir", "o", "--input-dir", "i", "-v"]);
        assert_eq!(cli.output_dir, Some(PathBuf::from("o")));
        assert_eq!(cli.input_dir, Some(PathBuf::from("i")));
        assert!(cli.verbose);
    }
}
