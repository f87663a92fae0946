use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use filemap::cli::Cli;
use filemap::manifest::Manifest;
use filemap::scanner;
use std::fs;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(output_dir) = cli.output_dir else {
        anyhow::bail!("output directory is required");
    };

    if !output_dir.is_dir() {
        fs::create_dir_all(&output_dir).with_context(|| {
            format!(
                "Failed to create output directory: {}",
                output_dir.display()
            )
        })?;
    }

    let input_dir = cli
        .input_dir
        .filter(|path| path.is_dir())
        .ok_or_else(|| {
            anyhow::anyhow!("input directory does not exist, or is not a directory")
        })?;

    debug!(input = %input_dir.display(), "Scanning input tree");

    let mut manifest = Manifest::new();
    for entry in scanner::scan_files(&input_dir) {
        let entry = entry?;
        manifest.record(&entry.directory, entry.filename);
    }

    // Emptiness is only knowable after the walk has been fully consumed,
    // so the check runs against the accumulated manifest.
    if manifest.is_empty() {
        anyhow::bail!("no files in the given input directory");
    }

    manifest.write_to(&output_dir)?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("filemap=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
