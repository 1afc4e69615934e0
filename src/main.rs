//! treescribe — writes a flat report of a Svelte project's structure.
//!
//! Thin binary entry point. All logic lives in the `treescribe-core` crate.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use treescribe_core::model::DEFAULT_REPORT_NAME;
use treescribe_core::{ExclusionScope, ScanRequest};

#[derive(Parser, Debug)]
#[command(name = "treescribe", version)]
#[command(about = "List the .svelte and .css files of a project in a text report")]
struct Cli {
    /// Project directory to scan
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Report file (default: <ROOT>/svelte_structure.txt)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// File suffix to include; repeat to give several (replaces the defaults)
    #[arg(short, long = "extension", value_name = "EXT")]
    extensions: Vec<String>,

    /// Path substring to exclude; repeat to give several (replaces the defaults)
    #[arg(short = 'x', long = "exclude", value_name = "PATTERN")]
    exclusions: Vec<String>,

    /// Start from an empty exclusion list
    #[arg(long)]
    no_default_exclusions: bool,

    /// Test exclusions against the bare file name only
    #[arg(long)]
    filename_only: bool,

    /// Keep filesystem order instead of sorting siblings by name
    #[arg(long)]
    unsorted: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_request(self) -> treescribe_core::Result<ScanRequest> {
        let output = self
            .output
            .unwrap_or_else(|| self.root.join(DEFAULT_REPORT_NAME));

        let mut builder = ScanRequest::builder(self.root, output).sorted(!self.unsorted);
        if !self.extensions.is_empty() {
            builder = builder.extensions(self.extensions);
        }
        if !self.exclusions.is_empty() || self.no_default_exclusions {
            builder = builder.exclusions(self.exclusions);
        }
        if self.filename_only {
            builder = builder.exclusion_scope(ExclusionScope::FileName);
        }
        builder.build()
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialise structured logging on stderr; stdout carries the result line.
    // RUST_LOG, when set, takes precedence over --verbose.
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let request = cli.into_request().context("invalid arguments")?;

    treescribe_core::scan(&request)
        .with_context(|| format!("scan of {} failed", request.root().display()))?;

    println!(
        "Project structure has been written to {}",
        request.output().display()
    );
    Ok(())
}
