//! Scanner module — walks a project tree and writes the structure report.
//!
//! - [`filter`] decides which files belong in the report.
//! - [`report`] owns the text format.
//! - [`walk`] drives the `jwalk` traversal.
//!
//! The report sink is opened once, before traversal, and dropped when the
//! call returns on every path. Each call is independent.
pub mod filter;
pub mod report;
pub mod walk;

use crate::error::{Result, ScanError};
use crate::model::{ScanRequest, ScanSummary};
use filter::EntryFilter;
use report::ReportWriter;

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

/// Runs scans, optionally observing a cancel flag shared with the caller.
#[derive(Debug, Default, Clone)]
pub struct Scanner {
    cancel_flag: Arc<AtomicBool>,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an externally owned cancel flag (e.g. one set from a signal handler).
    pub fn with_cancel_flag(cancel_flag: Arc<AtomicBool>) -> Self {
        Self { cancel_flag }
    }

    /// Request the running scan to stop as soon as possible.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::Relaxed)
    }

    /// Scan `request.root()` and write the report to `request.output()`.
    ///
    /// The root is checked before the output is created, so a bad root
    /// leaves no file behind. The output is created (or truncated) before
    /// any directory is read.
    pub fn run(&self, request: &ScanRequest) -> Result<ScanSummary> {
        check_root(request.root())?;

        let file =
            File::create(request.output()).map_err(|e| ScanError::io(request.output(), e))?;
        self.write_report(request, BufWriter::new(file))
    }

    /// Same as [`Scanner::run`] but writes to `writer`. The request's output
    /// path is only used in error messages and logs.
    pub fn run_to_writer<W: Write>(&self, request: &ScanRequest, writer: W) -> Result<ScanSummary> {
        check_root(request.root())?;
        self.write_report(request, writer)
    }

    fn write_report<W: Write>(&self, request: &ScanRequest, writer: W) -> Result<ScanSummary> {
        info!(
            "Scanning {} for {:?}",
            request.root().display(),
            request.extensions().collect::<Vec<_>>()
        );

        let filter = EntryFilter::from_request(request);
        let mut report =
            ReportWriter::start(writer).map_err(|e| ScanError::io(request.output(), e))?;

        let outcome = walk::walk_into(request, &filter, &mut report, &self.cancel_flag);
        // Flush even when the walk stopped early so partial output is kept.
        let flushed = report.finish();

        let summary = outcome?;
        flushed.map_err(|e| ScanError::io(request.output(), e))?;

        info!("Report {} complete: {summary}", request.output().display());
        Ok(summary)
    }
}

/// Scan with a fresh [`Scanner`], writing to the request's output file.
pub fn scan(request: &ScanRequest) -> Result<ScanSummary> {
    Scanner::new().run(request)
}

/// Scan with a fresh [`Scanner`], writing to `writer`.
pub fn scan_to_writer<W: Write>(request: &ScanRequest, writer: W) -> Result<ScanSummary> {
    Scanner::new().run_to_writer(request, writer)
}

/// Fail with `Filesystem` unless `root` is a readable directory.
fn check_root(root: &Path) -> Result<()> {
    let meta = fs::metadata(root).map_err(|e| ScanError::filesystem(root, e))?;
    if !meta.is_dir() {
        return Err(ScanError::filesystem(
            root,
            io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        ));
    }
    fs::read_dir(root).map_err(|e| ScanError::filesystem(root, e))?;
    Ok(())
}
