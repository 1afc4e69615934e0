//! Serial directory walk using `jwalk`.
//!
//! The walk is depth-first over every directory reachable from the root.
//! Hidden entries are visited and symlinks are not followed: a symlink to a
//! directory is neither descended into nor reported. Sibling order is the
//! filesystem's unless the request asks for sorted traversal.
//!
//! The report file is never listed, even when it lies under the root with
//! an included suffix.
//!
//! Subdirectories that cannot be read are logged, counted, and skipped. The
//! root itself has already been checked by the caller.
use crate::error::{Result, ScanError};
use crate::model::{ScanRequest, ScanSummary};
use crate::scanner::filter::{EntryFilter, Verdict};
use crate::scanner::report::ReportWriter;
use std::ffi::OsStr;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::{debug, warn};

/// Walk `request.root()` and write every accepted file to `report`.
///
/// Returns `ScanError::Cancelled` as soon as `cancel_flag` is observed set;
/// lines already written stay in `report`.
pub fn walk_into<W: Write>(
    request: &ScanRequest,
    filter: &EntryFilter,
    report: &mut ReportWriter<W>,
    cancel_flag: &AtomicBool,
) -> Result<ScanSummary> {
    let start = Instant::now();
    let root = request.root();
    let mut summary = ScanSummary::default();
    // Absent when writing to an arbitrary sink.
    let report_file = fs::canonicalize(request.output()).ok();

    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(request.sorted())
        .parallelism(jwalk::Parallelism::Serial);

    for entry_result in walker {
        if cancel_flag.load(Ordering::Relaxed) {
            debug!("Cancel flag set after {} entries", summary.files_seen);
            return Err(ScanError::Cancelled);
        }

        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                summary.unreadable_entries += 1;
                let err_path = err
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "<unknown>".to_string());
                warn!("Skipping unreadable entry {err_path}: {err}");
                continue;
            }
        };

        // The root itself.
        if entry.depth == 0 {
            continue;
        }

        let file_type = entry.file_type();
        if file_type.is_dir() {
            // jwalk reports a failed listing on the directory entry itself.
            if let Some(err) = &entry.read_children_error {
                summary.unreadable_entries += 1;
                warn!("Skipping unreadable directory {}: {err}", entry.path().display());
            }
            continue;
        }

        let path = entry.path();
        if file_type.is_symlink() && path.is_dir() {
            debug!("Not following directory symlink {}", path.display());
            continue;
        }

        summary.files_seen += 1;

        let relative = match path.strip_prefix(root) {
            Ok(rel) => rel.to_string_lossy().into_owned(),
            Err(_) => {
                warn!("{} is outside {}; skipped", path.display(), root.display());
                continue;
            }
        };
        let file_name = entry.file_name().to_string_lossy();

        if is_report_file(&path, &file_name, report_file.as_deref()) {
            debug!("Not listing the report itself ({relative})");
            continue;
        }

        match filter.classify(&file_name, &relative) {
            Verdict::Include => {
                report
                    .entry(&relative)
                    .map_err(|e| ScanError::io(request.output(), e))?;
                debug!("Matched {relative}");
            }
            Verdict::WrongExtension => summary.skipped_by_extension += 1,
            Verdict::Excluded(idx) => {
                summary.skipped_by_exclusion += 1;
                debug!("Excluded {relative} (pattern {:?})", request.exclusions()[idx]);
            }
        }
    }

    summary.entries_written = report.lines();
    summary.duration = start.elapsed();
    Ok(summary)
}

/// Whether `path` is the report being written. Only canonicalises on a
/// file-name match.
fn is_report_file(path: &Path, file_name: &str, report_file: Option<&Path>) -> bool {
    let Some(report_file) = report_file else {
        return false;
    };
    if report_file.file_name() != Some(OsStr::new(file_name)) {
        return false;
    }
    fs::canonicalize(path).is_ok_and(|p| p == report_file)
}
