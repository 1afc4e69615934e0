//! Counters collected during a scan and returned to the caller.
use std::fmt;
use std::time::Duration;

/// Totals for one completed scan.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    /// Non-directory entries visited below the root.
    pub files_seen: u64,
    /// Lines written to the report (excluding the header).
    pub entries_written: u64,
    /// Files dropped because no extension matched.
    pub skipped_by_extension: u64,
    /// Files with a matching extension dropped by an exclusion pattern.
    pub skipped_by_exclusion: u64,
    /// Subdirectories or entries that could not be read and were skipped.
    pub unreadable_entries: u64,
    pub duration: Duration,
}

impl fmt::Display for ScanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} written, {} seen, {} excluded, {} unreadable in {:?}",
            format_count(self.entries_written),
            format_count(self.files_seen),
            format_count(self.skipped_by_exclusion),
            format_count(self.unreadable_entries),
            self.duration,
        )
    }
}

/// Format a count with thousand separators.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let s = count.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
