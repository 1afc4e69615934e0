//! Report format: a fixed header, a blank line, then one `- <path>` line
//! per matched file. No trailing summary.
use std::io::{self, Write};

/// First line of every report.
pub const REPORT_HEADER: &str = "Svelte Project Structure:";

/// Line-oriented writer over any sink.
pub struct ReportWriter<W: Write> {
    inner: W,
    lines: u64,
}

impl<W: Write> ReportWriter<W> {
    /// Write the header and return a writer ready for entries.
    pub fn start(mut inner: W) -> io::Result<Self> {
        write!(inner, "{REPORT_HEADER}\n\n")?;
        Ok(Self { inner, lines: 0 })
    }

    pub fn entry(&mut self, relative_path: &str) -> io::Result<()> {
        writeln!(self.inner, "- {relative_path}")?;
        self.lines += 1;
        Ok(())
    }

    /// Number of entry lines written so far.
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Flush and hand back the sink.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
