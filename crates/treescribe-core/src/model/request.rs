//! Scan configuration — the validated, immutable input to a scan.
//!
//! Build one with [`ScanRequest::builder`]; `build()` rejects configurations
//! that could never produce a meaningful report.
use crate::error::{Result, ScanError};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// File suffixes included when the caller does not supply any.
pub const DEFAULT_EXTENSIONS: [&str; 2] = [".svelte", ".css"];

/// Path fragments excluded when the caller does not supply any.
///
/// Order is preserved; the first matching pattern is the one reported in
/// debug logs.
pub const DEFAULT_EXCLUSIONS: [&str; 3] = [
    ".svelte-kit\\generated",
    "node_modules",
    "playwright-core\\lib\\vite",
];

/// Report file name used when only a root is given.
pub const DEFAULT_REPORT_NAME: &str = "svelte_structure.txt";

/// Which string the exclusion patterns are tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExclusionScope {
    /// The path relative to the scan root, e.g. `node_modules/pkg/a.svelte`.
    #[default]
    RelativePath,
    /// Only the bare file name. Directory fragments can never match here.
    FileName,
}

/// Everything a scan needs. Immutable once built.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    root: PathBuf,
    output: PathBuf,
    extensions: BTreeSet<String>,
    exclusions: Vec<String>,
    exclusion_scope: ExclusionScope,
    sorted: bool,
}

impl ScanRequest {
    /// Start building a request for `root`, writing the report to `output`.
    pub fn builder(root: impl Into<PathBuf>, output: impl Into<PathBuf>) -> ScanRequestBuilder {
        ScanRequestBuilder {
            root: root.into(),
            output: output.into(),
            extensions: None,
            exclusions: None,
            exclusion_scope: ExclusionScope::default(),
            sorted: true,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Included suffixes, in lexical order.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }

    /// Exclusion substrings, in the order they were given.
    pub fn exclusions(&self) -> &[String] {
        &self.exclusions
    }

    pub fn exclusion_scope(&self) -> ExclusionScope {
        self.exclusion_scope
    }

    /// Whether siblings are visited in file-name order.
    pub fn sorted(&self) -> bool {
        self.sorted
    }
}

/// Builder for [`ScanRequest`].
#[derive(Debug, Clone)]
pub struct ScanRequestBuilder {
    root: PathBuf,
    output: PathBuf,
    extensions: Option<Vec<String>>,
    exclusions: Option<Vec<String>>,
    exclusion_scope: ExclusionScope,
    sorted: bool,
}

impl ScanRequestBuilder {
    /// Replace the default extension set.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = Some(extensions.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the default exclusion list. An empty list disables exclusion.
    pub fn exclusions<I, S>(mut self, exclusions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclusions = Some(exclusions.into_iter().map(Into::into).collect());
        self
    }

    pub fn exclusion_scope(mut self, scope: ExclusionScope) -> Self {
        self.exclusion_scope = scope;
        self
    }

    /// Visit siblings in file-name order (default) or filesystem order.
    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Validate and freeze the request.
    pub fn build(self) -> Result<ScanRequest> {
        if self.root.as_os_str().is_empty() {
            return Err(ScanError::InvalidRequest("root path is empty".into()));
        }
        if self.output.as_os_str().is_empty() {
            return Err(ScanError::InvalidRequest("output path is empty".into()));
        }

        let extensions: BTreeSet<String> = match self.extensions {
            Some(list) => list.into_iter().collect(),
            None => DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        };
        if extensions.is_empty() {
            return Err(ScanError::InvalidRequest(
                "at least one extension is required".into(),
            ));
        }
        if extensions.iter().any(String::is_empty) {
            return Err(ScanError::InvalidRequest(
                "extensions must not be empty strings".into(),
            ));
        }

        let exclusions = match self.exclusions {
            Some(list) => list,
            None => DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect(),
        };
        // An empty pattern is a substring of every path.
        if exclusions.iter().any(String::is_empty) {
            return Err(ScanError::InvalidRequest(
                "exclusion patterns must not be empty strings".into(),
            ));
        }

        Ok(ScanRequest {
            root: self.root,
            output: self.output,
            extensions,
            exclusions,
            exclusion_scope: self.exclusion_scope,
            sorted: self.sorted,
        })
    }
}
