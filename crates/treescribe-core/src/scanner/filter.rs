//! Per-file inclusion policy.
//!
//! A file is kept when its name ends with one of the configured suffixes
//! (case-sensitive) and the scoped string contains none of the exclusion
//! patterns. `\` and `/` are treated as the same character when matching
//! exclusions, so `.svelte-kit\generated` also matches on Unix.
use crate::model::{ExclusionScope, ScanRequest};

/// Outcome of checking one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Include,
    /// No suffix matched.
    WrongExtension,
    /// A suffix matched but the exclusion at this index hit.
    Excluded(usize),
}

/// Compiled form of the request's filters.
#[derive(Debug, Clone)]
pub struct EntryFilter {
    extensions: Vec<String>,
    /// Exclusion patterns with separators normalised to `/`.
    exclusions: Vec<String>,
    scope: ExclusionScope,
}

impl EntryFilter {
    pub fn from_request(request: &ScanRequest) -> Self {
        Self {
            extensions: request.extensions().map(str::to_owned).collect(),
            exclusions: request
                .exclusions()
                .iter()
                .map(|p| normalise_separators(p))
                .collect(),
            scope: request.exclusion_scope(),
        }
    }

    /// Classify a file by its bare name and its path relative to the root.
    pub fn classify(&self, file_name: &str, relative_path: &str) -> Verdict {
        if !self.extensions.iter().any(|ext| file_name.ends_with(ext.as_str())) {
            return Verdict::WrongExtension;
        }

        let haystack = match self.scope {
            ExclusionScope::RelativePath => normalise_separators(relative_path),
            ExclusionScope::FileName => normalise_separators(file_name),
        };

        match self
            .exclusions
            .iter()
            .position(|pattern| haystack.contains(pattern.as_str()))
        {
            Some(idx) => Verdict::Excluded(idx),
            None => Verdict::Include,
        }
    }
}

fn normalise_separators(s: &str) -> String {
    s.replace('\\', "/")
}
