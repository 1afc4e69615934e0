//! Data model for a scan: the request going in and the summary coming out.
pub mod request;
pub mod summary;

pub use request::{
    ExclusionScope, ScanRequest, ScanRequestBuilder, DEFAULT_EXCLUSIONS, DEFAULT_EXTENSIONS,
    DEFAULT_REPORT_NAME,
};
pub use summary::{format_count, ScanSummary};
