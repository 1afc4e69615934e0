//! treescribe core — scanning, filtering, and report writing.
//!
//! This crate contains all the logic with no CLI dependencies.
//!
//! # Modules
//!
//! - [`model`] — The scan request and the summary returned from a scan.
//! - [`scanner`] — Directory walk, file filter, and report writer.
//! - [`error`] — Error taxonomy.
pub mod error;
pub mod model;
pub mod scanner;

pub use error::{Result, ScanError};
pub use model::{ExclusionScope, ScanRequest, ScanSummary};
pub use scanner::{scan, scan_to_writer, Scanner};
