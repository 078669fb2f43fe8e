//! # Homeroom
//!
//! Reconciles scanned schoolwork with course-management records.
//!
//! A caregiver tracks a child's schoolwork from two sources that disagree:
//! the remote course-management service (authoritative but incomplete) and
//! photographed physical papers whose grading is known only to the paper
//! itself. Homeroom turns raw OCR text from a scanned document into
//! structured fields, detects duplicate submissions, matches the document
//! to the correct catalog assignment with a confidence score, and surfaces
//! discrepancies between the handwritten score and the score on file.
//!
//! ## Pipeline
//!
//! 1. **Field parsing** - scores, dates, titles and name hints extracted
//!    from the OCR text blob by an ordered table of pattern rules
//! 2. **Duplicate detection** - SHA-256 fingerprint of the file bytes
//!    checked against previously recorded fingerprints
//! 3. **Assignment matching** - candidates ranked by weighted title, date
//!    and course similarity
//! 4. **Discrepancy evaluation** - parsed score compared to the recorded
//!    score over normalized percentages
//! 5. **Reconciliation** - exactly one terminal disposition per document
//!
//! ## Example
//!
//! ```rust,ignore
//! use homeroom::{ReconcileService, HomeroomConfig};
//!
//! let service = ReconcileService::new(catalog, store, HomeroomConfig::default());
//! let result = service.reconcile(&student_id, &scan, &extracted)?;
//! println!("{}", result.disposition);
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

// Module declarations
pub mod cli;
pub mod config;
pub mod models;
pub mod observability;
pub mod ocr;
pub mod services;
pub mod storage;

// Re-exports for convenience
pub use config::{HomeroomConfig, MatcherConfig, ParserConfig};
pub use models::{
    CatalogAssignment, ContentFingerprint, DiscrepancyStatus, Disposition, ExtractedText,
    MatchCandidate, ParsedFields, RawScanInput, ReconciliationResult, ScanSource,
};
pub use ocr::OcrProvider;
pub use services::{AssignmentMatcher, FieldParser, ReconcileService};
pub use storage::{AssignmentCatalog, ScanStore};

/// Error type for homeroom operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
///
/// Parse ambiguity is deliberately NOT an error: a pattern that fails to
/// match yields an absent optional field and the document falls back to a
/// conservative disposition. Errors are reserved for input the pipeline
/// structurally cannot process and for collaborator I/O failures.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Empty scan bytes, malformed catalog fixture, bad config values |
/// | `OperationFailed` | Catalog fetch fails, store write fails, OCR gives up |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - A scan input has no bytes
    /// - A catalog or config file fails to deserialize
    /// - Matcher weights do not sum to 1.0
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - The assignment catalog collaborator returns an error
    /// - The scan store rejects or fails a write
    /// - OCR extraction fails permanently (or transiently past the retry)
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for homeroom operations.
pub type Result<T> = std::result::Result<T, Error>;
