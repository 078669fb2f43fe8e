//! Data models for homeroom.
//!
//! This module contains all the core data structures used throughout the
//! reconciliation pipeline.

mod catalog;
mod fields;
mod fingerprint;
mod reconciliation;
mod scan;

pub use catalog::{
    AssignmentId, CatalogAssignment, CourseId, DateWindow, StudentId, StudentProfile,
    SubmissionStatus,
};
pub use fields::{Detected, ExtractionRule, ParsedFields, ScoreValue};
pub use fingerprint::ContentFingerprint;
pub use reconciliation::{
    DiscrepancyStatus, Disposition, MatchBreakdown, MatchCandidate, ReconciliationResult,
};
pub use scan::{ExtractedText, RawScanInput, ScanId, ScanSource, TextRegion};
