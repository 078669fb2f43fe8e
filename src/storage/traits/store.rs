//! Scan store trait.

use crate::Result;
use crate::models::{ContentFingerprint, RawScanInput, ReconciliationResult, StudentId};
use std::collections::HashSet;

/// Durable record of reconciliation outcomes.
///
/// The store is also the source of truth for duplicate detection: the
/// known-fingerprint set is fetched fresh for every reconciliation pass
/// and passed to the detector explicitly, so the core itself holds no
/// ambient state between documents.
pub trait ScanStore: Send + Sync {
    /// Records a finished reconciliation together with the scan's
    /// metadata.
    ///
    /// # Errors
    ///
    /// Implementations with a fingerprint uniqueness constraint reject a
    /// non-duplicate result whose fingerprint is already recorded for
    /// the student.
    fn record(
        &self,
        student: &StudentId,
        result: &ReconciliationResult,
        scan: &RawScanInput,
    ) -> Result<()>;

    /// Returns all fingerprints previously recorded for a student.
    fn known_fingerprints(&self, student: &StudentId) -> Result<HashSet<ContentFingerprint>>;
}
