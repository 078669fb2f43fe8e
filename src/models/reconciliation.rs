//! Reconciliation outcome types.
//!
//! This module defines the terminal record produced for every scanned
//! document: the disposition, the chosen catalog match (if any), the
//! score-discrepancy classification (if matched) and the fingerprint.

use super::{CatalogAssignment, ContentFingerprint, ScanId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-component decomposition of a match confidence.
///
/// Each component is already weighted into `[0, weight]`; the combined
/// confidence is their sum.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchBreakdown {
    /// Weighted title-similarity component.
    pub title: f64,
    /// Weighted date-proximity component.
    pub date: f64,
    /// Weighted course-match component.
    pub course: f64,
}

impl MatchBreakdown {
    /// Combined confidence, clamped into `[0, 1]`.
    #[must_use]
    pub fn combined(&self) -> f64 {
        (self.title + self.date + self.course).clamp(0.0, 1.0)
    }
}

/// A catalog assignment paired with its match confidence for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchCandidate {
    /// The candidate assignment.
    pub assignment: CatalogAssignment,
    /// Decomposed scoring components.
    pub breakdown: MatchBreakdown,
    /// Combined weighted confidence in `[0, 1]`.
    pub confidence: f64,
}

/// Classification of the parsed score against the recorded score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DiscrepancyStatus {
    /// One side is missing a score or a max, so nothing can be compared.
    NoComparableData,
    /// Normalized percentages agree within tolerance.
    Consistent,
    /// Normalized percentages differ beyond tolerance. This is the
    /// actionable signal a caregiver should see.
    Discrepant {
        /// Percentage from the scanned document.
        document_pct: f64,
        /// Percentage from the catalog record.
        recorded_pct: f64,
    },
    /// A stated max of zero makes the score impossible to normalize.
    Unparseable,
}

impl fmt::Display for DiscrepancyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoComparableData => write!(f, "no_comparable_data"),
            Self::Consistent => write!(f, "consistent"),
            Self::Discrepant {
                document_pct,
                recorded_pct,
            } => write!(f, "discrepant ({document_pct:.1}% vs {recorded_pct:.1}%)"),
            Self::Unparseable => write!(f, "unparseable"),
        }
    }
}

/// Terminal classification of one reconciliation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    /// A unique candidate cleared the confidence threshold.
    AutoMatched,
    /// A best candidate exists but needs a human decision.
    NeedsReview,
    /// No candidates at all.
    Unmatched,
    /// The document's fingerprint was already on record.
    Duplicate,
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AutoMatched => write!(f, "auto_matched"),
            Self::NeedsReview => write!(f, "needs_review"),
            Self::Unmatched => write!(f, "unmatched"),
            Self::Duplicate => write!(f, "duplicate"),
        }
    }
}

/// The terminal record for one scanned document.
///
/// Created exactly once per input and immutable afterwards. The
/// orchestrator hands it to the persistence collaborator and discards
/// every intermediate value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationResult {
    /// The scan this result belongs to.
    pub scan_id: ScanId,
    /// Terminal disposition.
    pub disposition: Disposition,
    /// The chosen candidate, present for `AutoMatched` and for
    /// `NeedsReview` when at least one candidate existed.
    pub candidate: Option<MatchCandidate>,
    /// Lower-ranked candidates kept as suggestions for manual review.
    pub runners_up: Vec<MatchCandidate>,
    /// Score-discrepancy classification, present whenever a candidate is.
    pub discrepancy: Option<DiscrepancyStatus>,
    /// Fingerprint of the document bytes.
    pub fingerprint: ContentFingerprint,
}

impl ReconciliationResult {
    /// Creates a `Duplicate` result. Matching is skipped entirely for
    /// duplicates, so there is never a candidate or discrepancy.
    #[must_use]
    pub const fn duplicate(scan_id: ScanId, fingerprint: ContentFingerprint) -> Self {
        Self {
            scan_id,
            disposition: Disposition::Duplicate,
            candidate: None,
            runners_up: Vec::new(),
            discrepancy: None,
            fingerprint,
        }
    }

    /// Creates an `Unmatched` result for a document with no candidates.
    #[must_use]
    pub const fn unmatched(scan_id: ScanId, fingerprint: ContentFingerprint) -> Self {
        Self {
            scan_id,
            disposition: Disposition::Unmatched,
            candidate: None,
            runners_up: Vec::new(),
            discrepancy: None,
            fingerprint,
        }
    }

    /// Creates a matched result (`AutoMatched` or `NeedsReview`).
    #[must_use]
    pub const fn matched(
        scan_id: ScanId,
        disposition: Disposition,
        candidate: MatchCandidate,
        runners_up: Vec<MatchCandidate>,
        discrepancy: DiscrepancyStatus,
        fingerprint: ContentFingerprint,
    ) -> Self {
        Self {
            scan_id,
            disposition,
            candidate: Some(candidate),
            runners_up,
            discrepancy: Some(discrepancy),
            fingerprint,
        }
    }

    /// Reclassifies this result as a duplicate, dropping the match.
    ///
    /// Used by batch reconciliation when an identical document committed
    /// earlier in the same batch wins the race.
    #[must_use]
    pub fn into_duplicate(self) -> Self {
        Self::duplicate(self.scan_id, self.fingerprint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fp() -> ContentFingerprint {
        ContentFingerprint::from_hex("deadbeef")
    }

    #[test]
    fn test_duplicate_result_carries_no_match() {
        let result = ReconciliationResult::duplicate(ScanId::from("s1"), fp());
        assert_eq!(result.disposition, Disposition::Duplicate);
        assert!(result.candidate.is_none());
        assert!(result.discrepancy.is_none());
    }

    #[test]
    fn test_into_duplicate_drops_match() {
        let result = ReconciliationResult::unmatched(ScanId::from("s2"), fp()).into_duplicate();
        assert_eq!(result.disposition, Disposition::Duplicate);
        assert_eq!(result.scan_id, ScanId::from("s2"));
    }

    #[test]
    fn test_breakdown_combined_clamps() {
        let breakdown = MatchBreakdown {
            title: 0.5,
            date: 0.3,
            course: 0.2,
        };
        assert!((breakdown.combined() - 1.0).abs() < f64::EPSILON);

        let overflow = MatchBreakdown {
            title: 0.9,
            date: 0.9,
            course: 0.9,
        };
        assert!((overflow.combined() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_disposition_display() {
        assert_eq!(Disposition::AutoMatched.to_string(), "auto_matched");
        assert_eq!(Disposition::NeedsReview.to_string(), "needs_review");
        assert_eq!(Disposition::Unmatched.to_string(), "unmatched");
        assert_eq!(Disposition::Duplicate.to_string(), "duplicate");
    }

    #[test]
    fn test_discrepancy_display() {
        let status = DiscrepancyStatus::Discrepant {
            document_pct: 84.0,
            recorded_pct: 90.0,
        };
        assert_eq!(status.to_string(), "discrepant (84.0% vs 90.0%)");
        assert_eq!(DiscrepancyStatus::Consistent.to_string(), "consistent");
    }
}
