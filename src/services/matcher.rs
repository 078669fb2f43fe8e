//! Assignment matcher: ranks catalog candidates for a parsed document.
//!
//! Per-candidate confidence is a weighted sum of three components:
//! title similarity (0.5), due-date proximity (0.3) and course match
//! (0.2). An absent parsed field contributes zero to its component but
//! never excludes a candidate - a score-only scan can still be matched
//! by a reviewer from the suggestions.

use super::similarity::similarity;
use crate::config::MatcherConfig;
use crate::models::{CatalogAssignment, MatchBreakdown, MatchCandidate, ParsedFields};
use tracing::instrument;

/// Confidences closer than this are a tie. Floating-point dust must not
/// decide which of two equally plausible assignments gets auto-assigned.
const TIE_EPSILON: f64 = 1e-6;

/// What the ranked candidate list supports doing automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchDecision {
    /// No candidates at all; the document is unmatched.
    NoCandidates,
    /// The top candidate cleared the threshold and is uniquely best.
    AutoMatch,
    /// A best candidate exists but a human has to confirm it: either it
    /// is below threshold, or it ties with another candidate.
    Review,
}

/// Matches parsed documents against catalog assignments.
///
/// # Example
///
/// ```rust,ignore
/// let matcher = AssignmentMatcher::new(MatcherConfig::default());
/// let ranked = matcher.rank(&parsed, &candidates);
/// if matcher.select(&ranked) == MatchDecision::AutoMatch {
///     println!("matched {}", ranked[0].assignment.title);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct AssignmentMatcher {
    config: MatcherConfig,
}

/// 1.0 at an exact due-date hit, linearly decaying to 0.0 at the
/// tolerance boundary, 0.0 beyond it.
#[allow(clippy::cast_precision_loss)] // day counts are tiny
fn date_proximity(parsed: chrono::NaiveDate, due: chrono::NaiveDate, tolerance_days: i64) -> f64 {
    let gap = (parsed - due).num_days().abs();
    if gap > tolerance_days {
        return 0.0;
    }
    1.0 - gap as f64 / tolerance_days as f64
}

impl AssignmentMatcher {
    /// Creates a matcher with the given weights and thresholds.
    #[must_use]
    pub const fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// Scores every candidate and returns them ordered by descending
    /// confidence. Ties break toward the earlier due date: earlier work
    /// is more likely to be the oldest unmatched item. Empty input
    /// yields empty output, never an error.
    #[instrument(skip(self, parsed, candidates), fields(candidate_count = candidates.len()))]
    #[must_use]
    pub fn rank(
        &self,
        parsed: &ParsedFields,
        candidates: &[CatalogAssignment],
    ) -> Vec<MatchCandidate> {
        let mut ranked: Vec<MatchCandidate> = candidates
            .iter()
            .map(|assignment| self.score_candidate(parsed, assignment))
            .collect();

        ranked.sort_by(|a, b| {
            b.confidence
                .total_cmp(&a.confidence)
                .then_with(|| match (a.assignment.due_date, b.assignment.due_date) {
                    (Some(da), Some(db)) => da.cmp(&db),
                    (Some(_), None) => std::cmp::Ordering::Less,
                    (None, Some(_)) => std::cmp::Ordering::Greater,
                    (None, None) => std::cmp::Ordering::Equal,
                })
                .then_with(|| a.assignment.id.as_str().cmp(b.assignment.id.as_str()))
        });
        ranked
    }

    /// Decides what the ranked list supports. Auto-match requires the
    /// top candidate to clear the threshold AND be strictly uniquely
    /// best; two candidates tied at or above the threshold both surface
    /// for review so a silent misassignment cannot happen.
    #[must_use]
    pub fn select(&self, ranked: &[MatchCandidate]) -> MatchDecision {
        let Some(best) = ranked.first() else {
            return MatchDecision::NoCandidates;
        };
        if best.confidence < self.config.auto_match_threshold {
            return MatchDecision::Review;
        }
        let tied_with_next = ranked
            .get(1)
            .is_some_and(|second| best.confidence - second.confidence < TIE_EPSILON);
        if tied_with_next {
            return MatchDecision::Review;
        }
        MatchDecision::AutoMatch
    }

    fn score_candidate(
        &self,
        parsed: &ParsedFields,
        assignment: &CatalogAssignment,
    ) -> MatchCandidate {
        let title = parsed
            .title
            .as_ref()
            .map_or(0.0, |t| similarity(&t.value, &assignment.title));

        let date = match (parsed.date.as_ref(), assignment.due_date) {
            (Some(parsed_date), Some(due)) => {
                date_proximity(parsed_date.value, due, self.config.date_tolerance_days)
            },
            _ => 0.0,
        };

        let course = parsed.course_name.as_ref().map_or(0.0, |hint| {
            if hint.value.eq_ignore_ascii_case(&assignment.course_name) {
                1.0
            } else {
                0.0
            }
        });

        let breakdown = MatchBreakdown {
            title: title * self.config.title_weight,
            date: date * self.config.date_weight,
            course: course * self.config.course_weight,
        };
        MatchCandidate {
            assignment: assignment.clone(),
            confidence: breakdown.combined(),
            breakdown,
        }
    }
}
