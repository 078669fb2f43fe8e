//! Discrepancy evaluator: parsed score vs. the score on file.
//!
//! Raw scales differ - a scanned page out of 20 against a catalog entry
//! out of 100 - so both sides are normalized to percentages before
//! comparing. A small tolerance absorbs rounding on either side.

use crate::models::DiscrepancyStatus;

/// Difference in percentage points treated as agreement.
const TOLERANCE_PCT: f64 = 1.0;

/// Classifies the parsed score against the catalog's recorded score.
///
/// - Any missing value on either side (including a parsed score with no
///   stated max) means nothing can be compared: `NoComparableData`.
/// - A max of zero on either side cannot be normalized: `Unparseable`,
///   never a division fault.
/// - Otherwise percentages within [`TOLERANCE_PCT`] are `Consistent`
///   and anything beyond is `Discrepant` - the signal a caregiver acts
///   on, e.g. a re-grade the teacher never entered.
#[must_use]
pub fn evaluate(
    parsed_score: Option<f64>,
    parsed_max: Option<f64>,
    recorded_score: Option<f64>,
    recorded_max: Option<f64>,
) -> DiscrepancyStatus {
    if parsed_max == Some(0.0) || recorded_max == Some(0.0) {
        return DiscrepancyStatus::Unparseable;
    }

    let (Some(parsed_score), Some(parsed_max), Some(recorded_score), Some(recorded_max)) =
        (parsed_score, parsed_max, recorded_score, recorded_max)
    else {
        return DiscrepancyStatus::NoComparableData;
    };

    let document_pct = parsed_score / parsed_max * 100.0;
    let recorded_pct = recorded_score / recorded_max * 100.0;

    if (document_pct - recorded_pct).abs() <= TOLERANCE_PCT {
        DiscrepancyStatus::Consistent
    } else {
        DiscrepancyStatus::Discrepant {
            document_pct,
            recorded_pct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_matching_scores_consistent() {
        let status = evaluate(Some(42.0), Some(50.0), Some(42.0), Some(50.0));
        assert_eq!(status, DiscrepancyStatus::Consistent);
    }

    #[test]
    fn test_differing_scales_normalized() {
        // 18/20 and 90/100 are the same grade.
        let status = evaluate(Some(18.0), Some(20.0), Some(90.0), Some(100.0));
        assert_eq!(status, DiscrepancyStatus::Consistent);
    }

    #[test]
    fn test_rounding_within_tolerance() {
        // 83.5% vs 84% rounds away on one side; not actionable.
        let status = evaluate(Some(83.5), Some(100.0), Some(84.0), Some(100.0));
        assert_eq!(status, DiscrepancyStatus::Consistent);
    }

    #[test]
    fn test_reference_discrepancy() {
        // 42/50 = 84% on paper vs 45/50 = 90% on file: actionable.
        let status = evaluate(Some(42.0), Some(50.0), Some(45.0), Some(50.0));
        match status {
            DiscrepancyStatus::Discrepant {
                document_pct,
                recorded_pct,
            } => {
                assert!((document_pct - 84.0).abs() < 1e-9);
                assert!((recorded_pct - 90.0).abs() < 1e-9);
            },
            other => panic!("expected Discrepant, got {other:?}"),
        }
    }

    #[test_case(None, None, Some(45.0), Some(50.0); "no parsed score")]
    #[test_case(Some(42.0), None, Some(45.0), Some(50.0); "parsed score without max")]
    #[test_case(Some(42.0), Some(50.0), None, Some(50.0); "nothing recorded yet")]
    fn test_missing_sides(
        ps: Option<f64>,
        pm: Option<f64>,
        rs: Option<f64>,
        rm: Option<f64>,
    ) {
        assert_eq!(evaluate(ps, pm, rs, rm), DiscrepancyStatus::NoComparableData);
    }

    #[test]
    fn test_zero_max_is_unparseable_not_a_fault() {
        let status = evaluate(Some(5.0), Some(0.0), Some(45.0), Some(50.0));
        assert_eq!(status, DiscrepancyStatus::Unparseable);

        // Zero-point catalog assignments exist too.
        let status = evaluate(Some(5.0), Some(10.0), Some(0.0), Some(0.0));
        assert_eq!(status, DiscrepancyStatus::Unparseable);
    }

    #[test]
    fn test_over_credit_compares_normally() {
        // 55/50 on paper vs 110/100 recorded: both 110%, consistent.
        let status = evaluate(Some(55.0), Some(50.0), Some(110.0), Some(100.0));
        assert_eq!(status, DiscrepancyStatus::Consistent);
    }
}
