//! Score and letter-grade extraction rules.

use super::patterns::{
    BARE_LETTER_REGEX, FRACTION_SCORE_REGEX, LABELED_FRACTION_REGEX, LABELED_LETTER_REGEX,
    LABELED_SCORE_REGEX, PERCENT_SCORE_REGEX,
};
use crate::models::{Detected, ExtractionRule, ScoreValue};

/// Extracts the numeric score, trying rules in priority order.
///
/// Fraction notation wins over percentages - it is closer to what a
/// teacher actually writes on the paper - and a bare labeled number is
/// the last resort. Absence of every pattern yields `None`, never an
/// error.
pub fn extract_score(text: &str) -> Option<Detected<ScoreValue>> {
    extract_fraction(text)
        .or_else(|| extract_percent(text))
        .or_else(|| extract_labeled(text))
}

/// Fraction rule: `42/50`, `42 out of 50`, `Score: 42/50`.
///
/// Both numbers must be positive integers. `points <= max` is NOT
/// required: bonus credit is legal. Unlabeled fractions in date-like
/// ranges are skipped so `01/15` inside `01/15/2024` never reads as a
/// score of 1 out of 15; a `Score:` label overrides the heuristic.
fn extract_fraction(text: &str) -> Option<Detected<ScoreValue>> {
    if let Some(caps) = LABELED_FRACTION_REGEX.captures(text) {
        if let Some((points, max)) = fraction_from(&caps[1], &caps[2]) {
            return Some(Detected::new(
                ScoreValue::fraction(points, max),
                ExtractionRule::FractionScore,
            ));
        }
    }

    for caps in FRACTION_SCORE_REGEX.captures_iter(text) {
        let Some((points, max)) = fraction_from(&caps[1], &caps[2]) else {
            continue;
        };
        if looks_like_date_fragment(points, max) {
            continue;
        }
        return Some(Detected::new(
            ScoreValue::fraction(points, max),
            ExtractionRule::FractionScore,
        ));
    }
    None
}

fn fraction_from(points: &str, max: &str) -> Option<(f64, f64)> {
    let points: u32 = points.parse().ok()?;
    let max: u32 = max.parse().ok()?;
    if points == 0 || max == 0 {
        return None;
    }
    Some((f64::from(points), f64::from(max)))
}

/// Month/day and day/year ranges that are more plausibly a date than a
/// grade. `9/10` on a worksheet margin is almost always October 9th's
/// cousin, not ninety percent.
fn looks_like_date_fragment(a: f64, b: f64) -> bool {
    let month_day = (1.0..=12.0).contains(&a) && (1.0..=31.0).contains(&b);
    let day_year = (1.0..=31.0).contains(&a) && (2000.0..=2099.0).contains(&b);
    month_day || day_year
}

/// Percent rule: `84%`, optionally labeled. Max is implied as 100.
fn extract_percent(text: &str) -> Option<Detected<ScoreValue>> {
    let caps = PERCENT_SCORE_REGEX.captures(text)?;
    let points: f64 = caps[1].parse().ok()?;
    Some(Detected::new(
        ScoreValue::fraction(points, 100.0),
        ExtractionRule::PercentScore,
    ))
}

/// Labeled bare number: `Score: 42` with no `%` or `/` following.
/// Yields a score with no max; the discrepancy evaluator treats it as
/// not comparable rather than guessing a scale.
fn extract_labeled(text: &str) -> Option<Detected<ScoreValue>> {
    for caps in LABELED_SCORE_REGEX.captures_iter(text) {
        if caps.get(2).is_some() {
            // Trailing % or / - this is percent or fraction territory.
            continue;
        }
        let Ok(points) = caps[1].parse::<f64>() else {
            continue;
        };
        return Some(Detected::new(
            ScoreValue::bare(points),
            ExtractionRule::LabeledScore,
        ));
    }
    None
}

/// Letter-grade rule, independent of the numeric score.
pub fn extract_letter_grade(text: &str) -> Option<Detected<String>> {
    let letter = LABELED_LETTER_REGEX
        .captures(text)
        .map(|caps| caps[1].to_uppercase())
        .or_else(|| BARE_LETTER_REGEX.captures(text).map(|caps| caps[1].to_string()))?;
    Some(Detected::new(letter, ExtractionRule::LetterGrade))
}
