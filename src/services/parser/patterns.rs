//! Field extraction patterns.
// Allow expect() on static regex patterns - these are guaranteed to compile
#![allow(clippy::expect_used)]
//!
//! Every pattern the field parser knows lives here as a compiled static,
//! one per extraction rule. The `regex` crate has no lookaround, so rules
//! that need "not followed by" context capture the trailing character and
//! let the rule logic decide.

use regex::Regex;
use std::sync::LazyLock;

/// `42/50`, `42 / 50`, `42 out of 50 points`.
pub static FRACTION_SCORE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d{1,4})\s*(?:/|out of|of)\s*(\d{1,4})\b\s*(?:points?|pts?)?")
        .expect("static regex: fraction score pattern")
});

/// `Score: 42/50` - a fraction with an explicit score label is trusted
/// even when the numbers fall in date-like ranges.
pub static LABELED_FRACTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:score|grade|points)\s*:?\s*(\d{1,4})\s*/\s*(\d{1,4})\b")
        .expect("static regex: labeled fraction pattern")
});

/// `84%`, `Score: 84%`, `Grade: 84.5 %`.
pub static PERCENT_SCORE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:(?:score|grade)\s*:?\s*)?(\d{1,3}(?:\.\d+)?)\s*%")
        .expect("static regex: percent score pattern")
});

/// `Score: 42` with the character after the number captured so the rule
/// can reject fractions and percentages already handled elsewhere.
pub static LABELED_SCORE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:score|grade)\s*:\s*(\d{1,4}(?:\.\d+)?)\s*([%/])?")
        .expect("static regex: labeled score pattern")
});

/// `Grade: B+`, `grade A-`.
pub static LABELED_LETTER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bgrade\s*:?\s*([A-Fa-f][+-]?)(?:\s|$)")
        .expect("static regex: labeled letter grade pattern")
});

/// A bare uppercase letter grade standing alone on a line.
pub static BARE_LETTER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*([A-F][+-]?)\s*$").expect("static regex: bare letter grade pattern")
});

/// `01/15/2024` or `01-15-2024`.
pub static NUMERIC_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{1,2})[/-](\d{1,2})[/-](\d{4})\b")
        .expect("static regex: numeric date pattern")
});

/// ISO `2024-01-15`.
pub static ISO_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})\b").expect("static regex: ISO date pattern")
});

/// `January 15, 2024`, `Jan. 15 2024`, `March 3rd, 2024`.
pub static MONTH_NAME_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(January|February|March|April|May|June|July|August|September|October|November|December|Jan|Feb|Mar|Apr|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\.?\s+(\d{1,2})(?:st|nd|rd|th)?,?\s+(\d{4})\b",
    )
    .expect("static regex: month name date pattern")
});

/// A line that is a form label rather than content.
pub static LABEL_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:name|student|date|due|score|grade|points|class|course|subject|period|teacher)\s*:")
        .expect("static regex: label line pattern")
});

/// `Name: <hint>` / `Student: <hint>` up to end of line.
pub static NAME_LABEL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[^\S\n]*(?:name|student)\s*:\s*(.+)$")
        .expect("static regex: name label pattern")
});

/// A label keyword appearing mid-line, used to cut a name hint short.
pub static INLINE_LABEL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:date|due|score|grade|points|class|course|subject|period|teacher)\s*:")
        .expect("static regex: inline label pattern")
});

/// A line with no letters at all - digits and punctuation only.
pub static NON_CONTENT_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\d\s[:punct:]]*$").expect("static regex: non-content line pattern")
});
