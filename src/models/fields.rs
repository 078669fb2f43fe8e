//! Parsed field types produced by the field parser.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The extraction rule that produced a parsed field.
///
/// Every present field in [`ParsedFields`] records which rule matched so
/// reviewers can judge how much to trust it. A fraction score written by a
/// teacher's hand is stronger evidence than a bare labeled number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionRule {
    /// `42/50` or `42 out of 50` style fraction.
    FractionScore,
    /// `84%` style percentage, max implied as 100.
    PercentScore,
    /// `Score: 42` bare labeled number, no max.
    LabeledScore,
    /// Letter grade `A`-`F` with optional `+`/`-`.
    LetterGrade,
    /// Numeric date, `01/15/2024` or `01-15-2024`.
    NumericDate,
    /// ISO date, `2024-01-15`.
    IsoDate,
    /// Spelled-out month, `January 15, 2024` or `Jan 15, 2024`.
    MonthNameDate,
    /// First non-label heading line taken as the title.
    HeadingTitle,
    /// Text following a `Name:` label.
    NameLabel,
    /// Case-insensitive hit in the known-course dictionary.
    CourseDictionary,
}

impl fmt::Display for ExtractionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::FractionScore => "fraction_score",
            Self::PercentScore => "percent_score",
            Self::LabeledScore => "labeled_score",
            Self::LetterGrade => "letter_grade",
            Self::NumericDate => "numeric_date",
            Self::IsoDate => "iso_date",
            Self::MonthNameDate => "month_name_date",
            Self::HeadingTitle => "heading_title",
            Self::NameLabel => "name_label",
            Self::CourseDictionary => "course_dictionary",
        };
        write!(f, "{s}")
    }
}

/// A parsed value together with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detected<T> {
    /// The extracted value.
    pub value: T,
    /// The rule that matched.
    pub rule: ExtractionRule,
}

impl<T> Detected<T> {
    /// Pairs a value with its source rule.
    #[must_use]
    pub const fn new(value: T, rule: ExtractionRule) -> Self {
        Self { value, rule }
    }
}

/// A numeric score read off the paper.
///
/// `max` is a paired optional: it is only ever present alongside `points`.
/// A max with no points is meaningless and is discarded at construction.
/// `points <= max` is NOT required - over-credit from bonus points is
/// legal and common on graded papers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreValue {
    /// Points earned, as written on the document.
    pub points: f64,
    /// Points possible, when the document states one.
    pub max: Option<f64>,
}

impl ScoreValue {
    /// Creates a score with both points and max.
    #[must_use]
    pub const fn fraction(points: f64, max: f64) -> Self {
        Self {
            points,
            max: Some(max),
        }
    }

    /// Creates a bare score with no stated max.
    #[must_use]
    pub const fn bare(points: f64) -> Self {
        Self { points, max: None }
    }
}

/// Structured fields extracted from one document's OCR text.
///
/// Built once by the field parser and immutable afterwards. Absence of a
/// field means no pattern matched; it is never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedFields {
    /// Numeric score, when one was found.
    pub score: Option<Detected<ScoreValue>>,
    /// Letter grade, independent of the numeric score.
    pub letter_grade: Option<Detected<String>>,
    /// First valid calendar date in document order.
    pub date: Option<Detected<NaiveDate>>,
    /// Best title heuristic.
    pub title: Option<Detected<String>>,
    /// Student name hint from a `Name:` label.
    pub student_name: Option<Detected<String>>,
    /// Course hint from the known-course dictionary.
    pub course_name: Option<Detected<String>>,
}

impl ParsedFields {
    /// Returns true if no field at all was extracted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.score.is_none()
            && self.letter_grade.is_none()
            && self.date.is_none()
            && self.title.is_none()
            && self.student_name.is_none()
            && self.course_name.is_none()
    }
}
