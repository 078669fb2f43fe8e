//! Field parser: raw OCR text to structured candidate fields.
//!
//! The parser is an ordered table of independent extractor rules, one
//! per field family. Every rule is applied - a rule failing to match
//! never short-circuits the others - and the first confident match per
//! field wins. The parser is pure and total: any text input, including
//! empty or garbage OCR output, yields a `ParsedFields` with absent
//! options rather than an error.

mod course;
mod date;
mod patterns;
mod score;
mod text;

use crate::config::ParserConfig;
use crate::models::ParsedFields;
use tracing::instrument;

/// Parser for extracting grade information from OCR text.
///
/// Handles the notations commonly found on school papers:
/// `Score: 42/50`, `84%`, `Grade: B+`, dates in numeric, ISO and
/// spelled-month forms, plus title, student-name and course hints.
///
/// # Example
///
/// ```rust
/// use homeroom::config::ParserConfig;
/// use homeroom::services::FieldParser;
///
/// let parser = FieldParser::new(ParserConfig::default());
/// let fields = parser.parse("Name: JJ\nScience Test\nDate: 01/15/2024\nScore: 42/50");
/// assert_eq!(fields.score.unwrap().value.points, 42.0);
/// assert_eq!(fields.student_name.unwrap().value, "JJ");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldParser {
    config: ParserConfig,
}

impl FieldParser {
    /// Creates a parser with the given configuration.
    #[must_use]
    pub const fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parses OCR text into structured fields. Never fails.
    ///
    /// All regions of a scan are treated as one flat blob; layout
    /// information from the OCR provider is not used.
    #[instrument(skip(self, text), fields(text_length = text.len()))]
    #[must_use]
    pub fn parse(&self, text: &str) -> ParsedFields {
        let fields = ParsedFields {
            score: score::extract_score(text),
            letter_grade: score::extract_letter_grade(text),
            date: date::extract_date(text),
            title: text::extract_title(text, self.config.max_title_length),
            student_name: text::extract_student_name(text),
            course_name: course::extract_course(text, &self.config.known_courses),
        };

        tracing::debug!(
            has_score = fields.score.is_some(),
            has_date = fields.date.is_some(),
            has_title = fields.title.is_some(),
            "Parsed scan text"
        );
        fields
    }
}
