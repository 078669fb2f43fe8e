//! Parser tests against realistic OCR fixtures.
//!
//! OCR output from phone photos of graded papers is messy: broken
//! lines, stray punctuation, labels and content interleaved. These
//! fixtures are shaped like what the provider actually returns.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use chrono::NaiveDate;
use homeroom::config::ParserConfig;
use homeroom::models::ExtractionRule;
use homeroom::services::FieldParser;

fn parser() -> FieldParser {
    FieldParser::new(ParserConfig::default())
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_reference_science_test() {
    let fields = parser().parse("Name: JJ\nScience Test\nDate: 01/15/2024\nScore: 42/50");

    let score = fields.score.expect("score");
    assert!((score.value.points - 42.0).abs() < f64::EPSILON);
    assert_eq!(score.value.max, Some(50.0));

    assert_eq!(fields.date.expect("date").value, date(2024, 1, 15));
    assert!(fields.title.expect("title").value.contains("Science Test"));
    assert_eq!(fields.student_name.expect("name").value, "JJ");
    assert_eq!(fields.course_name.expect("course").value, "Science");
}

#[test]
fn test_math_quiz_with_letter_and_percent() {
    let text = "Maya Smith   Period 3\n\
                Math Quiz - Chapter 7\n\
                January 22, 2024\n\
                18/20    90%    A-\n\
                Great improvement!";
    let fields = parser().parse(text);

    // Fraction beats the percent that restates it.
    let score = fields.score.unwrap();
    assert_eq!(score.value.max, Some(20.0));
    assert_eq!(score.rule, ExtractionRule::FractionScore);

    assert_eq!(fields.date.unwrap().value, date(2024, 1, 22));
    assert_eq!(fields.course_name.unwrap().value, "Math");
}

#[test]
fn test_percent_only_paper() {
    let fields = parser().parse("Spelling Test\nGrade: 95%");
    let score = fields.score.unwrap();
    assert!((score.value.points - 95.0).abs() < f64::EPSILON);
    assert_eq!(score.value.max, Some(100.0));
    assert_eq!(score.rule, ExtractionRule::PercentScore);
}

#[test]
fn test_bare_labeled_score_has_no_max() {
    let fields = parser().parse("Reading Log Week 4\nScore: 10");
    let score = fields.score.unwrap();
    assert!(score.value.max.is_none());
    assert_eq!(score.rule, ExtractionRule::LabeledScore);
}

#[test]
fn test_date_inside_header_not_read_as_score() {
    // The 1/15 of the date must not become a score of 1 out of 15.
    let fields = parser().parse("Homework due 1/15/2024\nNo grade yet");
    assert!(fields.score.is_none());
    assert_eq!(fields.date.unwrap().value, date(2024, 1, 15));
}

#[test]
fn test_ocr_noise_lines_skipped_for_title() {
    let text = "||| --- |||\n4207\nUnit 5 Vocabulary\nName: JJ";
    let fields = parser().parse(text);
    assert_eq!(fields.title.unwrap().value, "Unit 5 Vocabulary");
}

#[test]
fn test_multi_page_blob() {
    // Two regions concatenated by the orchestrator; first date and
    // first score win.
    let text = "Science Test page 1\nDate: 2024-02-05\nScore: 31/40\n\n\
                page 2 scratch work\n02/09/2024\n12/15";
    let fields = parser().parse(text);
    assert_eq!(fields.date.unwrap().value, date(2024, 2, 5));
    assert_eq!(fields.score.unwrap().value.max, Some(40.0));
}

#[test]
fn test_letter_grade_only() {
    let fields = parser().parse("Art Project\nGrade: A+");
    assert!(fields.score.is_none());
    assert_eq!(fields.letter_grade.unwrap().value, "A+");
}

#[test]
fn test_totally_unrelated_text() {
    let fields = parser().parse("Dear families,\nthe bake sale is moved to the gym.");
    assert!(fields.score.is_none());
    assert!(fields.date.is_none());
    assert!(fields.student_name.is_none());
}
