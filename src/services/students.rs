//! Student detection from parsed document hints.
//!
//! Shared scan inboxes (one email address, one watched folder for the
//! whole household) do not say whose paper arrived. Detection works down
//! a ladder of signals: an exact name hit beats a partial one, and a
//! course that only one student takes beats a course they share.

use super::similarity::similarity;
use crate::models::{ParsedFields, StudentId, StudentProfile};

/// Detection confidence needed before a document is assigned without
/// review.
const CONFIDENT_THRESHOLD: f64 = 0.70;

/// Minimum fuzzy similarity for a partial name hit.
const PARTIAL_NAME_THRESHOLD: f64 = 0.8;

/// The signal that identified the student.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionMethod {
    /// Name hint equals the roster name (or its first name).
    ExactName,
    /// Name hint fuzzily resembles the roster name.
    PartialName,
    /// Course hint names a course only one student takes.
    UniqueCourse,
    /// Course hint names a course several students share.
    SharedCourse,
}

/// Result of a student detection attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentDetection {
    /// The detected student.
    pub student_id: StudentId,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
    /// The signal that produced the detection.
    pub method: DetectionMethod,
}

impl StudentDetection {
    /// True when the detection is strong enough for auto-assignment.
    #[must_use]
    pub fn is_confident(&self) -> bool {
        self.confidence >= CONFIDENT_THRESHOLD
    }
}

/// Detects which student a parsed document belongs to.
#[derive(Debug, Clone, Default)]
pub struct StudentDetector;

impl StudentDetector {
    /// Creates a new detector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Runs the detection ladder against a roster. Returns `None` when
    /// no signal points at any student.
    #[must_use]
    pub fn detect(
        &self,
        parsed: &ParsedFields,
        roster: &[StudentProfile],
    ) -> Option<StudentDetection> {
        Self::detect_by_name(parsed, roster).or_else(|| Self::detect_by_course(parsed, roster))
    }

    fn detect_by_name(
        parsed: &ParsedFields,
        roster: &[StudentProfile],
    ) -> Option<StudentDetection> {
        let hint = parsed.student_name.as_ref()?.value.trim();
        if hint.is_empty() {
            return None;
        }

        for student in roster {
            let first_name = student.name.split_whitespace().next().unwrap_or_default();
            if hint.eq_ignore_ascii_case(&student.name) || hint.eq_ignore_ascii_case(first_name) {
                return Some(StudentDetection {
                    student_id: student.id.clone(),
                    confidence: 0.95,
                    method: DetectionMethod::ExactName,
                });
            }
        }

        roster
            .iter()
            .map(|student| (student, similarity(hint, &student.name)))
            .filter(|(_, sim)| *sim >= PARTIAL_NAME_THRESHOLD)
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(student, _)| StudentDetection {
                student_id: student.id.clone(),
                confidence: 0.70,
                method: DetectionMethod::PartialName,
            })
    }

    fn detect_by_course(
        parsed: &ParsedFields,
        roster: &[StudentProfile],
    ) -> Option<StudentDetection> {
        let hint = &parsed.course_name.as_ref()?.value;
        let enrolled: Vec<&StudentProfile> = roster
            .iter()
            .filter(|s| {
                s.course_names
                    .iter()
                    .any(|c| c.eq_ignore_ascii_case(hint))
            })
            .collect();

        match enrolled.as_slice() {
            [only] => Some(StudentDetection {
                student_id: only.id.clone(),
                confidence: 0.85,
                method: DetectionMethod::UniqueCourse,
            }),
            [first, ..] => Some(StudentDetection {
                // Ambiguous: reported, but below the confident threshold
                // so the caller must ask.
                student_id: first.id.clone(),
                confidence: 0.50,
                method: DetectionMethod::SharedCourse,
            }),
            [] => None,
        }
    }
}
