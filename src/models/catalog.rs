//! Catalog records from the course-management service.
//!
//! Everything in this module is read-only from the pipeline's point of
//! view: the catalog is an external source of truth that is queried,
//! never written back to.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a catalog assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssignmentId(String);

impl AssignmentId {
    /// Creates a new assignment ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssignmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a course.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    /// Creates a new course ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a student.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    /// Creates a new student ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Submission state of a catalog assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    /// Nothing handed in yet.
    #[default]
    NotSubmitted,
    /// Handed in, not graded.
    Submitted,
    /// Graded; `recorded_score` should normally be present.
    Graded,
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSubmitted => write!(f, "not_submitted"),
            Self::Submitted => write!(f, "submitted"),
            Self::Graded => write!(f, "graded"),
        }
    }
}

/// An assignment record from the external catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogAssignment {
    /// Catalog-assigned identifier.
    pub id: AssignmentId,
    /// Assignment title as the teacher entered it.
    pub title: String,
    /// Course the assignment belongs to.
    pub course_id: CourseId,
    /// Course display name, used for course-hint matching.
    pub course_name: String,
    /// Due date, when the catalog has one.
    pub due_date: Option<NaiveDate>,
    /// Points possible. May legitimately be zero (ungraded participation
    /// work), which the discrepancy evaluator treats as unparseable.
    pub points_possible: f64,
    /// Score currently on file, if the teacher has entered one.
    pub recorded_score: Option<f64>,
    /// Submission state.
    pub status: SubmissionStatus,
}

/// A student known to the surrounding application.
///
/// Carries just enough for name-hint detection; the roster comes from the
/// persistence collaborator, not from this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    /// Student identifier.
    pub id: StudentId,
    /// Full display name, e.g. `"JJ Smith"`.
    pub name: String,
    /// Names of courses the student is enrolled in.
    pub course_names: Vec<String>,
}

/// An inclusive date range used to scope catalog queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    /// First date in the window.
    pub start: NaiveDate,
    /// Last date in the window.
    pub end: NaiveDate,
}

impl DateWindow {
    /// Creates a window centered on `date`, extending `days` either way.
    #[must_use]
    pub fn around(date: NaiveDate, days: i64) -> Self {
        Self {
            start: date - chrono::Duration::days(days),
            end: date + chrono::Duration::days(days),
        }
    }

    /// Creates a trailing window of `days` ending at `end`.
    #[must_use]
    pub fn trailing(end: NaiveDate, days: i64) -> Self {
        Self {
            start: end - chrono::Duration::days(days),
            end,
        }
    }

    /// Returns true if `date` falls inside the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_window_around() {
        let window = DateWindow::around(date(2024, 1, 15), 7);
        assert_eq!(window.start, date(2024, 1, 8));
        assert_eq!(window.end, date(2024, 1, 22));
        assert!(window.contains(date(2024, 1, 15)));
        assert!(window.contains(date(2024, 1, 8)));
        assert!(!window.contains(date(2024, 1, 23)));
    }

    #[test]
    fn test_date_window_trailing() {
        let window = DateWindow::trailing(date(2024, 3, 1), 30);
        assert_eq!(window.start, date(2024, 1, 31));
        assert!(window.contains(date(2024, 2, 14)));
        assert!(!window.contains(date(2024, 3, 2)));
    }

    #[test]
    fn test_submission_status_display() {
        assert_eq!(SubmissionStatus::NotSubmitted.to_string(), "not_submitted");
        assert_eq!(SubmissionStatus::Graded.to_string(), "graded");
    }

    #[test]
    fn test_id_newtypes_roundtrip() {
        let id = AssignmentId::new("a-17");
        assert_eq!(id.as_str(), "a-17");
        assert_eq!(id.to_string(), "a-17");
    }
}
