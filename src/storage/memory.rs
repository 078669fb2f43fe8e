//! In-memory collaborator implementations.
//!
//! Back the pipeline for tests, the CLI and any caller that has already
//! mirrored the remote catalog locally. `FixtureCatalog` deserializes
//! straight from the JSON fixture format the `scan` command consumes.

use crate::models::{
    CatalogAssignment, ContentFingerprint, CourseId, DateWindow, Disposition, RawScanInput,
    ReconciliationResult, ScanId, StudentId, StudentProfile,
};
use crate::storage::{AssignmentCatalog, ScanStore};
use crate::{Error, Result};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// A static catalog loaded from a fixture.
///
/// # Fixture format
///
/// ```json
/// {
///   "students": [{ "id": "s-jj", "name": "JJ Smith", "course_names": ["Science"] }],
///   "assignments": { "s-jj": [{ "id": "a-1", "title": "Science Test: Weather", ... }] }
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureCatalog {
    /// Roster used for student detection.
    #[serde(default)]
    pub students: Vec<StudentProfile>,
    /// Assignments keyed by student ID.
    #[serde(default)]
    pub assignments: HashMap<String, Vec<CatalogAssignment>>,
}

impl FixtureCatalog {
    /// Parses a fixture from JSON.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` when the JSON does not match the
    /// fixture format.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw)
            .map_err(|e| Error::InvalidInput(format!("catalog fixture parse: {e}")))
    }
}

impl AssignmentCatalog for FixtureCatalog {
    fn list_assignments(
        &self,
        student: &StudentId,
        course: Option<&CourseId>,
        window: Option<DateWindow>,
    ) -> Result<Vec<CatalogAssignment>> {
        let Some(assignments) = self.assignments.get(student.as_str()) else {
            return Ok(Vec::new());
        };
        Ok(assignments
            .iter()
            .filter(|a| course.is_none_or(|c| &a.course_id == c))
            .filter(|a| match (window, a.due_date) {
                (Some(w), Some(due)) => w.contains(due),
                // Undated assignments stay in scope for any window.
                _ => true,
            })
            .cloned()
            .collect())
    }
}

/// One stored reconciliation record.
#[derive(Debug, Clone)]
struct StoredScan {
    student: StudentId,
    scan_id: ScanId,
    fingerprint: ContentFingerprint,
    disposition: Disposition,
}

/// Thread-safe in-memory scan store.
///
/// Enforces the fingerprint uniqueness constraint: at most one
/// non-duplicate record per (student, fingerprint), so two racing
/// identical scans cannot both be accepted even if the caller's own
/// duplicate check misses.
#[derive(Debug, Default)]
pub struct InMemoryScanStore {
    records: Mutex<Vec<StoredScan>>,
}

impl InMemoryScanStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records for a student, for assertions in tests.
    pub fn count_for(&self, student: &StudentId) -> Result<usize> {
        let records = self.lock()?;
        Ok(records.iter().filter(|r| &r.student == student).count())
    }

    /// Disposition recorded for a scan, if any.
    pub fn disposition_of(&self, scan_id: &ScanId) -> Result<Option<Disposition>> {
        let records = self.lock()?;
        Ok(records
            .iter()
            .find(|r| &r.scan_id == scan_id)
            .map(|r| r.disposition))
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<StoredScan>>> {
        self.records.lock().map_err(|_| Error::OperationFailed {
            operation: "store_lock".to_string(),
            cause: "poisoned".to_string(),
        })
    }
}

impl ScanStore for InMemoryScanStore {
    fn record(
        &self,
        student: &StudentId,
        result: &ReconciliationResult,
        _scan: &RawScanInput,
    ) -> Result<()> {
        let student = student.clone();
        let mut records = self.lock()?;

        if result.disposition != Disposition::Duplicate
            && records.iter().any(|r| {
                r.student == student
                    && r.fingerprint == result.fingerprint
                    && r.disposition != Disposition::Duplicate
            })
        {
            return Err(Error::OperationFailed {
                operation: "store_record".to_string(),
                cause: format!(
                    "fingerprint {} already recorded for {student}",
                    result.fingerprint.short()
                ),
            });
        }

        records.push(StoredScan {
            student,
            scan_id: result.scan_id.clone(),
            fingerprint: result.fingerprint.clone(),
            disposition: result.disposition,
        });
        Ok(())
    }

    fn known_fingerprints(&self, student: &StudentId) -> Result<HashSet<ContentFingerprint>> {
        let records = self.lock()?;
        Ok(records
            .iter()
            .filter(|r| &r.student == student)
            .map(|r| r.fingerprint.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScanSource;

    fn scan(bytes: &[u8]) -> RawScanInput {
        RawScanInput::new(bytes.to_vec(), "image/png", ScanSource::ManualUpload)
    }

    fn fp(bytes: &[u8]) -> ContentFingerprint {
        crate::services::dedup::fingerprint(bytes)
    }

    #[test]
    fn test_known_fingerprints_scoped_by_student() {
        let store = InMemoryScanStore::new();
        let jj = StudentId::new("s-jj");
        let scan_a = scan(b"photo");
        let result = ReconciliationResult::unmatched(scan_a.id.clone(), fp(b"photo"));
        store.record(&jj, &result, &scan_a).unwrap();

        let known = store.known_fingerprints(&jj).unwrap();
        assert!(known.contains(&fp(b"photo")));

        let other = store.known_fingerprints(&StudentId::new("s-maya")).unwrap();
        assert!(other.is_empty());
    }

    #[test]
    fn test_uniqueness_constraint() {
        let store = InMemoryScanStore::new();
        let jj = StudentId::new("s-jj");
        let first = scan(b"photo");
        let second = scan(b"photo");

        let ok = ReconciliationResult::unmatched(first.id.clone(), fp(b"photo"));
        store.record(&jj, &ok, &first).unwrap();

        // Same fingerprint, non-duplicate disposition: rejected.
        let clash = ReconciliationResult::unmatched(second.id.clone(), fp(b"photo"));
        assert!(store.record(&jj, &clash, &second).is_err());

        // Recording it AS a duplicate is fine.
        let dup = ReconciliationResult::duplicate(second.id.clone(), fp(b"photo"));
        store.record(&jj, &dup, &second).unwrap();
        assert_eq!(store.count_for(&jj).unwrap(), 2);
    }

    #[test]
    fn test_fixture_catalog_json() {
        let catalog = FixtureCatalog::from_json(
            r#"{
                "students": [
                    { "id": "s-jj", "name": "JJ Smith", "course_names": ["Science"] }
                ],
                "assignments": {
                    "s-jj": [{
                        "id": "a-1",
                        "title": "Science Test: Weather",
                        "course_id": "c-sci",
                        "course_name": "Science",
                        "due_date": "2024-01-16",
                        "points_possible": 50.0,
                        "recorded_score": 45.0,
                        "status": "graded"
                    }]
                }
            }"#,
        )
        .unwrap();

        let listed = catalog
            .list_assignments(&StudentId::new("s-jj"), None, None)
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Science Test: Weather");

        let empty = catalog
            .list_assignments(&StudentId::new("s-unknown"), None, None)
            .unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_fixture_catalog_window_filter() {
        let catalog = FixtureCatalog::from_json(
            r#"{
                "assignments": {
                    "s-jj": [
                        { "id": "a-in", "title": "In window", "course_id": "c", "course_name": "Science",
                          "due_date": "2024-01-16", "points_possible": 50.0, "recorded_score": null, "status": "submitted" },
                        { "id": "a-out", "title": "Out of window", "course_id": "c", "course_name": "Science",
                          "due_date": "2024-03-01", "points_possible": 50.0, "recorded_score": null, "status": "submitted" },
                        { "id": "a-undated", "title": "Undated", "course_id": "c", "course_name": "Science",
                          "due_date": null, "points_possible": 50.0, "recorded_score": null, "status": "submitted" }
                    ]
                }
            }"#,
        )
        .unwrap();

        let window = DateWindow::around(
            chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            14,
        );
        let listed = catalog
            .list_assignments(&StudentId::new("s-jj"), None, Some(window))
            .unwrap();
        let ids: Vec<&str> = listed.iter().map(|a| a.id.as_str()).collect();
        assert!(ids.contains(&"a-in"));
        assert!(ids.contains(&"a-undated"));
        assert!(!ids.contains(&"a-out"));
    }
}
