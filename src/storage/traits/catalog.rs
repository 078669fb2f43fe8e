//! Assignment catalog trait.

use crate::Result;
use crate::models::{CatalogAssignment, CourseId, DateWindow, StudentId};

/// Read-only view of the course-management service's assignment records.
///
/// The catalog is authoritative for titles, due dates and recorded
/// scores; this crate never writes back to it. Implementations decide
/// how a query maps onto the remote service (or a local mirror of it).
pub trait AssignmentCatalog: Send + Sync {
    /// Lists assignments for a student, optionally narrowed to one
    /// course and a due-date window. Assignments without a due date are
    /// included regardless of the window: they can still be matched by
    /// title and course.
    fn list_assignments(
        &self,
        student: &StudentId,
        course: Option<&CourseId>,
        window: Option<DateWindow>,
    ) -> Result<Vec<CatalogAssignment>>;
}
