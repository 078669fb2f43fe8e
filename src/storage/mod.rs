//! Storage and catalog abstractions.
//!
//! The reconciliation core never talks to a live service. Its two
//! collaborators are expressed as capability traits injected into the
//! orchestrator, so the whole pipeline runs offline against fixture
//! catalogs and an in-memory store:
//! - **`AssignmentCatalog`**: read-only view of the course-management
//!   service's assignment records
//! - **`ScanStore`**: durable record of reconciliation outcomes and the
//!   source of known fingerprints for duplicate detection

pub mod memory;
pub mod traits;

pub use memory::{FixtureCatalog, InMemoryScanStore};
pub use traits::{AssignmentCatalog, ScanStore};
