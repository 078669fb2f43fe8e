//! Scan input types and identifiers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a scanned document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanId(String);

impl ScanId {
    /// Creates a new scan ID from an existing string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random scan ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ScanId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Where a scanned document arrived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanSource {
    /// Uploaded by hand through the CLI or UI.
    ManualUpload,
    /// Pulled from an email attachment.
    MailAttachment,
    /// Picked up from a watched cloud folder.
    WatchedFolder,
}

impl fmt::Display for ScanSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ManualUpload => write!(f, "manual_upload"),
            Self::MailAttachment => write!(f, "mail_attachment"),
            Self::WatchedFolder => write!(f, "watched_folder"),
        }
    }
}

/// A scanned document as it arrived at ingestion.
///
/// Immutable once created. The bytes are the canonical identity of the
/// document: two inputs with identical bytes are the same document no
/// matter the file name, arrival time or source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawScanInput {
    /// Unique identifier assigned at ingestion.
    pub id: ScanId,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
    /// Declared media type (e.g. `image/jpeg`, `application/pdf`).
    pub media_type: String,
    /// When the document arrived.
    pub received_at: DateTime<Utc>,
    /// Where the document came from.
    pub source: ScanSource,
    /// Original file name, when the source had one.
    pub file_name: Option<String>,
}

impl RawScanInput {
    /// Creates a new scan input with a generated ID and the current time.
    #[must_use]
    pub fn new(bytes: Vec<u8>, media_type: impl Into<String>, source: ScanSource) -> Self {
        Self {
            id: ScanId::generate(),
            bytes,
            media_type: media_type.into(),
            received_at: Utc::now(),
            source,
            file_name: None,
        }
    }

    /// Attaches the original file name.
    #[must_use]
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }
}

/// A single recognized region from the OCR provider.
///
/// Carried through for callers that want layout information; the
/// reconciliation core reads only the flat text blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRegion {
    /// Page number the region was found on (1-indexed).
    pub page: u32,
    /// Recognized text within the region.
    pub text: String,
}

/// The OCR provider's output for one scanned document.
///
/// Owned by the orchestrator for the lifetime of one reconciliation pass
/// and discarded afterwards; never persisted independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedText {
    /// The full recognized text as a single blob.
    pub text: String,
    /// Optional per-region structure.
    pub regions: Vec<TextRegion>,
}

impl ExtractedText {
    /// Creates extracted text from a flat blob with no region structure.
    #[must_use]
    pub fn from_blob(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            regions: Vec::new(),
        }
    }
}
