//! Content fingerprint for duplicate detection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed-length digest of a document's raw bytes.
///
/// Two scan inputs with equal fingerprints are defined to be the same
/// document, regardless of file name, arrival time or source. The digest
/// is SHA-256 over the raw bytes, hex-encoded, so it is stable across
/// runs and platforms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentFingerprint(String);

impl ContentFingerprint {
    /// Wraps an already-computed hex digest.
    ///
    /// Use [`crate::services::dedup::fingerprint`] to compute one from
    /// file bytes.
    #[must_use]
    pub fn from_hex(digest: impl Into<String>) -> Self {
        Self(digest.into())
    }

    /// Returns the hex digest as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns a short prefix for log lines.
    #[must_use]
    pub fn short(&self) -> &str {
        let len = self.0.len().min(12);
        &self.0[..len]
    }
}

impl fmt::Display for ContentFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
