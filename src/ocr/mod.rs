//! OCR provider boundary.
//!
//! The pipeline never sees raw pixels; it consumes the text an OCR
//! provider extracted. Providers fail with a transient-vs-permanent
//! distinction, and the calling layer - not the reconciliation core -
//! gives the call a deliberate timeout and a single retry.

mod sidecar;

pub use sidecar::SidecarOcr;

use crate::models::{ExtractedText, RawScanInput};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error as ThisError;

/// OCR extraction failure.
#[derive(Debug, Clone, ThisError)]
pub enum OcrError {
    /// Worth retrying: rate limit, timeout, flaky network.
    #[error("transient ocr failure: {0}")]
    Transient(String),

    /// Not worth retrying: unsupported format, corrupt file, rejected
    /// request.
    #[error("permanent ocr failure: {0}")]
    Permanent(String),
}

/// Turns scanned image or PDF bytes into text.
pub trait OcrProvider: Send + Sync {
    /// Extracts text from one scanned document.
    ///
    /// # Errors
    ///
    /// Returns [`OcrError::Transient`] for failures worth one retry and
    /// [`OcrError::Permanent`] otherwise.
    fn extract_text(&self, scan: &RawScanInput) -> std::result::Result<ExtractedText, OcrError>;
}

/// Calls the provider with a deadline and a single retry on transient
/// failure. A call that outlives `timeout` counts as transient.
///
/// # Errors
///
/// Returns `Error::OperationFailed` when the provider fails permanently
/// or is still failing after the retry.
pub async fn extract_with_retry(
    provider: Arc<dyn OcrProvider>,
    scan: &RawScanInput,
    timeout: Duration,
) -> crate::Result<ExtractedText> {
    let mut last_failure = String::new();

    for attempt in 0..2 {
        let provider = Arc::clone(&provider);
        let scan = scan.clone();
        let call = tokio::task::spawn_blocking(move || provider.extract_text(&scan));

        match tokio::time::timeout(timeout, call).await {
            Ok(Ok(Ok(text))) => return Ok(text),
            Ok(Ok(Err(OcrError::Permanent(cause)))) => {
                return Err(crate::Error::OperationFailed {
                    operation: "ocr_extract".to_string(),
                    cause,
                });
            },
            Ok(Ok(Err(OcrError::Transient(cause)))) => {
                tracing::warn!(attempt, cause = %cause, "Transient OCR failure");
                last_failure = cause;
            },
            Ok(Err(join_error)) => {
                return Err(crate::Error::OperationFailed {
                    operation: "ocr_extract".to_string(),
                    cause: join_error.to_string(),
                });
            },
            Err(_elapsed) => {
                tracing::warn!(attempt, timeout = ?timeout, "OCR call timed out");
                last_failure = format!("timed out after {timeout:?}");
            },
        }
    }

    Err(crate::Error::OperationFailed {
        operation: "ocr_extract".to_string(),
        cause: format!("still failing after retry: {last_failure}"),
    })
}
