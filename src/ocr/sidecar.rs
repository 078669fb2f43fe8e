//! Sidecar-file OCR provider for offline use.

use super::{OcrError, OcrProvider};
use crate::models::{ExtractedText, RawScanInput};
use std::path::PathBuf;

/// Reads pre-extracted text from a sidecar file next to the scan.
///
/// For a scan named `science-test.jpg` the provider looks for
/// `science-test.jpg.txt` under its root directory. Lets the CLI and
/// tests exercise the full pipeline without any live OCR service.
#[derive(Debug, Clone)]
pub struct SidecarOcr {
    root: PathBuf,
}

impl SidecarOcr {
    /// Creates a provider rooted at the given directory.
    #[must_use]
    pub const fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl OcrProvider for SidecarOcr {
    fn extract_text(&self, scan: &RawScanInput) -> std::result::Result<ExtractedText, OcrError> {
        let Some(file_name) = scan.file_name.as_deref() else {
            return Err(OcrError::Permanent(
                "scan has no file name to locate a sidecar for".to_string(),
            ));
        };
        let path = self.root.join(format!("{file_name}.txt"));
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(ExtractedText::from_blob(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(OcrError::Permanent(
                format!("no sidecar text at {}", path.display()),
            )),
            Err(e) => Err(OcrError::Transient(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScanSource;

    #[test]
    fn test_reads_sidecar_text() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("quiz.png.txt"), "Score: 18/20").unwrap();

        let provider = SidecarOcr::new(dir.path().to_path_buf());
        let scan = RawScanInput::new(vec![1], "image/png", ScanSource::ManualUpload)
            .with_file_name("quiz.png");

        let text = provider.extract_text(&scan).unwrap();
        assert_eq!(text.text, "Score: 18/20");
    }

    #[test]
    fn test_missing_sidecar_is_permanent() {
        let dir = tempfile::tempdir().unwrap();
        let provider = SidecarOcr::new(dir.path().to_path_buf());
        let scan = RawScanInput::new(vec![1], "image/png", ScanSource::ManualUpload)
            .with_file_name("missing.png");

        assert!(matches!(
            provider.extract_text(&scan),
            Err(OcrError::Permanent(_))
        ));
    }

    #[test]
    fn test_no_file_name_is_permanent() {
        let provider = SidecarOcr::new(PathBuf::from("."));
        let scan = RawScanInput::new(vec![1], "image/png", ScanSource::ManualUpload);
        assert!(matches!(
            provider.extract_text(&scan),
            Err(OcrError::Permanent(_))
        ));
    }
}
