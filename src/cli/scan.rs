//! Scan command: reconcile scanned documents against a catalog fixture.

use crate::config::HomeroomConfig;
use crate::models::{
    ExtractedText, RawScanInput, ReconciliationResult, ScanSource, StudentId,
};
use crate::ocr::{SidecarOcr, extract_with_retry};
use crate::services::{FieldParser, ReconcileService, StudentDetector};
use crate::storage::{FixtureCatalog, InMemoryScanStore};
use crate::{Error, Result};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// How long one OCR call may run before the retry kicks in.
const OCR_TIMEOUT: Duration = Duration::from_secs(30);

/// Options for the scan command.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Documents to reconcile. `.txt` files are taken as already
    /// extracted text; anything else goes through the sidecar OCR
    /// provider.
    pub files: Vec<PathBuf>,
    /// Path to the catalog fixture JSON.
    pub catalog: PathBuf,
    /// Student ID; detected from the first document when omitted.
    pub student: Option<String>,
    /// Emit JSON instead of a text report.
    pub json: bool,
}

/// One reconciled file in the report.
#[derive(Debug, Serialize)]
struct ScanReport {
    file: String,
    #[serde(flatten)]
    result: ReconciliationResult,
}

/// Runs the scan command.
///
/// # Errors
///
/// Fails when a file or the catalog cannot be read, OCR gives up, the
/// student cannot be confidently detected, or a collaborator fails.
pub async fn run_scan(options: ScanOptions, config: &HomeroomConfig) -> Result<String> {
    let raw = std::fs::read_to_string(&options.catalog).map_err(|e| Error::OperationFailed {
        operation: "catalog_read".to_string(),
        cause: format!("{}: {e}", options.catalog.display()),
    })?;
    let catalog = FixtureCatalog::from_json(&raw)?;

    let mut documents = Vec::with_capacity(options.files.len());
    for path in &options.files {
        documents.push(load_document(path).await?);
    }

    let student = resolve_student(&options, &catalog, &documents, config)?;
    let service = Arc::new(ReconcileService::new(
        catalog,
        InMemoryScanStore::new(),
        config.clone(),
    ));
    let results = service.reconcile_batch(&student, documents).await?;

    let reports: Vec<ScanReport> = options
        .files
        .iter()
        .zip(results)
        .map(|(path, result)| ScanReport {
            file: path.display().to_string(),
            result,
        })
        .collect();

    if options.json {
        return serde_json::to_string_pretty(&reports).map_err(|e| Error::OperationFailed {
            operation: "scan_render".to_string(),
            cause: e.to_string(),
        });
    }
    Ok(render(&student, &reports))
}

/// Reads one document: bytes plus extracted text.
async fn load_document(path: &Path) -> Result<(RawScanInput, ExtractedText)> {
    let bytes = std::fs::read(path).map_err(|e| Error::OperationFailed {
        operation: "scan_read".to_string(),
        cause: format!("{}: {e}", path.display()),
    })?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let is_text = path.extension().is_some_and(|e| e.eq_ignore_ascii_case("txt"));
    let media_type = if is_text { "text/plain" } else { "image/jpeg" };

    let scan = RawScanInput::new(bytes, media_type, ScanSource::ManualUpload)
        .with_file_name(file_name);

    let text = if is_text {
        ExtractedText::from_blob(String::from_utf8_lossy(&scan.bytes).into_owned())
    } else {
        let root = path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
        let provider = Arc::new(SidecarOcr::new(root));
        extract_with_retry(provider, &scan, OCR_TIMEOUT).await?
    };
    Ok((scan, text))
}

/// Uses `--student` when given, otherwise runs detection over the first
/// document's parsed fields against the fixture roster.
fn resolve_student(
    options: &ScanOptions,
    catalog: &FixtureCatalog,
    documents: &[(RawScanInput, ExtractedText)],
    config: &HomeroomConfig,
) -> Result<StudentId> {
    if let Some(id) = &options.student {
        return Ok(StudentId::new(id.clone()));
    }

    let Some((_, text)) = documents.first() else {
        return Err(Error::InvalidInput("no documents to scan".to_string()));
    };
    let parsed = FieldParser::new(config.parser.clone()).parse(&text.text);
    let detection = StudentDetector::new()
        .detect(&parsed, &catalog.students)
        .filter(crate::services::StudentDetection::is_confident);

    detection.map_or_else(
        || {
            Err(Error::InvalidInput(
                "could not confidently detect the student; pass --student".to_string(),
            ))
        },
        |d| {
            tracing::info!(student = %d.student_id, method = ?d.method, "Detected student");
            Ok(d.student_id)
        },
    )
}

fn render(student: &StudentId, reports: &[ScanReport]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Reconciled {} document(s) for {student}", reports.len());

    for report in reports {
        let _ = writeln!(out, "\n{}", report.file);
        let _ = writeln!(out, "  disposition: {}", report.result.disposition);

        if let Some(candidate) = &report.result.candidate {
            let _ = writeln!(
                out,
                "  match:       {} (confidence {:.2})",
                candidate.assignment.title, candidate.confidence
            );
        }
        if let Some(discrepancy) = &report.result.discrepancy {
            let _ = writeln!(out, "  score check: {discrepancy}");
        }
        for suggestion in &report.result.runners_up {
            let _ = writeln!(
                out,
                "  also close:  {} ({:.2})",
                suggestion.assignment.title, suggestion.confidence
            );
        }
    }
    out
}
