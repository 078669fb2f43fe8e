//! Reconciliation orchestrator.
//!
//! Sequences the pipeline for one document end to end:
//!
//! ```text
//! Received -> Parsed -> { Duplicate | Candidate-Search }
//! Candidate-Search -> { AutoMatched | NeedsReview | Unmatched }
//! ```
//!
//! Terminal states only; no state is ever re-entered and the service is
//! stateless across documents. This is the one component that crosses
//! into I/O, through the [`AssignmentCatalog`] and [`ScanStore`]
//! capability traits, so the whole pipeline tests offline against
//! fixtures.

use super::dedup;
use super::discrepancy;
use super::matcher::{AssignmentMatcher, MatchDecision};
use super::parser::FieldParser;
use crate::config::HomeroomConfig;
use crate::models::{
    DateWindow, Disposition, ExtractedText, ParsedFields, RawScanInput, ReconciliationResult,
    StudentId,
};
use crate::storage::{AssignmentCatalog, ScanStore};
use crate::{Error, Result};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::instrument;

/// Orchestrates reconciliation of scanned documents.
///
/// # Example
///
/// ```rust,ignore
/// let service = ReconcileService::new(catalog, store, HomeroomConfig::default());
/// let result = service.reconcile(&student, &scan, &text)?;
/// assert_eq!(result.disposition, Disposition::AutoMatched);
/// ```
pub struct ReconcileService<C, S>
where
    C: AssignmentCatalog,
    S: ScanStore,
{
    catalog: C,
    store: S,
    parser: FieldParser,
    matcher: AssignmentMatcher,
    config: HomeroomConfig,
}

impl<C, S> ReconcileService<C, S>
where
    C: AssignmentCatalog,
    S: ScanStore,
{
    /// Creates a service over the given collaborators.
    #[must_use]
    pub fn new(catalog: C, store: S, config: HomeroomConfig) -> Self {
        Self {
            catalog,
            store,
            parser: FieldParser::new(config.parser.clone()),
            matcher: AssignmentMatcher::new(config.matcher.clone()),
            config,
        }
    }

    /// Reconciles one document end to end and persists the outcome.
    ///
    /// # Errors
    ///
    /// Fails only on structurally unprocessable input (empty scan
    /// bytes) or a collaborator I/O failure. Every recoverable
    /// ambiguity resolves to a conservative disposition instead.
    #[instrument(skip_all, fields(scan_id = %scan.id, student = %student))]
    pub fn reconcile(
        &self,
        student: &StudentId,
        scan: &RawScanInput,
        text: &ExtractedText,
    ) -> Result<ReconciliationResult> {
        let known = self.store.known_fingerprints(student)?;
        let result = self.analyze(student, scan, text, &known)?;
        self.store.record(student, &result, scan)?;
        tracing::info!(disposition = %result.disposition, "Reconciled scan");
        Ok(result)
    }

    /// Runs the pipeline without persisting: parse, fingerprint,
    /// duplicate check against `known`, candidate search, discrepancy.
    ///
    /// Split out so batch mode can analyze concurrently and commit
    /// serially.
    fn analyze(
        &self,
        student: &StudentId,
        scan: &RawScanInput,
        text: &ExtractedText,
        known: &HashSet<crate::models::ContentFingerprint>,
    ) -> Result<ReconciliationResult> {
        if scan.bytes.is_empty() {
            return Err(Error::InvalidInput(format!(
                "scan {} has no bytes",
                scan.id
            )));
        }

        // Received -> Parsed: the parser is total, this cannot fail.
        let parsed = self.parser.parse(&text.text);
        let fingerprint = dedup::fingerprint(&scan.bytes);

        // Duplicate detection takes priority over match quality: a
        // rescan of an already-processed paper must never re-enter the
        // review queue, even if it would score a perfect match.
        if dedup::is_duplicate(&fingerprint, known) {
            tracing::info!(fingerprint = %fingerprint.short(), "Duplicate scan");
            return Ok(ReconciliationResult::duplicate(scan.id.clone(), fingerprint));
        }

        let window = self.candidate_window(&parsed, scan);
        let candidates = self.catalog.list_assignments(student, None, Some(window))?;
        let mut ranked = self.matcher.rank(&parsed, &candidates);

        match self.matcher.select(&ranked) {
            MatchDecision::NoCandidates => Ok(ReconciliationResult::unmatched(
                scan.id.clone(),
                fingerprint,
            )),
            decision @ (MatchDecision::AutoMatch | MatchDecision::Review) => {
                let disposition = if decision == MatchDecision::AutoMatch {
                    Disposition::AutoMatched
                } else {
                    Disposition::NeedsReview
                };
                let best = ranked.remove(0);
                ranked.truncate(self.config.matcher.max_suggestions);

                // Attached for the caregiver's review; never changes
                // the disposition.
                let discrepancy = discrepancy::evaluate(
                    parsed.score.as_ref().map(|s| s.value.points),
                    parsed.score.as_ref().and_then(|s| s.value.max),
                    best.assignment.recorded_score,
                    Some(best.assignment.points_possible),
                );

                Ok(ReconciliationResult::matched(
                    scan.id.clone(),
                    disposition,
                    best,
                    ranked,
                    discrepancy,
                    fingerprint,
                ))
            },
        }
    }

    /// Catalog search window: centered on the parsed date with double
    /// the matcher's date tolerance either side, else a trailing window
    /// ending at the scan's arrival date.
    fn candidate_window(&self, parsed: &ParsedFields, scan: &RawScanInput) -> DateWindow {
        let tolerance = self.config.matcher.date_tolerance_days;
        parsed.date.as_ref().map_or_else(
            || {
                DateWindow::trailing(
                    scan.received_at.date_naive(),
                    self.config.matcher.fallback_window_days,
                )
            },
            |date| DateWindow::around(date.value, tolerance * 2),
        )
    }
}

impl<C, S> ReconcileService<C, S>
where
    C: AssignmentCatalog + 'static,
    S: ScanStore + 'static,
{
    /// Reconciles a batch of documents, e.g. one inbox sweep.
    ///
    /// The analysis phase (parse, fingerprint, candidate search,
    /// ranking) runs concurrently per document; the commit phase is
    /// serialized in arrival order so duplicate detection always sees
    /// the fingerprints of earlier-committed documents in the same
    /// batch. When two identical photos arrive together the first one
    /// committed wins and the later one is reclassified `Duplicate`.
    ///
    /// # Errors
    ///
    /// Returns the first analysis or persistence error; documents
    /// analyzed before the failure are not committed out of order.
    #[instrument(skip_all, fields(student = %student, batch_size = documents.len()))]
    pub async fn reconcile_batch(
        self: &Arc<Self>,
        student: &StudentId,
        documents: Vec<(RawScanInput, ExtractedText)>,
    ) -> Result<Vec<ReconciliationResult>> {
        let known = self.store.known_fingerprints(student)?;

        let mut tasks = tokio::task::JoinSet::new();
        for (index, (scan, text)) in documents.iter().cloned().enumerate() {
            let service = Arc::clone(self);
            let student = student.clone();
            let known = known.clone();
            tasks.spawn_blocking(move || {
                let result = service.analyze(&student, &scan, &text, &known)?;
                Ok::<_, Error>((index, result))
            });
        }

        let mut analyzed: Vec<Option<ReconciliationResult>> = vec![None; documents.len()];
        while let Some(joined) = tasks.join_next().await {
            let (index, result) = joined.map_err(|e| Error::OperationFailed {
                operation: "batch_analyze".to_string(),
                cause: e.to_string(),
            })??;
            analyzed[index] = Some(result);
        }

        // Commit serially in arrival order; first committed fingerprint
        // wins.
        let mut committed: HashSet<_> = known;
        let mut results = Vec::with_capacity(documents.len());
        for (slot, (scan, _)) in analyzed.into_iter().zip(&documents) {
            let Some(mut result) = slot else {
                // Unreachable: every index is filled or the loop above
                // returned an error.
                continue;
            };
            if result.disposition != Disposition::Duplicate
                && committed.contains(&result.fingerprint)
            {
                result = result.into_duplicate();
            }
            self.store.record(student, &result, scan)?;
            committed.insert(result.fingerprint.clone());
            results.push(result);
        }
        Ok(results)
    }
}
