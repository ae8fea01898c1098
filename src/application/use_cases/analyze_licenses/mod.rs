use crate::application::dto::{AnalysisRequest, AnalysisResponse, UpstreamReference};
use crate::compliance::domain::{
    AnalysisOutcome, Diagnostic, DiagnosticKind, Ecosystem, SbomManifest,
};
use crate::compliance::services::{
    LicenseMatcher, ManifestOutcome, MergeResult, ReportBuilder, ReportMerger,
};
use crate::ports::inbound::LicenseAnalysisPort;
use crate::ports::outbound::{KnowledgeRepository, ProgressReporter, ResultsStore, StoredResult};
use crate::shared::error::LicenseError;
use crate::shared::Result;
use async_trait::async_trait;
use chrono::Utc;
use futures::stream::{self, StreamExt};
use uuid::Uuid;

/// AnalyzeLicensesUseCase - Core use case for one license analysis run
///
/// Reads every recognized prior-stage SBOM, matches it against the knowledge
/// catalog and policy, merges the results per workspace and persists one
/// outcome.
///
/// # Type Parameters
/// * `RS` - ResultsStore implementation
/// * `KR` - KnowledgeRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeLicensesUseCase<RS, KR, PR> {
    results_store: RS,
    knowledge_repository: KR,
    progress_reporter: PR,
}

impl<RS, KR, PR> AnalyzeLicensesUseCase<RS, KR, PR>
where
    RS: ResultsStore,
    KR: KnowledgeRepository,
    PR: ProgressReporter,
{
    /// Creates a new AnalyzeLicensesUseCase with injected dependencies
    pub fn new(results_store: RS, knowledge_repository: KR, progress_reporter: PR) -> Self {
        Self {
            results_store,
            knowledge_repository,
            progress_reporter,
        }
    }

    /// Executes the analysis
    ///
    /// # Errors
    /// Only persistence failures are returned; everything that goes wrong
    /// with a single manifest ends up in the outcome's diagnostics.
    pub async fn execute(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        let start = Utc::now();

        // Step 1: Select the prior-stage outputs this stage consumes
        let selected = Self::select_manifests(&request.upstream);
        self.progress_reporter.report(&format!(
            "📖 Analysis {}: {} SBOM manifest(s) selected from {} prior step(s)",
            request.analysis_id,
            selected.len(),
            request.upstream.len()
        ));

        // Step 2: Match manifests concurrently, fold in recorded order
        let merge_result = self.merge_manifests(&request, selected).await;

        // Step 3: Build the outcome
        let outcome = ReportBuilder::build(merge_result, start);
        self.report_summary(&outcome);

        // Step 4: Persist
        let result_key = self.persist(&request, &outcome).await?;

        Ok(AnalysisResponse::new(result_key, outcome))
    }

    /// Keeps references to known SBOM stages, in order; others are ignored silently
    fn select_manifests(upstream: &[UpstreamReference]) -> Vec<(Ecosystem, UpstreamReference)> {
        upstream
            .iter()
            .filter_map(|reference| {
                Ecosystem::from_step_name(&reference.step_name).map(|eco| (eco, reference.clone()))
            })
            .collect()
    }

    async fn merge_manifests(
        &self,
        request: &AnalysisRequest,
        selected: Vec<(Ecosystem, UpstreamReference)>,
    ) -> MergeResult {
        let total = selected.len();
        let mut merger = ReportMerger::new();

        // `buffered` yields in input order, so the fold below is deterministic
        let mut outcomes = stream::iter(selected)
            .map(move |(ecosystem, reference)| async move {
                self.process_manifest(request, ecosystem, &reference).await
            })
            .buffered(request.max_concurrent_manifests);

        while let Some(outcome) = outcomes.next().await {
            for diagnostic in outcome.diagnostics.iter() {
                self.progress_reporter
                    .report_error(&format!("⚠️  Warning: {}", diagnostic.message));
            }
            merger.absorb(outcome);
            self.progress_reporter
                .report_progress(merger.attempted(), total, Some("manifests processed"));
        }

        merger.finish()
    }

    /// Fetches, decodes and matches one manifest; never fails
    async fn process_manifest(
        &self,
        request: &AnalysisRequest,
        ecosystem: Ecosystem,
        reference: &UpstreamReference,
    ) -> ManifestOutcome {
        let step = reference.step_name.as_str();

        let key = match Self::parse_manifest_key(reference) {
            Ok(key) => key,
            Err(diagnostic) => return ManifestOutcome::skipped(diagnostic),
        };

        let manifest = match self.fetch_manifest(key).await {
            Ok(manifest) => manifest,
            Err(e) => {
                return ManifestOutcome::skipped(
                    Diagnostic::new(
                        DiagnosticKind::FailedToReadPreviousStageOutput,
                        step,
                        format!("Error when reading {} output: {:#}", step, e),
                    )
                    .with_manifest_key(key.to_string()),
                );
            }
        };

        if !manifest.upstream_succeeded() {
            return ManifestOutcome::skipped(
                Diagnostic::new(
                    DiagnosticKind::PreviousStageFailed,
                    step,
                    format!(
                        "Execution of the previous stage ({}) was unsuccessful, upon which the current stage relies",
                        step
                    ),
                )
                .with_manifest_key(key.to_string()),
            );
        }

        tracing::debug!(
            manifest = %key,
            ecosystem = %ecosystem,
            workspaces = manifest.workspaces.len(),
            "matching manifest"
        );

        let matcher = LicenseMatcher::new(
            &self.knowledge_repository,
            &request.license_policy,
            request.lookup_timeout,
        );
        ManifestOutcome::contributed(matcher.match_manifest(&manifest).await)
    }

    fn parse_manifest_key(reference: &UpstreamReference) -> std::result::Result<Uuid, Diagnostic> {
        let step = reference.step_name.as_str();
        let raw = reference.manifest_key.as_deref().ok_or_else(|| {
            Diagnostic::new(
                DiagnosticKind::InvalidUpstreamReference,
                step,
                format!("{} output does not reference an SBOM key", step),
            )
        })?;

        Uuid::parse_str(raw).map_err(|e| {
            Diagnostic::new(
                DiagnosticKind::InvalidUpstreamReference,
                step,
                format!("{} output references an invalid SBOM key: {}", step, e),
            )
            .with_manifest_key(raw)
        })
    }

    async fn fetch_manifest(&self, key: Uuid) -> Result<SbomManifest> {
        let bytes = self
            .results_store
            .read_result(key)
            .await
            .map_err(|e| LicenseError::ManifestRead {
                key: key.to_string(),
                details: format!("{:#}", e),
            })?;

        serde_json::from_slice(&bytes).map_err(|e| {
            LicenseError::ManifestDecode {
                key: key.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn report_summary(&self, outcome: &AnalysisOutcome) {
        let stats = &outcome.analysis_info.stats;
        let violations: usize = outcome
            .workspaces
            .values()
            .map(|w| w.license_compliance_violations.len())
            .sum();

        self.progress_reporter.report_completion(&format!(
            "✅ License analysis {}: {} workspace(s), {} license(s), {} unresolved bucket(s), {} violating license(s), {} diagnostic(s)",
            outcome.status(),
            outcome.workspaces.len(),
            stats.number_of_spdx_licenses,
            stats.number_of_non_spdx_licenses,
            violations,
            outcome.diagnostics().len()
        ));
    }

    async fn persist(&self, request: &AnalysisRequest, outcome: &AnalysisOutcome) -> Result<Uuid> {
        let payload = serde_json::to_value(outcome).map_err(|e| LicenseError::Persistence {
            key: request.analysis_id.to_string(),
            details: e.to_string(),
        })?;

        let stored = StoredResult::new(request.analysis_id, request.stage_name.as_str(), payload);
        self.results_store
            .write_result(&stored)
            .await
            .map_err(|e| LicenseError::Persistence {
                key: stored.id.to_string(),
                details: format!("{:#}", e),
            })?;

        Ok(stored.id)
    }
}

#[async_trait]
impl<RS, KR, PR> LicenseAnalysisPort for AnalyzeLicensesUseCase<RS, KR, PR>
where
    RS: ResultsStore,
    KR: KnowledgeRepository,
    PR: ProgressReporter,
{
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        self.execute(request).await
    }
}
