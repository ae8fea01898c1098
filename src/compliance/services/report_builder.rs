use super::{MergeResult, StatsAggregator};
use crate::compliance::domain::{
    AnalysisInfo, AnalysisOutcome, AnalysisStats, AnalysisStatus, Diagnostics, MergedReport,
    WorkspaceLicenseReport,
};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// ReportBuilder service wrapping a merge result into the persisted outcome
///
/// Infallible by construction: every input yields a well-formed outcome.
pub struct ReportBuilder;

impl ReportBuilder {
    /// Builds the outcome of a finished merge, ending the run now
    pub fn build(result: MergeResult, start: DateTime<Utc>) -> AnalysisOutcome {
        Self::build_at(result, start, Utc::now())
    }

    /// Builds the outcome with an explicit end time
    pub fn build_at(
        result: MergeResult,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AnalysisOutcome {
        match result.status {
            AnalysisStatus::Success => {
                let stats = StatsAggregator::aggregate(result.report.workspaces());
                Self::success_output(result.report, stats, result.diagnostics, start, end)
            }
            AnalysisStatus::Failure => Self::failure_output(result.diagnostics, start, end),
        }
    }

    /// Success outcome; stats must be computed from the same report
    pub fn success_output(
        report: MergedReport,
        stats: AnalysisStats,
        diagnostics: Diagnostics,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AnalysisOutcome {
        let workspaces = report
            .into_workspaces()
            .into_iter()
            .map(|(name, info)| (name, WorkspaceLicenseReport::from(info)))
            .collect();

        AnalysisOutcome {
            workspaces,
            analysis_info: Self::analysis_info(
                AnalysisStatus::Success,
                diagnostics,
                stats,
                start,
                end,
            ),
        }
    }

    /// Failure outcome: no workspaces, zero statistics
    pub fn failure_output(
        diagnostics: Diagnostics,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AnalysisOutcome {
        AnalysisOutcome {
            workspaces: BTreeMap::new(),
            analysis_info: Self::analysis_info(
                AnalysisStatus::Failure,
                diagnostics,
                AnalysisStats::default(),
                start,
                end,
            ),
        }
    }

    fn analysis_info(
        status: AnalysisStatus,
        diagnostics: Diagnostics,
        stats: AnalysisStats,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AnalysisInfo {
        AnalysisInfo {
            status,
            errors: diagnostics.into_vec(),
            analysis_start_time: start.to_rfc3339(),
            analysis_end_time: end.to_rfc3339(),
            analysis_delta_time: elapsed_seconds(start, end),
            stats,
        }
    }
}

fn elapsed_seconds(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    let micros = (end - start).num_microseconds().unwrap_or(i64::MAX).max(0);
    micros as f64 / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::domain::{
        DependencyKey, Diagnostic, DiagnosticKind, WorkspaceLicenseInfo,
    };
    use crate::compliance::services::{ManifestOutcome, ReportMerger};
    use chrono::Duration;

    fn merged_with_mit() -> MergeResult {
        let mut info = WorkspaceLicenseInfo::new();
        info.record_license(DependencyKey::new("a", "1.0"), "MIT", true);
        let mut merger = ReportMerger::new();
        merger.absorb(ManifestOutcome::contributed(BTreeMap::from([(
            "root".to_string(),
            info,
        )])));
        merger.finish()
    }

    #[test]
    fn test_build_success_outcome() {
        let start = Utc::now();
        let end = start + Duration::milliseconds(1500);

        let outcome = ReportBuilder::build_at(merged_with_mit(), start, end);

        assert_eq!(outcome.status(), AnalysisStatus::Success);
        assert_eq!(outcome.workspaces["root"].license_compliance_violations, vec!["MIT"]);
        assert_eq!(outcome.analysis_info.stats.license_dist["MIT"], 1);
        assert!((outcome.analysis_info.analysis_delta_time - 1.5).abs() < f64::EPSILON);
        assert_eq!(outcome.analysis_info.analysis_start_time, start.to_rfc3339());
        assert_eq!(outcome.analysis_info.analysis_end_time, end.to_rfc3339());
    }

    #[test]
    fn test_build_failure_outcome_is_empty() {
        let mut merger = ReportMerger::new();
        merger.absorb(ManifestOutcome::skipped(Diagnostic::new(
            DiagnosticKind::FailedToReadPreviousStageOutput,
            "js-sbom",
            "unexpected end of input",
        )));

        let outcome = ReportBuilder::build(merger.finish(), Utc::now());

        assert_eq!(outcome.status(), AnalysisStatus::Failure);
        assert!(outcome.workspaces.is_empty());
        assert_eq!(outcome.analysis_info.stats, AnalysisStats::default());
        assert_eq!(outcome.diagnostics().len(), 1);
    }

    #[test]
    fn test_elapsed_never_negative() {
        let start = Utc::now();
        let end = start - Duration::seconds(3);
        assert_eq!(elapsed_seconds(start, end), 0.0);
    }

    #[test]
    fn test_outcome_json_shape() {
        let outcome = ReportBuilder::build(merged_with_mit(), Utc::now());
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["analysis_info"]["status"], "success");
        assert!(json["analysis_info"]["errors"].as_array().unwrap().is_empty());
        assert_eq!(json["analysis_info"]["stats"]["number_of_spdx_licenses"], 1);
        assert_eq!(
            json["workspaces"]["root"]["licenses_dep_map"]["MIT"][0],
            "a@1.0"
        );
    }
}
