use crate::compliance::domain::{AnalysisStatus, Diagnostics, MergedReport, WorkspaceLicenseInfo};
use std::collections::{BTreeMap, BTreeSet};

/// Result of processing one manifest, produced independently of all others
#[derive(Debug, Clone, Default)]
pub struct ManifestOutcome {
    /// Workspaces to merge; `None` when the manifest was skipped
    pub workspaces: Option<BTreeMap<String, WorkspaceLicenseInfo>>,
    pub diagnostics: Diagnostics,
}

impl ManifestOutcome {
    pub fn contributed(workspaces: BTreeMap<String, WorkspaceLicenseInfo>) -> Self {
        Self {
            workspaces: Some(workspaces),
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn skipped(diagnostics: impl Into<Diagnostics>) -> Self {
        Self {
            workspaces: None,
            diagnostics: diagnostics.into(),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.workspaces.is_none()
    }
}

/// Final state of a merge: status, report and everything that went wrong
#[derive(Debug, Clone)]
pub struct MergeResult {
    pub status: AnalysisStatus,
    pub report: MergedReport,
    pub diagnostics: Diagnostics,
}

/// ReportMerger service: folds per-manifest outcomes into one MergedReport
///
/// Outcomes must be absorbed one at a time; this is the single point where
/// shared state changes. Set-like fields merge by union, dependency info by
/// last write, so absorbing in recorded manifest order is reproducible.
#[derive(Debug, Default)]
pub struct ReportMerger {
    report: MergedReport,
    diagnostics: Diagnostics,
    attempted: usize,
    failed: usize,
}

impl ReportMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorbs the outcome of one attempted manifest
    pub fn absorb(&mut self, outcome: ManifestOutcome) {
        self.attempted += 1;
        self.diagnostics.merge(outcome.diagnostics);

        match outcome.workspaces {
            Some(workspaces) => {
                self.report.mark_contribution();
                Self::fold(&mut self.report, workspaces);
            }
            None => self.failed += 1,
        }
    }

    /// Folds one manifest's workspaces into the report
    pub fn fold(report: &mut MergedReport, workspaces: BTreeMap<String, WorkspaceLicenseInfo>) {
        let target = report.workspaces_mut();
        for (name, incoming) in workspaces {
            match target.get_mut(&name) {
                Some(existing) => Self::merge_workspace(existing, incoming),
                None => {
                    target.insert(name, incoming);
                }
            }
        }
    }

    /// Merges `incoming` into `existing` field by field
    ///
    /// - license → dependents, unresolved → dependents: set union
    /// - violations: set union
    /// - dependency info: the incoming entry replaces an existing one
    pub fn merge_workspace(existing: &mut WorkspaceLicenseInfo, incoming: WorkspaceLicenseInfo) {
        union_into(&mut existing.licenses_dep_map, incoming.licenses_dep_map);
        union_into(&mut existing.unresolved_dep_map, incoming.unresolved_dep_map);
        union_into(
            &mut existing.license_compliance_violations,
            incoming.license_compliance_violations,
        );
        existing.dependency_info.extend(incoming.dependency_info);
    }

    pub fn attempted(&self) -> usize {
        self.attempted
    }

    /// Applies the termination policy
    ///
    /// - nothing attempted: success with an empty report
    /// - every attempted manifest failed: failure with an empty report
    /// - otherwise success, diagnostics of failed manifests included
    pub fn finish(self) -> MergeResult {
        let all_failed = self.attempted > 0 && self.failed == self.attempted;
        if all_failed {
            MergeResult {
                status: AnalysisStatus::Failure,
                report: MergedReport::new(),
                diagnostics: self.diagnostics,
            }
        } else {
            MergeResult {
                status: AnalysisStatus::Success,
                report: self.report,
                diagnostics: self.diagnostics,
            }
        }
    }
}

fn union_into<K, V>(target: &mut BTreeMap<K, BTreeSet<V>>, incoming: BTreeMap<K, BTreeSet<V>>)
where
    K: Ord,
    V: Ord,
{
    for (key, values) in incoming {
        target.entry(key).or_default().extend(values);
    }
}
