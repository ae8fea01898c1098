use super::{AnalysisStats, AnalysisStatus, DependencyInfo, DependencyKey, Diagnostic};
use super::WorkspaceLicenseInfo;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Persisted view of one workspace
///
/// Violations are reduced to the sorted list of violating license ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceLicenseReport {
    pub licenses_dep_map: BTreeMap<String, BTreeSet<DependencyKey>>,
    pub non_spdx_licenses_dep_map: BTreeMap<String, BTreeSet<DependencyKey>>,
    pub license_compliance_violations: Vec<String>,
    pub dependency_info: BTreeMap<DependencyKey, DependencyInfo>,
}

impl From<WorkspaceLicenseInfo> for WorkspaceLicenseReport {
    fn from(info: WorkspaceLicenseInfo) -> Self {
        let license_compliance_violations = info.violating_licenses();
        Self {
            licenses_dep_map: info.licenses_dep_map,
            non_spdx_licenses_dep_map: info.unresolved_dep_map,
            license_compliance_violations,
            dependency_info: info.dependency_info,
        }
    }
}

/// Status, diagnostics, timing and statistics of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInfo {
    pub status: AnalysisStatus,
    pub errors: Vec<Diagnostic>,
    pub analysis_start_time: String,
    pub analysis_end_time: String,
    /// Elapsed seconds
    pub analysis_delta_time: f64,
    pub stats: AnalysisStats,
}

/// AnalysisOutcome - the unit persisted in the results store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub workspaces: BTreeMap<String, WorkspaceLicenseReport>,
    pub analysis_info: AnalysisInfo,
}

impl AnalysisOutcome {
    pub fn status(&self) -> AnalysisStatus {
        self.analysis_info.status
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.analysis_info.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_from_info_truncates_violations() {
        let mut info = WorkspaceLicenseInfo::new();
        info.record_license(DependencyKey::new("b", "1"), "GPL-3.0-only", true);
        info.record_license(DependencyKey::new("a", "1"), "AGPL-3.0-only", true);
        info.record_license(DependencyKey::new("c", "1"), "MIT", false);
        info.record_unresolved(DependencyKey::new("x", "9.9"));

        let report = WorkspaceLicenseReport::from(info);

        assert_eq!(
            report.license_compliance_violations,
            vec!["AGPL-3.0-only", "GPL-3.0-only"]
        );
        assert_eq!(report.licenses_dep_map.len(), 3);
        assert_eq!(report.non_spdx_licenses_dep_map[""].len(), 1);
        assert_eq!(report.dependency_info.len(), 4);
    }

    #[test]
    fn test_report_serializes_keys_as_strings() {
        let mut info = WorkspaceLicenseInfo::new();
        info.record_license(DependencyKey::new("lodash", "4.17.21"), "MIT", false);

        let json = serde_json::to_value(WorkspaceLicenseReport::from(info)).unwrap();
        assert_eq!(json["licenses_dep_map"]["MIT"][0], "lodash@4.17.21");
        assert_eq!(
            json["dependency_info"]["lodash@4.17.21"]["licenses"][0],
            "MIT"
        );
        assert_eq!(
            json["dependency_info"]["lodash@4.17.21"]["non_spdx_licenses"],
            serde_json::json!([])
        );
    }

    #[test]
    fn test_unresolved_dependency_info_persists_and_reads_back() {
        let mut info = WorkspaceLicenseInfo::new();
        info.record_unresolved(DependencyKey::new("string-width-cjs", "npm:string-width@4.2.3"));
        let report = WorkspaceLicenseReport::from(info);

        let json = serde_json::to_value(&report).unwrap();
        let entry = &json["dependency_info"]["string-width-cjs@npm:string-width@4.2.3"];
        assert_eq!(entry["licenses"], serde_json::json!([]));
        assert_eq!(entry["non_spdx_licenses"], serde_json::json!([""]));

        let back: WorkspaceLicenseReport = serde_json::from_value(json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_dependency_info_without_non_spdx_field_still_reads() {
        let info: DependencyInfo = serde_json::from_str(r#"{"licenses":["MIT"]}"#).unwrap();
        assert_eq!(info.licenses, vec!["MIT"]);
        assert!(info.non_spdx_licenses.is_empty());
    }
}
