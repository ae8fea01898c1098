use super::WorkspaceLicenseInfo;
use std::collections::BTreeMap;

/// MergedReport aggregate: workspace name → license info, across manifests
///
/// Built incrementally by `ReportMerger` and finalized once by `ReportBuilder`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedReport {
    workspaces: BTreeMap<String, WorkspaceLicenseInfo>,
    contributing_manifests: usize,
}

impl MergedReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn workspaces(&self) -> &BTreeMap<String, WorkspaceLicenseInfo> {
        &self.workspaces
    }

    pub(crate) fn workspaces_mut(&mut self) -> &mut BTreeMap<String, WorkspaceLicenseInfo> {
        &mut self.workspaces
    }

    pub fn workspace(&self, name: &str) -> Option<&WorkspaceLicenseInfo> {
        self.workspaces.get(name)
    }

    /// Number of manifests whose workspaces were folded in
    pub fn contributing_manifests(&self) -> usize {
        self.contributing_manifests
    }

    pub(crate) fn mark_contribution(&mut self) {
        self.contributing_manifests += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.workspaces.is_empty()
    }

    pub fn into_workspaces(self) -> BTreeMap<String, WorkspaceLicenseInfo> {
        self.workspaces
    }
}
