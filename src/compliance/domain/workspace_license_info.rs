use super::DependencyKey;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Bucket key under which dependencies without a resolvable license are kept
pub const UNRESOLVED_LICENSE_KEY: &str = "";

/// Licenses of a single dependency
///
/// `licenses` holds catalog-confirmed ids. `non_spdx_licenses` holds the
/// bucket keys the dependency was filed under when it could not be resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyInfo {
    pub licenses: Vec<String>,
    #[serde(default)]
    pub non_spdx_licenses: Vec<String>,
}

/// WorkspaceLicenseInfo - license usage of one workspace
///
/// Violations keep the dependents that caused them; the persisted report
/// only needs the license ids (see `WorkspaceLicenseReport`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceLicenseInfo {
    pub licenses_dep_map: BTreeMap<String, BTreeSet<DependencyKey>>,
    pub unresolved_dep_map: BTreeMap<String, BTreeSet<DependencyKey>>,
    pub license_compliance_violations: BTreeMap<String, BTreeSet<DependencyKey>>,
    pub dependency_info: BTreeMap<DependencyKey, DependencyInfo>,
}

impl WorkspaceLicenseInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `key` uses `license_id`, and flags the violation if disallowed
    pub fn record_license(&mut self, key: DependencyKey, license_id: &str, disallowed: bool) {
        self.licenses_dep_map
            .entry(license_id.to_string())
            .or_default()
            .insert(key.clone());

        if disallowed {
            self.license_compliance_violations
                .entry(license_id.to_string())
                .or_default()
                .insert(key.clone());
        }

        let info = self.dependency_info.entry(key).or_default();
        if !info.licenses.iter().any(|l| l == license_id) {
            info.licenses.push(license_id.to_string());
        }
    }

    /// Records that no license could be resolved for `key`
    pub fn record_unresolved(&mut self, key: DependencyKey) {
        self.unresolved_dep_map
            .entry(UNRESOLVED_LICENSE_KEY.to_string())
            .or_default()
            .insert(key.clone());

        let info = self.dependency_info.entry(key).or_default();
        if !info.non_spdx_licenses.iter().any(|l| l == UNRESOLVED_LICENSE_KEY) {
            info.non_spdx_licenses.push(UNRESOLVED_LICENSE_KEY.to_string());
        }
    }

    /// Violating license ids, sorted
    pub fn violating_licenses(&self) -> Vec<String> {
        self.license_compliance_violations.keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.licenses_dep_map.is_empty()
            && self.unresolved_dep_map.is_empty()
            && self.dependency_info.is_empty()
    }
}
