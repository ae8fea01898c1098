use crate::compliance::domain::{AnalysisStats, WorkspaceLicenseInfo};
use std::collections::BTreeMap;

/// StatsAggregator service deriving summary counts from internal workspace maps
pub struct StatsAggregator;

impl StatsAggregator {
    /// Computes statistics over workspace license info
    ///
    /// License ids are counted per workspace and summed; the same id used in
    /// two workspaces counts twice. Copyleft/permissive counts stay zero
    /// until the catalog carries a license classification.
    pub fn aggregate(workspaces: &BTreeMap<String, WorkspaceLicenseInfo>) -> AnalysisStats {
        let mut stats = AnalysisStats::default();

        for info in workspaces.values() {
            for (license_id, dependents) in &info.licenses_dep_map {
                *stats.license_dist.entry(license_id.clone()).or_insert(0) += dependents.len();
            }
            stats.number_of_spdx_licenses += info.licenses_dep_map.len();
            stats.number_of_non_spdx_licenses += info.unresolved_dep_map.len();
        }

        stats
    }
}
