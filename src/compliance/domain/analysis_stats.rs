use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate statistics persisted with every outcome
///
/// `license_dist` is a `BTreeMap`, so its serialized order is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisStats {
    pub number_of_spdx_licenses: usize,
    pub number_of_non_spdx_licenses: usize,
    pub number_of_copy_left_licenses: usize,
    pub number_of_permissive_licenses: usize,
    pub license_dist: BTreeMap<String, usize>,
}
