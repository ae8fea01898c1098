use serde::{Deserialize, Serialize};

/// LicensePolicy value object: the disallow-list for one run
///
/// Keeps the caller's order, drops repeated entries. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct LicensePolicy {
    disallowed: Vec<String>,
}

impl LicensePolicy {
    pub fn new<I, S>(disallowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for license in disallowed {
            let license = license.into();
            if !unique.contains(&license) {
                unique.push(license);
            }
        }
        Self { disallowed: unique }
    }

    /// Returns true if the license id is on the disallow-list (exact match)
    pub fn is_disallowed(&self, license_id: &str) -> bool {
        self.disallowed.iter().any(|l| l == license_id)
    }

    pub fn disallowed(&self) -> &[String] {
        &self.disallowed
    }

    pub fn is_empty(&self) -> bool {
        self.disallowed.is_empty()
    }
}

impl From<Vec<String>> for LicensePolicy {
    fn from(disallowed: Vec<String>) -> Self {
        Self::new(disallowed)
    }
}

impl From<LicensePolicy> for Vec<String> {
    fn from(policy: LicensePolicy) -> Self {
        policy.disallowed
    }
}
