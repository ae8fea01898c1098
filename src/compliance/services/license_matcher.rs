use crate::compliance::domain::{
    DependencyKey, LicensePolicy, ManifestWorkspace, SbomManifest, WorkspaceLicenseInfo,
};
use crate::ports::outbound::KnowledgeRepository;
use crate::shared::error::LookupError;
use std::collections::BTreeMap;
use std::time::Duration;

/// LicenseMatcher service: dependency graph + policy → workspace license info
///
/// Never fails. A dependency whose lookup fails (absent, uncatalogued,
/// backend error or timeout) lands in the unresolved bucket and the next
/// dependency is processed.
pub struct LicenseMatcher<'a, K: ?Sized> {
    knowledge: &'a K,
    policy: &'a LicensePolicy,
    lookup_timeout: Duration,
}

impl<'a, K> LicenseMatcher<'a, K>
where
    K: KnowledgeRepository + ?Sized,
{
    pub fn new(knowledge: &'a K, policy: &'a LicensePolicy, lookup_timeout: Duration) -> Self {
        Self {
            knowledge,
            policy,
            lookup_timeout,
        }
    }

    /// Matches every workspace of a manifest
    pub async fn match_manifest(
        &self,
        manifest: &SbomManifest,
    ) -> BTreeMap<String, WorkspaceLicenseInfo> {
        let mut workspaces = BTreeMap::new();
        for (name, workspace) in &manifest.workspaces {
            workspaces.insert(name.clone(), self.match_workspace(workspace).await);
        }
        workspaces
    }

    /// Matches one workspace's dependency graph against the catalog and policy
    pub async fn match_workspace(&self, workspace: &ManifestWorkspace) -> WorkspaceLicenseInfo {
        let mut info = WorkspaceLicenseInfo::new();

        for key in workspace.dependency_keys() {
            match self.lookup(&key).await {
                Ok(license_id) => {
                    let disallowed = self.policy.is_disallowed(&license_id);
                    info.record_license(key, &license_id, disallowed);
                }
                Err(e) => {
                    match &e {
                        LookupError::Timeout { .. } | LookupError::Backend { .. } => {
                            tracing::warn!(dependency = %key, error = %e, "license lookup failed");
                        }
                        _ => {
                            tracing::debug!(dependency = %key, error = %e, "unable to resolve license");
                        }
                    }
                    info.record_unresolved(key);
                }
            }
        }

        info
    }

    async fn lookup(&self, key: &DependencyKey) -> Result<String, LookupError> {
        let lookup = self.knowledge.resolve_license(key.name(), key.version());
        match tokio::time::timeout(self.lookup_timeout, lookup).await {
            Ok(result) => result,
            Err(_) => Err(LookupError::Timeout {
                package: key.name().to_string(),
                timeout_ms: self.lookup_timeout.as_millis() as u64,
            }),
        }
    }
}
