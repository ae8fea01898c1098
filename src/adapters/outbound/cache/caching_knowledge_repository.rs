use crate::ports::outbound::{KnowledgeRepository, PackageRecord};
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// CachingKnowledgeRepository wraps a KnowledgeRepository with in-memory caches.
///
/// Both primitive queries are memoized, so `resolve_license` built on top of
/// them hits the inner repository at most once per package name and once per
/// license id. The same dependency typically appears in many workspaces and
/// manifests of a run.
///
/// Only answers are cached. Backend errors are passed through and retried on
/// the next call.
pub struct CachingKnowledgeRepository<R: KnowledgeRepository> {
    inner: R,
    packages: Arc<DashMap<String, Option<PackageRecord>>>,
    licenses: Arc<DashMap<String, bool>>,
}

impl<R: KnowledgeRepository> CachingKnowledgeRepository<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            packages: Arc::new(DashMap::new()),
            licenses: Arc::new(DashMap::new()),
        }
    }

    /// Number of cached package answers (for testing/monitoring)
    pub fn cached_packages(&self) -> usize {
        self.packages.len()
    }
}

#[async_trait]
impl<R: KnowledgeRepository> KnowledgeRepository for CachingKnowledgeRepository<R> {
    async fn find_package(&self, package_name: &str) -> Result<Option<PackageRecord>> {
        if let Some(cached) = self.packages.get(package_name) {
            return Ok(cached.clone());
        }

        let record = self.inner.find_package(package_name).await?;
        self.packages
            .insert(package_name.to_string(), record.clone());
        Ok(record)
    }

    async fn license_exists(&self, license_id: &str) -> Result<bool> {
        if let Some(cached) = self.licenses.get(license_id) {
            return Ok(*cached);
        }

        let exists = self.inner.license_exists(license_id).await?;
        self.licenses.insert(license_id.to_string(), exists);
        Ok(exists)
    }
}
