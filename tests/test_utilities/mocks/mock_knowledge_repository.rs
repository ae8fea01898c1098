use license_compliance::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Mock KnowledgeRepository for testing
///
/// Every license given to `with_license` is also registered in the license
/// table; `with_uncatalogued_license` skips that step.
#[derive(Default)]
pub struct MockKnowledgeRepository {
    pub packages: HashMap<String, Option<String>>,
    pub licenses: HashSet<String>,
    pub should_fail: bool,
    pub delay: Option<Duration>,
    pub lookups: Arc<AtomicUsize>,
}

impl MockKnowledgeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_license(mut self, package: &str, license: &str) -> Self {
        self.packages
            .insert(package.to_string(), Some(license.to_string()));
        self.licenses.insert(license.to_string());
        self
    }

    pub fn with_uncatalogued_license(mut self, package: &str, license: &str) -> Self {
        self.packages
            .insert(package.to_string(), Some(license.to_string()));
        self
    }

    pub fn with_no_license(mut self, package: &str) -> Self {
        self.packages.insert(package.to_string(), None);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl KnowledgeRepository for MockKnowledgeRepository {
    async fn find_package(&self, package_name: &str) -> Result<Option<PackageRecord>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.should_fail {
            anyhow::bail!("Mock knowledge repository failure");
        }

        Ok(self.packages.get(package_name).map(|license| PackageRecord {
            name: package_name.to_string(),
            license: license.clone(),
        }))
    }

    async fn license_exists(&self, license_id: &str) -> Result<bool> {
        Ok(self.licenses.contains(license_id))
    }
}
