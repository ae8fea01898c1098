use license_compliance::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// In-memory ResultsStore for testing
///
/// Clones share the same storage, so a test can keep a handle after moving
/// the store into a use case.
#[derive(Default, Clone)]
pub struct MockResultsStore {
    pub results: Arc<Mutex<HashMap<Uuid, StoredResult>>>,
    pub raw: Arc<Mutex<HashMap<Uuid, Vec<u8>>>>,
    pub fail_writes: bool,
}

impl MockResultsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an SBOM manifest and returns its key
    pub fn insert_manifest(&self, plugin: &str, manifest: serde_json::Value) -> Uuid {
        let stored = StoredResult::new(Uuid::new_v4(), plugin, manifest);
        let key = stored.id;
        self.results.lock().unwrap().insert(key, stored);
        key
    }

    /// Stores bytes that are returned verbatim on read
    pub fn insert_raw(&self, bytes: &[u8]) -> Uuid {
        let key = Uuid::new_v4();
        self.raw.lock().unwrap().insert(key, bytes.to_vec());
        key
    }

    pub fn with_write_failure(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn get(&self, key: Uuid) -> Option<StoredResult> {
        self.results.lock().unwrap().get(&key).cloned()
    }

    pub fn len(&self) -> usize {
        self.results.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl ResultsStore for MockResultsStore {
    async fn read_result(&self, key: Uuid) -> Result<Vec<u8>> {
        if let Some(bytes) = self.raw.lock().unwrap().get(&key) {
            return Ok(bytes.clone());
        }
        let results = self.results.lock().unwrap();
        let stored = results
            .get(&key)
            .ok_or_else(|| anyhow::anyhow!("Mock results store has no result {}", key))?;
        Ok(serde_json::to_vec(&stored.result)?)
    }

    async fn write_result(&self, result: &StoredResult) -> Result<()> {
        if self.fail_writes {
            anyhow::bail!("Mock results store write failure");
        }
        self.results
            .lock()
            .unwrap()
            .insert(result.id, result.clone());
        Ok(())
    }
}
