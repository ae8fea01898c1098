use crate::shared::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// StoredResult - envelope of one stage output in the results store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredResult {
    pub id: Uuid,
    pub analysis_id: Uuid,
    /// Name of the stage that produced the result
    pub plugin: String,
    pub created_on: DateTime<Utc>,
    pub result: serde_json::Value,
}

impl StoredResult {
    /// Wraps a stage output under a freshly generated id
    pub fn new(analysis_id: Uuid, plugin: impl Into<String>, result: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            analysis_id,
            plugin: plugin.into(),
            created_on: Utc::now(),
            result,
        }
    }
}

/// ResultsStore port for the key-addressed store shared by pipeline stages
///
/// This stage reads upstream SBOM outputs from it and writes exactly one
/// outcome per run.
#[async_trait]
pub trait ResultsStore: Send + Sync {
    /// Reads the payload (`result` field) of a stored stage output
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the stored envelope is unreadable
    async fn read_result(&self, key: Uuid) -> Result<Vec<u8>>;

    /// Persists a stage output under `result.id`
    ///
    /// # Errors
    /// Returns an error if the write fails; callers treat this as fatal for the run
    async fn write_result(&self, result: &StoredResult) -> Result<()>;
}
