use crate::ports::outbound::{ResultsStore, StoredResult};
use crate::shared::error::LicenseError;
use crate::shared::security::{read_regular_file, validate_not_symlink};
use crate::shared::Result;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// FileSystemResultsStore adapter keeping one JSON envelope per result
///
/// Layout: `<root>/<uuid>.json`, each file a serialized `StoredResult`.
/// Writes go through a temporary sibling and a rename, so a reader never
/// observes a half-written result.
pub struct FileSystemResultsStore {
    root: PathBuf,
}

impl FileSystemResultsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Opens a store rooted at an existing directory
    ///
    /// # Errors
    /// Returns an error if `root` is missing, a symlink, or not a directory
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        validate_not_symlink(&root, "results store")?;
        if !root.is_dir() {
            anyhow::bail!("Results store {} is not a directory", root.display());
        }
        Ok(Self::new(root))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: Uuid) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn read_envelope(path: &Path) -> Result<StoredResult> {
        let bytes = read_regular_file(path, "stored result").map_err(|e| {
            LicenseError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        serde_json::from_slice(&bytes).map_err(|e| {
            anyhow::anyhow!("Stored result {} is not a valid envelope: {}", path.display(), e)
        })
    }

    fn write_envelope(path: &Path, result: &StoredResult) -> Result<()> {
        let write_error = |details: String| LicenseError::FileWriteError {
            path: path.to_path_buf(),
            details,
        };

        if fs::symlink_metadata(path).is_ok() {
            validate_not_symlink(path, "write").map_err(|e| write_error(e.to_string()))?;
        }

        let json = serde_json::to_vec_pretty(result)
            .map_err(|e| write_error(format!("Failed to serialize result: {}", e)))?;

        let staging = path.with_extension("json.tmp");
        fs::write(&staging, json).map_err(|e| write_error(e.to_string()))?;
        fs::rename(&staging, path).map_err(|e| {
            let _ = fs::remove_file(&staging);
            write_error(e.to_string())
        })?;

        Ok(())
    }
}

#[async_trait]
impl ResultsStore for FileSystemResultsStore {
    async fn read_result(&self, key: Uuid) -> Result<Vec<u8>> {
        let path = self.path_for(key);
        let envelope = tokio::task::spawn_blocking(move || Self::read_envelope(&path)).await??;

        Ok(serde_json::to_vec(&envelope.result)?)
    }

    async fn write_result(&self, result: &StoredResult) -> Result<()> {
        let key = result.id;
        let path = self.path_for(key);
        let owned = result.clone();
        tokio::task::spawn_blocking(move || Self::write_envelope(&path, &owned)).await??;

        tracing::debug!(%key, plugin = %result.plugin, "result written");
        Ok(())
    }
}
