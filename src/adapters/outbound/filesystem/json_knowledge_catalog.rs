use crate::ports::outbound::{KnowledgeRepository, PackageRecord};
use crate::shared::error::LicenseError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// On-disk layout of the knowledge catalog
///
/// ```json
/// { "packages": { "left-pad": "MIT" }, "licenses": ["MIT", "Apache-2.0"] }
/// ```
///
/// A package mapped to `null` is known but has no declared license.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDocument {
    #[serde(default)]
    packages: HashMap<String, Option<String>>,
    #[serde(default)]
    licenses: HashSet<String>,
}

/// JsonKnowledgeCatalog adapter serving lookups from a JSON snapshot
///
/// The whole catalog is loaded once at startup and is read-only afterwards.
#[derive(Debug, Default)]
pub struct JsonKnowledgeCatalog {
    packages: HashMap<String, Option<String>>,
    licenses: HashSet<String>,
}

impl JsonKnowledgeCatalog {
    /// Loads the catalog from a JSON file
    ///
    /// # Errors
    /// Returns `LicenseError::FileReadError` if the file cannot be read or decoded
    pub fn load(path: &Path) -> Result<Self> {
        let read_error = |details: String| LicenseError::FileReadError {
            path: path.to_path_buf(),
            details,
        };

        let bytes =
            read_regular_file(path, "knowledge catalog").map_err(|e| read_error(e.to_string()))?;
        let catalog = Self::from_slice(&bytes).map_err(|e| read_error(e.to_string()))?;

        tracing::info!(
            path = %path.display(),
            packages = catalog.packages.len(),
            licenses = catalog.licenses.len(),
            "knowledge catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_slice(bytes)
            .map_err(|e| anyhow::anyhow!("Invalid knowledge catalog: {}", e))?;
        Ok(Self {
            packages: document.packages,
            licenses: document.licenses,
        })
    }

    pub fn package_count(&self) -> usize {
        self.packages.len()
    }
}

#[async_trait]
impl KnowledgeRepository for JsonKnowledgeCatalog {
    async fn find_package(&self, package_name: &str) -> Result<Option<PackageRecord>> {
        Ok(self
            .packages
            .get(package_name)
            .map(|license| PackageRecord {
                name: package_name.to_string(),
                license: license.clone(),
            }))
    }

    async fn license_exists(&self, license_id: &str) -> Result<bool> {
        Ok(self.licenses.contains(license_id))
    }
}
