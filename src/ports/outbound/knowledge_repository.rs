use crate::shared::error::LookupError;
use crate::shared::Result;
use async_trait::async_trait;

/// Package row of the knowledge catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    pub name: String,
    /// Declared license id, if the catalog recorded one
    pub license: Option<String>,
}

/// KnowledgeRepository port for the read-only license knowledge catalog
///
/// Implementations answer two primitive queries; the provided
/// `resolve_license` combines them into the lookup the matcher uses.
///
/// # Async Support
/// Implementations must be `Send + Sync`: manifests are matched concurrently
/// and share one repository.
#[async_trait]
pub trait KnowledgeRepository: Send + Sync {
    /// Finds a package by name
    ///
    /// # Returns
    /// `None` if the catalog has no such package
    ///
    /// # Errors
    /// Returns an error only when the backend itself fails
    async fn find_package(&self, package_name: &str) -> Result<Option<PackageRecord>>;

    /// Checks whether a license id exists in the catalog's license table
    async fn license_exists(&self, license_id: &str) -> Result<bool>;

    /// Resolves the license of a dependency
    ///
    /// One declared license per package name; `_version` is accepted so the
    /// lookup can become version-aware without changing callers.
    ///
    /// # Errors
    /// - `LookupError::NotFound` if the package is absent
    /// - `LookupError::LicenseUnresolved` if its license is missing or uncatalogued
    /// - `LookupError::Backend` if the catalog could not be queried
    async fn resolve_license(
        &self,
        package_name: &str,
        _version: &str,
    ) -> std::result::Result<String, LookupError> {
        let backend = |e: anyhow::Error| LookupError::Backend {
            package: package_name.to_string(),
            details: e.to_string(),
        };

        let record = self
            .find_package(package_name)
            .await
            .map_err(backend)?
            .ok_or_else(|| LookupError::NotFound {
                package: package_name.to_string(),
            })?;

        let license = record.license.unwrap_or_default();
        if !license.is_empty() && self.license_exists(&license).await.map_err(backend)? {
            Ok(license)
        } else {
            Err(LookupError::LicenseUnresolved {
                package: package_name.to_string(),
                license,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapCatalog {
        packages: HashMap<String, Option<String>>,
        licenses: Vec<String>,
        broken: bool,
    }

    #[async_trait]
    impl KnowledgeRepository for MapCatalog {
        async fn find_package(&self, package_name: &str) -> Result<Option<PackageRecord>> {
            if self.broken {
                anyhow::bail!("connection refused");
            }
            Ok(self.packages.get(package_name).map(|license| PackageRecord {
                name: package_name.to_string(),
                license: license.clone(),
            }))
        }

        async fn license_exists(&self, license_id: &str) -> Result<bool> {
            Ok(self.licenses.iter().any(|l| l == license_id))
        }
    }

    fn catalog() -> MapCatalog {
        let mut packages = HashMap::new();
        packages.insert("lodash".to_string(), Some("MIT".to_string()));
        packages.insert("homegrown".to_string(), Some("Custom-EULA".to_string()));
        packages.insert("bare".to_string(), None);
        MapCatalog {
            packages,
            licenses: vec!["MIT".to_string()],
            broken: false,
        }
    }

    #[tokio::test]
    async fn test_resolve_license_success() {
        let license = catalog().resolve_license("lodash", "4.17.21").await.unwrap();
        assert_eq!(license, "MIT");
    }

    #[tokio::test]
    async fn test_resolve_license_is_version_independent() {
        let catalog = catalog();
        let a = catalog.resolve_license("lodash", "1.0.0").await.unwrap();
        let b = catalog.resolve_license("lodash", "4.17.21").await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_resolve_license_not_found() {
        let err = catalog().resolve_license("pkgX", "9.9").await.unwrap_err();
        assert_eq!(
            err,
            LookupError::NotFound {
                package: "pkgX".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_resolve_license_uncatalogued() {
        let err = catalog().resolve_license("homegrown", "1.0").await.unwrap_err();
        assert!(matches!(err, LookupError::LicenseUnresolved { ref license, .. } if license == "Custom-EULA"));

        let err = catalog().resolve_license("bare", "1.0").await.unwrap_err();
        assert!(matches!(err, LookupError::LicenseUnresolved { .. }));
    }

    #[tokio::test]
    async fn test_resolve_license_backend_failure() {
        let mut broken = catalog();
        broken.broken = true;
        let err = broken.resolve_license("lodash", "1.0").await.unwrap_err();
        assert!(matches!(err, LookupError::Backend { .. }));
    }
}
