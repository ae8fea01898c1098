use super::{AnalysisStatus, DependencyKey};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// Opaque per-version metadata carried by the SBOM; never interpreted here
pub type DependencyMetadata = serde_json::Value;

/// Ecosystems whose SBOM stages this engine knows how to consume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ecosystem {
    JavaScript,
    Php,
}

impl Ecosystem {
    /// Maps a prior pipeline step name to its ecosystem.
    ///
    /// Returns `None` for steps this engine does not consume.
    pub fn from_step_name(step_name: &str) -> Option<Self> {
        match step_name {
            "js-sbom" => Some(Ecosystem::JavaScript),
            "php-sbom" => Some(Ecosystem::Php),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Ecosystem::JavaScript => "JS",
            Ecosystem::Php => "PHP",
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// SbomManifest - the decoded output of one upstream SBOM stage
#[derive(Debug, Clone, Deserialize)]
pub struct SbomManifest {
    #[serde(default)]
    pub workspaces: BTreeMap<String, ManifestWorkspace>,
    pub analysis_info: ManifestAnalysisInfo,
}

/// The part of the upstream analysis info this stage relies on
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestAnalysisInfo {
    pub status: AnalysisStatus,
}

/// ManifestWorkspace - dependency graph of one workspace: name → version → metadata
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ManifestWorkspace {
    #[serde(default)]
    pub dependencies: BTreeMap<String, BTreeMap<String, DependencyMetadata>>,
}

impl SbomManifest {
    pub fn upstream_succeeded(&self) -> bool {
        self.analysis_info.status.is_success()
    }
}

impl ManifestWorkspace {
    /// Every (name, version) pair in the workspace, in key order
    ///
    /// Entries whose name cannot form a dependency key (empty, or with a
    /// stray `@`) are skipped with a warning.
    pub fn dependency_keys(&self) -> impl Iterator<Item = DependencyKey> + '_ {
        self.dependencies.iter().flat_map(|(name, versions)| {
            versions.keys().filter_map(move |version| {
                match DependencyKey::try_new(name.as_str(), version.as_str()) {
                    Ok(key) => Some(key),
                    Err(e) => {
                        tracing::warn!(name = %name, version = %version, error = %e, "skipping dependency");
                        None
                    }
                }
            })
        })
    }

    pub fn dependency_count(&self) -> usize {
        self.dependencies.values().map(BTreeMap::len).sum()
    }
}
