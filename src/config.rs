//! Run configuration for a license analysis.
//!
//! A run is described by a YAML document naming the analysis, the policy and
//! the outputs of the previous pipeline steps. This module holds the schema,
//! file loading, and validation.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use uuid::Uuid;

use crate::application::dto::{AnalysisRequest, UpstreamReference};
use crate::compliance::domain::{Ecosystem, LicensePolicy};
use crate::shared::error::LicenseError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;

/// Top-level run configuration schema.
#[derive(Debug, Deserialize, Default)]
pub struct RunConfig {
    pub analysis_id: Option<String>,
    pub stage_name: Option<String>,
    pub license_policy: Option<Vec<String>>,
    pub lookup_timeout_ms: Option<u64>,
    pub max_concurrent_manifests: Option<usize>,
    #[serde(default)]
    pub previous_steps: Vec<PreviousStep>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// One recorded output of an earlier pipeline step.
///
/// `result` stays untyped: every step shapes its own output, and only SBOM
/// steps are read here.
#[derive(Debug, Deserialize)]
pub struct PreviousStep {
    pub name: String,
    #[serde(default)]
    pub result: serde_yaml_ng::Value,
}

impl PreviousStep {
    /// The `sbomKey` recorded by this step, if any.
    ///
    /// A non-string key is rendered as YAML so the run reports it as an
    /// invalid reference instead of rejecting the whole configuration.
    pub fn sbom_key(&self) -> Option<String> {
        match self.result.get("sbomKey")? {
            serde_yaml_ng::Value::Null => None,
            serde_yaml_ng::Value::String(key) => Some(key.clone()),
            other => Some(
                serde_yaml_ng::to_string(other)
                    .map(|rendered| rendered.trim_end().to_string())
                    .unwrap_or_else(|_| format!("{:?}", other)),
            ),
        }
    }
}

impl RunConfig {
    /// Converts the validated configuration into a use-case request.
    ///
    /// Keys of SBOM steps are passed through untouched; unusable keys are
    /// reported per manifest during the run. Other steps are listed without a
    /// key and never inspected.
    pub fn into_request(self) -> Result<AnalysisRequest> {
        let analysis_id = parse_analysis_id(self.analysis_id.as_deref())?;

        let mut builder = AnalysisRequest::builder()
            .analysis_id(analysis_id)
            .license_policy(LicensePolicy::new(self.license_policy.unwrap_or_default()))
            .upstream_references(
                self.previous_steps
                    .into_iter()
                    .map(|step| {
                        let key = Ecosystem::from_step_name(&step.name)
                            .and_then(|_| step.sbom_key());
                        UpstreamReference::new(step.name, key)
                    })
                    .collect(),
            );

        if let Some(stage_name) = self.stage_name {
            builder = builder.stage_name(stage_name);
        }
        if let Some(ms) = self.lookup_timeout_ms {
            builder = builder.lookup_timeout(Duration::from_millis(ms));
        }
        if let Some(max) = self.max_concurrent_manifests {
            builder = builder.max_concurrent_manifests(max);
        }

        builder.build()
    }
}

/// Load the run configuration from a path and turn it into a request.
pub fn load_request_from_path(path: &Path) -> Result<AnalysisRequest> {
    let config = load_config_from_path(path)?;
    config.into_request().map_err(|e| {
        LicenseError::Config {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<RunConfig> {
    let config_error = |details: String| LicenseError::Config {
        path: path.to_path_buf(),
        details,
    };

    let content =
        read_regular_file(path, "run configuration").map_err(|e| config_error(e.to_string()))?;

    let config: RunConfig = serde_yaml_ng::from_slice(&content)
        .map_err(|e| config_error(format!("Invalid YAML: {}", e)))?;

    validate_config(&config).map_err(config_error)?;
    warn_unknown_fields(&config);

    Ok(config)
}

fn parse_analysis_id(raw: Option<&str>) -> Result<Uuid> {
    let raw = raw.ok_or_else(|| LicenseError::Validation {
        message: "analysis_id is required".to_string(),
    })?;
    Uuid::parse_str(raw.trim()).map_err(|e| {
        LicenseError::Validation {
            message: format!("analysis_id '{}' is not a UUID: {}", raw, e),
        }
        .into()
    })
}

/// Validate the loaded configuration.
fn validate_config(config: &RunConfig) -> std::result::Result<(), String> {
    if let Err(e) = parse_analysis_id(config.analysis_id.as_deref()) {
        return Err(e.to_string());
    }
    if config.lookup_timeout_ms == Some(0) {
        return Err("lookup_timeout_ms must be greater than 0".to_string());
    }
    if config.max_concurrent_manifests == Some(0) {
        return Err("max_concurrent_manifests must be at least 1".to_string());
    }
    if let Some(ref policy) = config.license_policy {
        if let Some(i) = policy.iter().position(|id| id.trim().is_empty()) {
            return Err(format!("license_policy[{}] must not be empty", i));
        }
    }
    for (i, step) in config.previous_steps.iter().enumerate() {
        if step.name.trim().is_empty() {
            return Err(format!("previous_steps[{}].name must not be empty", i));
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &RunConfig) {
    for key in config.unknown_fields.keys() {
        tracing::warn!("Unknown config field '{}' will be ignored.", key);
    }
}
