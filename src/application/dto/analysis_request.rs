use crate::compliance::domain::LicensePolicy;
use crate::shared::error::LicenseError;
use crate::shared::Result;
use std::time::Duration;
use uuid::Uuid;

/// Stage name under which outcomes are stored unless configured otherwise
pub const DEFAULT_STAGE_NAME: &str = "license";

pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_millis(5000);

pub const DEFAULT_MAX_CONCURRENT_MANIFESTS: usize = 4;

/// Reference to one output of the previous pipeline stage
///
/// Kept raw: which steps are consumed and whether the key is usable is
/// decided by the use case, so a bad reference becomes a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReference {
    /// Name of the prior step, e.g. `js-sbom`
    pub step_name: String,
    /// Key of the step's output in the results store
    pub manifest_key: Option<String>,
}

impl UpstreamReference {
    pub fn new(step_name: impl Into<String>, manifest_key: Option<String>) -> Self {
        Self {
            step_name: step_name.into(),
            manifest_key,
        }
    }
}

/// AnalysisRequest - Internal request DTO for the license analysis use case
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub analysis_id: Uuid,
    /// Stage name the outcome is stored under
    pub stage_name: String,
    pub license_policy: LicensePolicy,
    /// Prior-stage outputs, in the order they were recorded
    pub upstream: Vec<UpstreamReference>,
    pub lookup_timeout: Duration,
    pub max_concurrent_manifests: usize,
}

impl AnalysisRequest {
    pub fn builder() -> AnalysisRequestBuilder {
        AnalysisRequestBuilder::default()
    }
}

/// Builder for AnalysisRequest
#[derive(Debug, Default)]
pub struct AnalysisRequestBuilder {
    analysis_id: Option<Uuid>,
    stage_name: Option<String>,
    license_policy: LicensePolicy,
    upstream: Vec<UpstreamReference>,
    lookup_timeout: Option<Duration>,
    max_concurrent_manifests: Option<usize>,
}

impl AnalysisRequestBuilder {
    pub fn analysis_id(mut self, analysis_id: Uuid) -> Self {
        self.analysis_id = Some(analysis_id);
        self
    }

    pub fn stage_name(mut self, stage_name: impl Into<String>) -> Self {
        self.stage_name = Some(stage_name.into());
        self
    }

    pub fn license_policy(mut self, license_policy: LicensePolicy) -> Self {
        self.license_policy = license_policy;
        self
    }

    pub fn upstream(mut self, reference: UpstreamReference) -> Self {
        self.upstream.push(reference);
        self
    }

    pub fn upstream_references(mut self, references: Vec<UpstreamReference>) -> Self {
        self.upstream.extend(references);
        self
    }

    pub fn lookup_timeout(mut self, lookup_timeout: Duration) -> Self {
        self.lookup_timeout = Some(lookup_timeout);
        self
    }

    pub fn max_concurrent_manifests(mut self, max: usize) -> Self {
        self.max_concurrent_manifests = Some(max);
        self
    }

    pub fn build(self) -> Result<AnalysisRequest> {
        let analysis_id = self.analysis_id.ok_or_else(|| LicenseError::Validation {
            message: "analysis_id is required".to_string(),
        })?;

        let lookup_timeout = self.lookup_timeout.unwrap_or(DEFAULT_LOOKUP_TIMEOUT);
        if lookup_timeout.is_zero() {
            return Err(LicenseError::Validation {
                message: "lookup timeout must be greater than zero".to_string(),
            }
            .into());
        }

        let max_concurrent_manifests = self
            .max_concurrent_manifests
            .unwrap_or(DEFAULT_MAX_CONCURRENT_MANIFESTS);
        if max_concurrent_manifests == 0 {
            return Err(LicenseError::Validation {
                message: "max_concurrent_manifests must be at least 1".to_string(),
            }
            .into());
        }

        let stage_name = self
            .stage_name
            .unwrap_or_else(|| DEFAULT_STAGE_NAME.to_string());
        if stage_name.trim().is_empty() {
            return Err(LicenseError::Validation {
                message: "stage_name must not be empty".to_string(),
            }
            .into());
        }

        Ok(AnalysisRequest {
            analysis_id,
            stage_name,
            license_policy: self.license_policy,
            upstream: self.upstream,
            lookup_timeout,
            max_concurrent_manifests,
        })
    }
}
