use crate::application::dto::{AnalysisRequest, AnalysisResponse};
use crate::shared::Result;
use async_trait::async_trait;

/// LicenseAnalysisPort - Inbound port for one license analysis run
///
/// This is what the queue dispatcher (or the CLI) calls for each analysis
/// message. Per-manifest problems never surface as errors here; they are
/// recorded in the persisted outcome.
#[async_trait]
pub trait LicenseAnalysisPort {
    /// Runs the analysis and persists its outcome
    ///
    /// # Returns
    /// The forward pointer for the next stage plus the outcome itself
    ///
    /// # Errors
    /// Returns an error only if the outcome could not be persisted
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResponse>;
}
