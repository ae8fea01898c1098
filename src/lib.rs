//! license-compliance - License resolution and compliance merge engine
//!
//! This library resolves the license of every dependency recorded by earlier
//! SBOM stages of an analysis pipeline, checks each one against a policy of
//! disallowed licenses, and merges the per-workspace results of all manifests
//! into one persisted outcome with summary statistics.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`compliance`): Domain models and pure services
//! - **Application Layer** (`application`): The analysis use case and its DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use license_compliance::prelude::*;
//! use std::path::Path;
//!
//! # async fn example() -> Result<()> {
//! // Create adapters
//! let results_store = FileSystemResultsStore::open("results")?;
//! let catalog = JsonKnowledgeCatalog::load(Path::new("knowledge.json"))?;
//! let knowledge = CachingKnowledgeRepository::new(catalog);
//!
//! // Create use case
//! let use_case = AnalyzeLicensesUseCase::new(results_store, knowledge, TracingProgressReporter);
//!
//! // Execute
//! let request = load_request_from_path(Path::new("run.yml"))?;
//! let response = use_case.execute(request).await?;
//! println!("{}", serde_json::to_string(&response.forward_pointer())?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod compliance;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::cache::CachingKnowledgeRepository;
    pub use crate::adapters::outbound::console::TracingProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemResultsStore, JsonKnowledgeCatalog};
    pub use crate::application::dto::{
        AnalysisRequest, AnalysisResponse, ForwardPointer, UpstreamReference,
    };
    pub use crate::application::use_cases::AnalyzeLicensesUseCase;
    pub use crate::compliance::domain::{
        AnalysisOutcome, AnalysisStats, AnalysisStatus, DependencyKey, Diagnostic,
        DiagnosticKind, LicensePolicy, SbomManifest, WorkspaceLicenseInfo,
        UNRESOLVED_LICENSE_KEY,
    };
    pub use crate::compliance::services::{
        LicenseMatcher, ManifestOutcome, MergeResult, ReportBuilder, ReportMerger,
        StatsAggregator,
    };
    pub use crate::config::load_request_from_path;
    pub use crate::ports::inbound::LicenseAnalysisPort;
    pub use crate::ports::outbound::{
        KnowledgeRepository, PackageRecord, ProgressReporter, ResultsStore, StoredResult,
    };
    pub use crate::shared::error::{ExitCode, LicenseError, LookupError};
    pub use crate::shared::Result;
}
