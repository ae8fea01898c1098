pub mod analysis_outcome;
pub mod analysis_stats;
pub mod analysis_status;
pub mod dependency_key;
pub mod diagnostics;
pub mod license_policy;
pub mod manifest;
pub mod merged_report;
pub mod workspace_license_info;

pub use analysis_outcome::{AnalysisInfo, AnalysisOutcome, WorkspaceLicenseReport};
pub use analysis_stats::AnalysisStats;
pub use analysis_status::AnalysisStatus;
pub use dependency_key::DependencyKey;
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use license_policy::LicensePolicy;
pub use manifest::{DependencyMetadata, Ecosystem, ManifestWorkspace, SbomManifest};
pub use merged_report::MergedReport;
pub use workspace_license_info::{DependencyInfo, WorkspaceLicenseInfo, UNRESOLVED_LICENSE_KEY};
