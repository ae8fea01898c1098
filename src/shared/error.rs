use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow pipeline hosts to distinguish a run that produced a
/// failure outcome from a run that could not produce an outcome at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The run completed and its outcome status is success
    Success = 0,
    /// The run completed but every manifest failed, outcome status is failure
    AnalysisFailed = 1,
    /// Invalid command-line arguments or run configuration
    InvalidArguments = 2,
    /// Application error (store setup, catalog loading, persistence, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::AnalysisFailed => write!(f, "Analysis Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the license compliance engine.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// Per-manifest failures are turned into diagnostics by the use case; only
/// `Config` and `Persistence` ever reach the host.
#[derive(Debug, Error)]
pub enum LicenseError {
    #[error("Invalid run configuration: {path}\nDetails: {details}\n\n💡 Hint: Please verify the configuration file against the documented schema")]
    Config { path: PathBuf, details: String },

    #[error("Failed to read manifest {key}: {details}")]
    ManifestRead { key: String, details: String },

    #[error("Failed to decode manifest {key}: {details}")]
    ManifestDecode { key: String, details: String },

    #[error("Failed to persist analysis result {key}: {details}\n\n💡 Hint: The run can be retried once the results store is writable")]
    Persistence { key: String, details: String },

    /// Validation error for value objects
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

/// Outcome of a failed knowledge lookup for a single dependency.
///
/// Every variant is recoverable: the caller records the dependency as
/// unresolved and carries on with the next one.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("package '{package}' is not present in the knowledge catalog")]
    NotFound { package: String },

    #[error("package '{package}' declares license '{license}' which is not catalogued")]
    LicenseUnresolved { package: String, license: String },

    #[error("knowledge lookup for '{package}' timed out after {timeout_ms} ms")]
    Timeout { package: String, timeout_ms: u64 },

    #[error("knowledge backend error for '{package}': {details}")]
    Backend { package: String, details: String },
}
