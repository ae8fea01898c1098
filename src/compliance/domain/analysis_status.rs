use serde::{Deserialize, Serialize};
use std::fmt;

/// Status reported by a pipeline stage, ours or an upstream SBOM producer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    Success,
    Failure,
}

impl AnalysisStatus {
    pub fn is_success(self) -> bool {
        matches!(self, AnalysisStatus::Success)
    }
}

impl fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisStatus::Success => write!(f, "success"),
            AnalysisStatus::Failure => write!(f, "failure"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&AnalysisStatus::Success).unwrap(),
            "\"success\""
        );
        let status: AnalysisStatus = serde_json::from_str("\"failure\"").unwrap();
        assert_eq!(status, AnalysisStatus::Failure);
        assert!(!status.is_success());
    }
}
