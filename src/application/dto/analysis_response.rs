use crate::compliance::domain::{AnalysisOutcome, AnalysisStatus};
use serde::Serialize;
use uuid::Uuid;

/// Forward pointer handed to the next pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ForwardPointer {
    #[serde(rename = "licenseKey")]
    pub license_key: Uuid,
    pub status: AnalysisStatus,
}

/// AnalysisResponse - Internal response DTO from the license analysis use case
#[derive(Debug, Clone)]
pub struct AnalysisResponse {
    /// Key under which the outcome was persisted
    pub result_key: Uuid,
    pub outcome: AnalysisOutcome,
}

impl AnalysisResponse {
    pub fn new(result_key: Uuid, outcome: AnalysisOutcome) -> Self {
        Self {
            result_key,
            outcome,
        }
    }

    pub fn status(&self) -> AnalysisStatus {
        self.outcome.status()
    }

    pub fn forward_pointer(&self) -> ForwardPointer {
        ForwardPointer {
            license_key: self.result_key,
            status: self.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_pointer_wire_format() {
        let key = Uuid::new_v4();
        let pointer = ForwardPointer {
            license_key: key,
            status: AnalysisStatus::Success,
        };

        let json = serde_json::to_value(pointer).unwrap();
        assert_eq!(json["licenseKey"], key.to_string());
        assert_eq!(json["status"], "success");
    }
}
