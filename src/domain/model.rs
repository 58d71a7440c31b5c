use serde::{Deserialize, Serialize};
use std::path::Path;

pub const STATUS_SUCCESS: &str = "success";
pub const REDUCTION_PERCENTAGE: u32 = 95;

/// The path handed to the optimizer. Never checked against the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshInput {
    path: String,
}

impl MeshInput {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        Path::new(&self.path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("")
    }
}

/// One line of stdout on success. Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationReport {
    pub status: String,
    pub original_poly: u64,
    pub new_poly: u64,
    pub reduction_percentage: u32,
    pub original_size: String,
    pub new_size: String,
    pub output_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub error: String,
}

impl From<&crate::utils::error::OptimizeError> for ErrorReport {
    fn from(err: &crate::utils::error::OptimizeError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::OptimizeError;

    #[test]
    fn test_file_name() {
        assert_eq!(MeshInput::new("/uploads/pump.step").file_name(), "pump.step");
        assert_eq!(MeshInput::new("pump.stp").file_name(), "pump.stp");
        assert_eq!(MeshInput::new("").file_name(), "");
    }

    #[test]
    fn test_report_key_order() {
        let report = OptimizationReport {
            status: STATUS_SUCCESS.to_string(),
            original_poly: 1_000_000,
            new_poly: 50_000,
            reduction_percentage: REDUCTION_PERCENTAGE,
            original_size: "50.00 MB".to_string(),
            new_size: "2.00 MB".to_string(),
            output_path: "a_optimized.glb".to_string(),
        };

        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"status":"success","original_poly":1000000,"new_poly":50000,"reduction_percentage":95,"original_size":"50.00 MB","new_size":"2.00 MB","output_path":"a_optimized.glb"}"#
        );
    }

    #[test]
    fn test_error_report_has_single_key() {
        let report = ErrorReport::from(&OptimizeError::MissingInput);
        let value = serde_json::to_value(&report).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["error"], "No input file provided");
    }
}
