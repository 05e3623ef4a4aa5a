//! Application error types.
//!
//! Navigation itself never fails (invalid transitions degrade to no-ops),
//! so these only surface at the edges: configuration and dataset loading.

use thiserror::Error;

/// Application-level errors for Ecoscope.
#[derive(Error, Debug)]
pub enum AppError {
    // Config errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error(
        "Camera distances must strictly decrease: ecosystem {ecosystem} > campaign {campaign} > hcp {hcp}"
    )]
    InvalidCameraDistances {
        ecosystem: f32,
        campaign: f32,
        hcp: f32,
    },

    // Dataset errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataset parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),
}

impl AppError {
    /// Short machine-readable code, used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::InvalidCameraDistances { .. } => "INVALID_CAMERA_DISTANCES",
            AppError::Io(_) => "IO_ERROR",
            AppError::Json(_) => "DATASET_PARSE_ERROR",
            AppError::InvalidDataset(_) => "INVALID_DATASET",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_distances_message() {
        let err = AppError::InvalidCameraDistances {
            ecosystem: 10.0,
            campaign: 20.0,
            hcp: 5.0,
        };
        assert_eq!(err.code(), "INVALID_CAMERA_DISTANCES");
        assert!(err.to_string().contains("ecosystem 10 > campaign 20"));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AppError = parse.into();
        assert_eq!(err.code(), "DATASET_PARSE_ERROR");
    }
}
