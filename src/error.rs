//! Error types for the ERP export conversion.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the converter.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("XML error in {path}: {source}")]
    Xml {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    #[error("Unsupported encoding '{label}' in {path}")]
    Encoding { path: PathBuf, label: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    /// Wrap an IO error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
