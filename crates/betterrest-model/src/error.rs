//! Error types for model loading and inference.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur while loading a model or running a prediction.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Failed to read a coefficients file.
    #[error("Failed to read model file '{path}': {source}")]
    Read {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Coefficients file is not valid JSON or misses a field.
    #[error("Failed to parse model: {0}")]
    Parse(#[from] serde_json::Error),

    /// Coefficients parsed but are unusable.
    #[error("Invalid model coefficients: {0}")]
    InvalidCoefficients(String),

    /// The model produced a prediction that cannot be a sleep duration.
    #[error("Model produced an invalid prediction: {0}")]
    InvalidPrediction(f64),
}

impl ModelError {
    /// Returns true if the error happened while loading the model.
    #[must_use]
    pub const fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::Read { .. } | Self::Parse(_) | Self::InvalidCoefficients(_)
        )
    }
}
