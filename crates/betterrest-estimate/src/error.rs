//! Estimation failure.

use betterrest_model::ModelError;
use thiserror::Error;

/// Message shown to the user whenever an estimate fails.
pub const ESTIMATION_ERROR_MESSAGE: &str = "Sorry, there was a problem calculating your bedtime.";

/// Coarse cause of an estimation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EstimationFailure {
    /// The regression model could not be loaded.
    ModelLoad,
    /// The model was loaded but could not produce a usable prediction.
    Inference,
}

impl EstimationFailure {
    /// Returns the failure kind as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ModelLoad => "model load",
            Self::Inference => "inference",
        }
    }
}

impl std::fmt::Display for EstimationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A bedtime could not be computed.
///
/// `Display` yields only [`ESTIMATION_ERROR_MESSAGE`]. The model error that
/// caused it stays reachable through [`std::error::Error::source`].
#[derive(Error, Debug)]
#[error("{}", ESTIMATION_ERROR_MESSAGE)]
pub struct EstimationError {
    kind: EstimationFailure,
    source: ModelError,
}

impl EstimationError {
    /// Wraps a model error raised while loading the model.
    #[must_use]
    pub const fn model_load(source: ModelError) -> Self {
        Self {
            kind: EstimationFailure::ModelLoad,
            source,
        }
    }

    /// Wraps a model error raised during inference.
    #[must_use]
    pub const fn inference(source: ModelError) -> Self {
        Self {
            kind: EstimationFailure::Inference,
            source,
        }
    }

    /// Returns the coarse failure kind.
    #[must_use]
    pub const fn kind(&self) -> EstimationFailure {
        self.kind
    }

    /// Returns the static user-facing message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        ESTIMATION_ERROR_MESSAGE
    }

    /// Returns the underlying model error.
    #[must_use]
    pub const fn cause(&self) -> &ModelError {
        &self.source
    }
}
