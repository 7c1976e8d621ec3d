//! Linear regression model loaded from a JSON coefficients file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ModelError, RegressionModel, Result, SleepFeatures, SleepPrediction};

/// Coefficients of the bundled sleep calculator, embedded at compile time.
pub const EMBEDDED_MODEL_JSON: &str = include_str!("../data/sleep_calculator.json");

/// Per-feature weights of a [`LinearModel`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    /// Weight applied to the wake time in seconds since midnight.
    pub wake: f64,
    /// Weight applied to the desired sleep in hours.
    pub estimated_sleep: f64,
    /// Weight applied to the number of coffee cups.
    pub coffee: f64,
}

/// A pre-trained linear model predicting actual sleep in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    name: String,
    intercept: f64,
    coefficients: Coefficients,
}

impl LinearModel {
    /// Creates a linear model from its parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is not finite.
    pub fn new(name: impl Into<String>, intercept: f64, coefficients: Coefficients) -> Result<Self> {
        let model = Self {
            name: name.into(),
            intercept,
            coefficients,
        };
        model.validate()?;
        Ok(model)
    }

    /// Parses a model from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or holds non-finite values.
    pub fn from_json(json: &str) -> Result<Self> {
        let model: Self = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    /// Reads and parses a model from a coefficients file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not hold a valid model.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| ModelError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&json)
    }

    /// Parses the model bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded coefficients are invalid.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_MODEL_JSON)
    }

    /// Returns the constant term.
    #[must_use]
    pub const fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Returns the per-feature weights.
    #[must_use]
    pub const fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    fn validate(&self) -> Result<()> {
        let params = [
            ("intercept", self.intercept),
            ("wake", self.coefficients.wake),
            ("estimated_sleep", self.coefficients.estimated_sleep),
            ("coffee", self.coefficients.coffee),
        ];
        if let Some((field, value)) = params.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ModelError::InvalidCoefficients(format!(
                "{field} must be finite, got {value}"
            )));
        }
        if self.name.trim().is_empty() {
            return Err(ModelError::InvalidCoefficients(
                "name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl RegressionModel for LinearModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn predict(&self, features: &SleepFeatures) -> Result<SleepPrediction> {
        let c = &self.coefficients;
        let raw = self.intercept
            + c.wake * features.wake_seconds
            + c.estimated_sleep * features.estimated_sleep
            + c.coffee * features.coffee;
        SleepPrediction::new(raw)
    }
}
