//! Regression model trait and its input/output records.

use crate::{ModelError, Result};

/// Input features fed to a sleep regression model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleepFeatures {
    /// Wake time as seconds since midnight.
    pub wake_seconds: f64,
    /// Desired sleep in hours.
    pub estimated_sleep: f64,
    /// Daily coffee intake in cups.
    pub coffee: f64,
}

impl SleepFeatures {
    /// Creates a new feature record.
    #[must_use]
    pub const fn new(wake_seconds: f64, estimated_sleep: f64, coffee: f64) -> Self {
        Self {
            wake_seconds,
            estimated_sleep,
            coffee,
        }
    }
}

/// Output of a sleep regression model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleepPrediction {
    /// Predicted actual sleep needed, in seconds.
    pub actual_sleep_seconds: f64,
}

impl SleepPrediction {
    /// Validates a raw model output.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidPrediction`] unless the value is finite and
    /// strictly positive.
    pub fn new(actual_sleep_seconds: f64) -> Result<Self> {
        if !actual_sleep_seconds.is_finite() || actual_sleep_seconds <= 0.0 {
            return Err(ModelError::InvalidPrediction(actual_sleep_seconds));
        }
        Ok(Self {
            actual_sleep_seconds,
        })
    }

    /// Returns the prediction rounded to whole seconds.
    #[must_use]
    pub fn as_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.actual_sleep_seconds.round() as u64)
    }
}

/// A pre-trained model mapping sleep features to a predicted sleep duration.
pub trait RegressionModel {
    /// Returns a human-readable model name.
    fn name(&self) -> &str;

    /// Runs inference on a single feature record.
    ///
    /// # Errors
    ///
    /// Returns an error if the model cannot produce a usable prediction.
    fn predict(&self, features: &SleepFeatures) -> Result<SleepPrediction>;
}

impl<M: RegressionModel + ?Sized> RegressionModel for &M {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn predict(&self, features: &SleepFeatures) -> Result<SleepPrediction> {
        (**self).predict(features)
    }
}
