//! Bedtime estimation logic.

use betterrest_model::{CachedProvider, ModelProvider, ModelSource, RegressionModel, SleepFeatures};
use betterrest_types::{Bedtime, CoffeeCups, SleepHours, UserInput, wake_seconds};
use chrono::NaiveTime;

use crate::EstimationError;

/// Estimator that loads the model once and reuses it.
pub type DefaultEstimator = Estimator<CachedProvider<ModelSource>>;

/// Computes recommended bedtimes with a pre-trained sleep model.
#[derive(Debug)]
pub struct Estimator<P = ModelSource> {
    provider: P,
}

impl<P: ModelProvider> Estimator<P> {
    /// Creates an estimator backed by the given model provider.
    #[must_use]
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns the model provider.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Estimates the bedtime for a wake time, sleep goal and coffee intake.
    ///
    /// The model is obtained from the provider on every call. The predicted
    /// sleep duration is subtracted from the wake time, wrapping around
    /// midnight.
    ///
    /// # Errors
    ///
    /// Returns an [`EstimationError`] if the model cannot be loaded or cannot
    /// produce a usable prediction. No partial result is produced.
    pub fn estimate(
        &self,
        wake_time: NaiveTime,
        sleep_hours: SleepHours,
        coffee_cups: CoffeeCups,
    ) -> Result<Bedtime, EstimationError> {
        let features = SleepFeatures::new(
            f64::from(wake_seconds(wake_time)),
            sleep_hours.hours(),
            f64::from(coffee_cups.cups()),
        );

        let model = self.provider.load().map_err(|e| {
            tracing::warn!(error = %e, "failed to load sleep model");
            EstimationError::model_load(e)
        })?;

        let prediction = model.predict(&features).map_err(|e| {
            tracing::warn!(model = model.name(), error = %e, "sleep model inference failed");
            EstimationError::inference(e)
        })?;

        let bedtime = Bedtime::before_wake(wake_time, prediction.as_duration());
        tracing::debug!(
            model = model.name(),
            wake_seconds = features.wake_seconds,
            sleep_hours = features.estimated_sleep,
            coffee_cups = features.coffee,
            predicted_sleep_seconds = prediction.actual_sleep_seconds,
            bedtime = %bedtime.time(),
            "estimated bedtime"
        );

        Ok(bedtime)
    }

    /// Estimates the bedtime for a complete form submission.
    ///
    /// # Errors
    ///
    /// See [`Estimator::estimate`].
    pub fn estimate_input(&self, input: &UserInput) -> Result<Bedtime, EstimationError> {
        self.estimate(input.wake_time, input.sleep_hours, input.coffee_cups)
    }

    /// Estimates one bedtime per sleep goal, keeping wake time and coffee fixed.
    ///
    /// # Errors
    ///
    /// Returns the first [`EstimationError`] encountered.
    pub fn schedule(
        &self,
        wake_time: NaiveTime,
        coffee_cups: CoffeeCups,
        sleep_options: &[SleepHours],
    ) -> Result<Vec<Bedtime>, EstimationError> {
        sleep_options
            .iter()
            .map(|&sleep| self.estimate(wake_time, sleep, coffee_cups))
            .collect()
    }
}

impl Estimator<CachedProvider<ModelSource>> {
    /// Creates an estimator that loads the model from `source` once.
    #[must_use]
    pub const fn cached(source: ModelSource) -> Self {
        Self::new(CachedProvider::new(source))
    }
}

impl Estimator<ModelSource> {
    /// Creates an estimator that parses the bundled model on every call.
    #[must_use]
    pub const fn embedded() -> Self {
        Self::new(ModelSource::Embedded)
    }
}

impl Default for Estimator<ModelSource> {
    fn default() -> Self {
        Self::embedded()
    }
}
