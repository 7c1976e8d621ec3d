//! Rust library for estimating a recommended bedtime.
//!
//! This is a facade crate that re-exports functionality from the betterrest
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use betterrest_lib::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let estimator = Estimator::cached(ModelSource::Embedded);
//! let input = UserInput::new(
//!     parse_wake_time("06:30")?,
//!     SleepHours::new(7.5)?,
//!     CoffeeCups::new(2)?,
//! );
//!
//! let bedtime = estimator.estimate_input(&input)?;
//! println!("{}", bedtime.summary(ClockStyle::TwelveHour));
//! # Ok(())
//! # }
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use betterrest_types::*;

// Re-export the model boundary
pub use betterrest_model::{
    CachedProvider, Coefficients, EMBEDDED_MODEL_JSON, LinearModel, ModelError, ModelProvider,
    ModelSource, RegressionModel, SleepFeatures, SleepPrediction,
};

// Re-export estimation
pub use betterrest_estimate::{
    DefaultEstimator, ESTIMATION_ERROR_MESSAGE, EstimationError, EstimationFailure, Estimator,
};

/// Prelude module for convenient imports.
///
/// ```
/// use betterrest_lib::prelude::*;
/// ```
pub mod prelude {
    pub use betterrest_types::{
        Bedtime, ClockStyle, CoffeeCups, InputError, SleepHours, UserInput, parse_wake_time,
    };

    pub use betterrest_model::{LinearModel, ModelError, ModelProvider, ModelSource, RegressionModel};

    pub use betterrest_estimate::{DefaultEstimator, EstimationError, EstimationFailure, Estimator};
}
