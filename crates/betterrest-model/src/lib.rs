//! Pre-trained sleep regression model boundary for betterrest.
//!
//! The estimator never trains a model. It consumes one through the
//! [`RegressionModel`] trait and obtains it from a [`ModelProvider`]:
//!
//! - [`LinearModel`] - Linear model read from a JSON coefficients file
//! - [`ModelSource`] - Loads the embedded or an on-disk model on every call
//! - [`CachedProvider`] - Keeps the first successfully loaded model
//! - [`SleepFeatures`] / [`SleepPrediction`] - Model input and output
//! - [`ModelError`] - Load and inference failures

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod linear;
mod model;
mod provider;

pub use error::{ModelError, Result};
pub use linear::{Coefficients, EMBEDDED_MODEL_JSON, LinearModel};
pub use model::{RegressionModel, SleepFeatures, SleepPrediction};
pub use provider::{CachedProvider, ModelProvider, ModelSource};
