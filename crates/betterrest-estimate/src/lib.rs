//! Bedtime estimation for the betterrest bedtime calculator.
//!
//! - [`Estimator`] - Turns a wake time, sleep goal and coffee intake into a [`Bedtime`]
//! - [`EstimationError`] - The single, user-facing failure of an estimate
//! - [`EstimationFailure`] - Coarse cause of a failure (model load or inference)
//!
//! [`Bedtime`]: betterrest_types::Bedtime

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod estimator;

pub use error::{ESTIMATION_ERROR_MESSAGE, EstimationError, EstimationFailure};
pub use estimator::{DefaultEstimator, Estimator};
