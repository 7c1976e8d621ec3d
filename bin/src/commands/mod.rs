//! CLI command implementations.

use anyhow::anyhow;
use betterrest_lib::prelude::EstimationError;

pub(crate) mod config;
pub(crate) mod estimate;
pub(crate) mod model;
pub(crate) mod schedule;

/// Replace an estimation failure with its static user-facing message.
///
/// The cause is logged by the estimator and never reaches the terminal.
pub(crate) fn user_facing<T>(result: Result<T, EstimationError>) -> anyhow::Result<T> {
    result.map_err(|e| anyhow!(e.message()))
}
