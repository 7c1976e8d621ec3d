//! Model command implementation.
//!
//! Prints the name and coefficients of the model the estimator would use.

use anyhow::{Context, Result};
use betterrest_lib::prelude::*;

/// Show the active sleep model.
pub(crate) fn show_model(source: &ModelSource) -> Result<()> {
    let model = source
        .load()
        .with_context(|| format!("Failed to load sleep model from {source}"))?;
    let c = model.coefficients();

    println!("Model:      {}", model.name());
    println!("Source:     {source}");
    println!("\nCoefficients:");
    println!("{:<20} {:>14}", "TERM", "WEIGHT");
    println!("{}", "-".repeat(35));
    println!("{:<20} {:>14.4}", "intercept", model.intercept());
    println!("{:<20} {:>14.4}", "wake (s)", c.wake);
    println!("{:<20} {:>14.4}", "estimated sleep (h)", c.estimated_sleep);
    println!("{:<20} {:>14.4}", "coffee (cups)", c.coffee);

    Ok(())
}
