//! Schedule command implementation.
//!
//! Prints the bedtime for a range of sleep goals, keeping the wake time and
//! coffee intake fixed.

use anyhow::Result;
use betterrest_lib::prelude::*;
use std::path::PathBuf;

use super::user_facing;
use crate::config::Config;
use crate::display::{Clock, format_duration, format_hours};

/// Raw values given for the `schedule` command.
pub(crate) struct ScheduleArgs {
    pub(crate) wake: Option<String>,
    pub(crate) coffee: Option<i64>,
    pub(crate) from: f64,
    pub(crate) to: f64,
    pub(crate) step: f64,
    pub(crate) model: Option<PathBuf>,
    pub(crate) clock: Option<Clock>,
}

/// Print a table of bedtimes for several sleep goals.
pub(crate) fn schedule(config: &Config, args: ScheduleArgs) -> Result<()> {
    let wake_time = match args.wake.as_deref() {
        Some(s) => parse_wake_time(s)?,
        None => config.defaults.wake_time()?,
    };
    let coffee_cups = match args.coffee {
        Some(c) => CoffeeCups::new(c)?,
        None => config.defaults.coffee,
    };
    let from = SleepHours::new(args.from)?;
    let to = SleepHours::new(args.to)?;
    let options = SleepHours::range(from, to, args.step)?;

    let style = args.clock.map_or(config.clock, ClockStyle::from);
    let estimator = DefaultEstimator::cached(config.model_source(args.model));
    let bedtimes = user_facing(estimator.schedule(wake_time, coffee_cups, &options))?;

    println!(
        "Wake at {} with {} of coffee\n",
        style.format(wake_time),
        coffee_cups
    );
    println!("{:<10} {:>10} {:>16}", "SLEEP", "BEDTIME", "PREDICTED SLEEP");
    println!("{}", "-".repeat(38));
    for (sleep, bedtime) in options.iter().zip(&bedtimes) {
        println!(
            "{:<10} {:>10} {:>16}",
            format_hours(*sleep),
            bedtime.format(style),
            format_duration(bedtime.sleep_needed()),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(from: f64, to: f64, step: f64) -> ScheduleArgs {
        ScheduleArgs {
            wake: Some("07:00".to_string()),
            coffee: Some(1),
            from,
            to,
            step,
            model: None,
            clock: None,
        }
    }

    #[test]
    fn test_tiny_step_refused() {
        let err = schedule(&Config::default(), args(0.0, 14.0, 1e-300)).unwrap_err();
        assert!(err.to_string().contains("Invalid sleep range"));
    }

    #[test]
    fn test_reversed_range_refused() {
        let err = schedule(&Config::default(), args(10.0, 6.0, 0.5)).unwrap_err();
        assert!(err.to_string().contains("must not exceed"));
    }

    #[test]
    fn test_non_positive_step_refused() {
        assert!(schedule(&Config::default(), args(6.0, 10.0, 0.0)).is_err());
        assert!(schedule(&Config::default(), args(6.0, 10.0, f64::NAN)).is_err());
    }
}
