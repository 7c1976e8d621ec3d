//! Estimate command implementation.
//!
//! Collects the wake time, sleep goal and coffee intake (from flags, prompts
//! or configured defaults) and prints the recommended bedtime.

use anyhow::{Context, Result};
use betterrest_lib::prelude::*;
use inquire::{CustomType, Text};
use std::io::IsTerminal;
use std::path::PathBuf;

use super::user_facing;
use crate::config::Config;
use crate::display::{BedtimeReport, Clock, format_duration};

/// Raw values given for the `estimate` command.
pub(crate) struct EstimateArgs {
    pub(crate) wake: Option<String>,
    pub(crate) sleep: Option<f64>,
    pub(crate) coffee: Option<i64>,
    pub(crate) model: Option<PathBuf>,
    pub(crate) clock: Option<Clock>,
    pub(crate) json: bool,
    pub(crate) no_input: bool,
}

/// Estimate and print a bedtime.
pub(crate) fn estimate(config: &Config, mut args: EstimateArgs) -> Result<()> {
    if !args.no_input && !args.json && std::io::stdin().is_terminal() {
        prompt_missing(config, &mut args)?;
    }

    let input = resolve_input(config, args.wake.as_deref(), args.sleep, args.coffee)?;
    let style = args.clock.map_or(config.clock, ClockStyle::from);
    let estimator = Estimator::new(config.model_source(args.model));

    let bedtime = user_facing(estimator.estimate_input(&input))?;

    if args.json {
        let report = BedtimeReport::new(&input, &bedtime, style);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", bedtime.summary(style));
        println!(
            "Predicted sleep needed: {}",
            format_duration(bedtime.sleep_needed())
        );
    }

    Ok(())
}

/// Ask for any input not given on the command line.
fn prompt_missing(config: &Config, args: &mut EstimateArgs) -> Result<()> {
    if args.wake.is_none() {
        let wake = Text::new("When do you want to wake up?")
            .with_default(&config.defaults.wake)
            .with_help_message("HH:MM or H:MM AM/PM")
            .prompt()
            .context("Failed to read wake time")?;
        args.wake = Some(wake);
    }

    if args.sleep.is_none() {
        let sleep = CustomType::<f64>::new("Desired amount of sleep (hours)?")
            .with_default(config.defaults.sleep.hours())
            .with_help_message("Between 0 and 14, in quarter hours if you like")
            .with_error_message("Please enter a number of hours")
            .prompt()
            .context("Failed to read sleep amount")?;
        args.sleep = Some(sleep);
    }

    if args.coffee.is_none() {
        let coffee = CustomType::<i64>::new("Daily coffee intake (cups)?")
            .with_default(i64::from(config.defaults.coffee.cups()))
            .with_help_message("Between 0 and 20")
            .with_error_message("Please enter a whole number of cups")
            .prompt()
            .context("Failed to read coffee intake")?;
        args.coffee = Some(coffee);
    }

    Ok(())
}

/// Validate the given values, filling gaps from the configured defaults.
fn resolve_input(
    config: &Config,
    wake: Option<&str>,
    sleep: Option<f64>,
    coffee: Option<i64>,
) -> Result<UserInput> {
    let wake_time = match wake {
        Some(s) => parse_wake_time(s)?,
        None => config.defaults.wake_time()?,
    };
    let sleep_hours = match sleep {
        Some(h) => SleepHours::new(h)?,
        None => config.defaults.sleep,
    };
    let coffee_cups = match coffee {
        Some(c) => CoffeeCups::new(c)?,
        None => config.defaults.coffee,
    };

    Ok(UserInput::new(wake_time, sleep_hours, coffee_cups))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_resolve_input_from_flags() {
        let config = Config::default();
        let input = resolve_input(&config, Some("6:15 AM"), Some(7.25), Some(4)).unwrap();

        assert_eq!(input.wake_time, NaiveTime::from_hms_opt(6, 15, 0).unwrap());
        assert_eq!(input.sleep_hours, SleepHours::new(7.25).unwrap());
        assert_eq!(input.coffee_cups.cups(), 4);
    }

    #[test]
    fn test_resolve_input_defaults() {
        let config = Config::default();
        let input = resolve_input(&config, None, None, None).unwrap();

        assert_eq!(input, UserInput::default());
    }

    #[test]
    fn test_resolve_input_rejects_out_of_range() {
        let config = Config::default();

        assert!(resolve_input(&config, None, Some(14.5), None).is_err());
        assert!(resolve_input(&config, None, None, Some(21)).is_err());
        assert!(resolve_input(&config, Some("24:30"), None, None).is_err());
    }

    #[test]
    fn test_resolve_input_accepts_boundaries() {
        let config = Config::default();

        assert!(resolve_input(&config, None, Some(0.0), Some(20)).is_ok());
        assert!(resolve_input(&config, None, Some(14.0), Some(0)).is_ok());
    }
}
