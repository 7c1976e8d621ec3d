//! betterrest CLI - Recommends a bedtime from a pre-trained sleep model.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod display;
mod logging;

use commands::estimate::EstimateArgs;
use commands::schedule::ScheduleArgs;
use config::Config;
use display::Clock;

#[derive(Parser)]
#[command(name = "betterrest")]
#[command(about = "Find the bedtime that gets you the sleep you actually need", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress log output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate your ideal bedtime
    Estimate {
        /// Desired wake-up time (HH:MM or H:MM AM/PM)
        #[arg(short, long)]
        wake: Option<String>,

        /// Desired amount of sleep in hours (0-14)
        #[arg(short, long)]
        sleep: Option<f64>,

        /// Daily coffee intake in cups (0-20)
        #[arg(short, long)]
        coffee: Option<i64>,

        /// Coefficients file to use instead of the embedded model
        #[arg(short, long)]
        model: Option<PathBuf>,

        /// Clock style for the displayed bedtime
        #[arg(long, value_enum)]
        clock: Option<Clock>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Never prompt; use configured defaults for missing values
        #[arg(long)]
        no_input: bool,
    },

    /// Show bedtimes for a range of sleep goals
    Schedule {
        /// Desired wake-up time (HH:MM or H:MM AM/PM)
        #[arg(short, long)]
        wake: Option<String>,

        /// Daily coffee intake in cups (0-20)
        #[arg(short, long)]
        coffee: Option<i64>,

        /// Smallest sleep goal in hours
        #[arg(long, default_value = "6")]
        from: f64,

        /// Largest sleep goal in hours
        #[arg(long, default_value = "10")]
        to: f64,

        /// Step between sleep goals in hours
        #[arg(long, default_value = "0.5")]
        step: f64,

        /// Coefficients file to use instead of the embedded model
        #[arg(short, long)]
        model: Option<PathBuf>,

        /// Clock style for the displayed bedtimes
        #[arg(long, value_enum)]
        clock: Option<Clock>,
    },

    /// Show the sleep model and its coefficients
    Model {
        /// Coefficients file to inspect instead of the configured model
        #[arg(short, long)]
        model: Option<PathBuf>,
    },

    /// Show the effective configuration
    Config {
        /// Print only the configuration file path
        #[arg(long)]
        path: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet)?;

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = Config::load(cli.config.as_deref())?;

    match command {
        Commands::Estimate {
            wake,
            sleep,
            coffee,
            model,
            clock,
            json,
            no_input,
        } => commands::estimate::estimate(
            &config,
            EstimateArgs {
                wake,
                sleep,
                coffee,
                model,
                clock,
                json,
                no_input,
            },
        ),
        Commands::Schedule {
            wake,
            coffee,
            from,
            to,
            step,
            model,
            clock,
        } => commands::schedule::schedule(
            &config,
            ScheduleArgs {
                wake,
                coffee,
                from,
                to,
                step,
                model,
                clock,
            },
        ),
        Commands::Model { model } => commands::model::show_model(&config.model_source(model)),
        Commands::Config { path } => {
            commands::config::show_config(&config, cli.config.as_deref(), path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_estimate_flags() {
        let cli = Cli::parse_from([
            "betterrest", "estimate", "--wake", "07:00", "--sleep", "8", "--coffee", "1",
            "--clock", "12h", "--no-input",
        ]);

        match cli.command {
            Some(Commands::Estimate {
                wake,
                sleep,
                coffee,
                no_input,
                ..
            }) => {
                assert_eq!(wake.as_deref(), Some("07:00"));
                assert_eq!(sleep, Some(8.0));
                assert_eq!(coffee, Some(1));
                assert!(no_input);
            }
            _ => panic!("expected estimate command"),
        }
    }
}
