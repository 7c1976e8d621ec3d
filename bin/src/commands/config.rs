//! Config command implementation.

use anyhow::Result;
use std::path::Path;

use crate::config::Config;

/// Print the configuration file location and the effective configuration.
pub(crate) fn show_config(config: &Config, explicit: Option<&Path>, path_only: bool) -> Result<()> {
    let path = Config::path(explicit);

    if path_only {
        match path {
            Some(path) => println!("{}", path.display()),
            None => println!("(no configuration directory available)"),
        }
        return Ok(());
    }

    match path {
        Some(path) if path.exists() => println!("# {}", path.display()),
        Some(path) => println!("# {} (not found, using defaults)", path.display()),
        None => println!("# (no configuration directory available, using defaults)"),
    }
    print!("{}", config.to_toml()?);

    Ok(())
}
