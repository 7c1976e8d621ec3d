//! User configuration loaded from a TOML file.
//!
//! The file is optional: a missing file yields [`Config::default`]. It is
//! never written by the CLI.

use anyhow::{Context, Result};
use betterrest_lib::prelude::*;
use chrono::NaiveTime;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configuration file location.
pub(crate) const CONFIG_ENV: &str = "BETTERREST_CONFIG";

/// Effective CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    /// Coefficients file to use instead of the embedded model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) model: Option<PathBuf>,
    /// How bedtimes are displayed.
    pub(crate) clock: ClockStyle,
    /// Values offered when an input is not given on the command line.
    pub(crate) defaults: Defaults,
}

/// Default form values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Defaults {
    /// Wake time as `HH:MM` or `H:MM AM/PM`.
    pub(crate) wake: String,
    /// Desired sleep in hours.
    pub(crate) sleep: SleepHours,
    /// Daily coffee intake.
    pub(crate) coffee: CoffeeCups,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            wake: "07:00".to_string(),
            sleep: SleepHours::default(),
            coffee: CoffeeCups::default(),
        }
    }
}

impl Defaults {
    /// Returns the default wake time.
    pub(crate) fn wake_time(&self) -> Result<NaiveTime> {
        parse_wake_time(&self.wake).context("Invalid default wake time in configuration")
    }
}

impl Config {
    /// Resolves the configuration file path.
    ///
    /// Precedence: explicit path, then `BETTERREST_CONFIG`, then the platform
    /// config directory (`~/.config/betterrest/config.toml` on Linux).
    pub(crate) fn path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("", "", "betterrest").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Loads the configuration, falling back to defaults if the file does not exist.
    pub(crate) fn load(explicit: Option<&Path>) -> Result<Self> {
        let Some(path) = Self::path(explicit) else {
            tracing::debug!("no configuration directory available, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            if explicit.is_some() {
                anyhow::bail!("Configuration file not found: {}", path.display());
            }
            tracing::debug!(path = %path.display(), "configuration file not found, using defaults");
            return Ok(Self::default());
        }

        Self::from_file(&path)
    }

    /// Reads and parses a configuration file.
    pub(crate) fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.defaults.wake_time()?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Returns the model source, preferring a command-line override.
    pub(crate) fn model_source(&self, override_path: Option<PathBuf>) -> ModelSource {
        ModelSource::from_path(override_path.or_else(|| self.model.clone()))
    }

    /// Renders the configuration as TOML.
    pub(crate) fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.clock, ClockStyle::TwentyFourHour);
        assert_eq!(config.defaults.wake, "07:00");
        assert_eq!(config.defaults.coffee.cups(), 1);
        assert!(config.model.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let file = write_config(
            r#"
model = "/opt/models/sleep.json"
clock = "12h"

[defaults]
wake = "6:30 AM"
sleep = 7.5
coffee = 3
"#,
        );

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.clock, ClockStyle::TwelveHour);
        assert_eq!(config.model, Some(PathBuf::from("/opt/models/sleep.json")));
        assert_eq!(
            config.defaults.wake_time().unwrap(),
            NaiveTime::from_hms_opt(6, 30, 0).unwrap()
        );
        assert_eq!(config.defaults.sleep, SleepHours::new(7.5).unwrap());
        assert_eq!(config.defaults.coffee.cups(), 3);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let file = write_config("clock = \"12h\"\n");

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.clock, ClockStyle::TwelveHour);
        assert_eq!(config.defaults, Defaults::default());
    }

    #[test]
    fn test_out_of_range_default_rejected() {
        let file = write_config("[defaults]\nsleep = 20.0\n");
        assert!(Config::from_file(file.path()).is_err());

        let file = write_config("[defaults]\ncoffee = 42\n");
        assert!(Config::from_file(file.path()).is_err());

        let file = write_config("[defaults]\nwake = \"noon\"\n");
        assert!(Config::from_file(file.path()).is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let file = write_config("colour = \"blue\"\n");
        assert!(Config::from_file(file.path()).is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_model_source_override() {
        let config = Config {
            model: Some(PathBuf::from("config.json")),
            ..Config::default()
        };

        assert_eq!(
            config.model_source(None),
            ModelSource::File(PathBuf::from("config.json"))
        );
        assert_eq!(
            config.model_source(Some(PathBuf::from("cli.json"))),
            ModelSource::File(PathBuf::from("cli.json"))
        );
        assert_eq!(Config::default().model_source(None), ModelSource::Embedded);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let rendered = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
