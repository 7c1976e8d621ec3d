//! Time-of-day parsing and display.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::InputError;

/// Accepted wake time layouts, tried in order.
const WAKE_TIME_FORMATS: &[&str] = &["%H:%M", "%H:%M:%S", "%I:%M %p", "%I:%M%p"];

/// How a time-of-day is rendered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ClockStyle {
    /// 24-hour clock, e.g. `22:35`.
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHour,
    /// 12-hour clock with AM/PM, e.g. `10:35 PM`.
    #[serde(rename = "12h")]
    TwelveHour,
}

impl ClockStyle {
    /// Returns the style identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TwentyFourHour => "24h",
            Self::TwelveHour => "12h",
        }
    }

    /// Formats a time-of-day as hour and minute, without seconds.
    #[must_use]
    pub fn format(&self, time: NaiveTime) -> String {
        match self {
            Self::TwentyFourHour => time.format("%H:%M").to_string(),
            Self::TwelveHour => time.format("%-I:%M %p").to_string(),
        }
    }
}

impl std::fmt::Display for ClockStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown clock style.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown clock style: {0}. Valid options: 12h, 24h")]
pub struct ClockStyleParseError(String);

impl FromStr for ClockStyle {
    type Err = ClockStyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "24h" | "24" => Ok(Self::TwentyFourHour),
            "12h" | "12" => Ok(Self::TwelveHour),
            _ => Err(ClockStyleParseError(s.to_string())),
        }
    }
}

/// Parses a wake time such as `07:00` or `7:00 AM`.
///
/// # Errors
///
/// Returns [`InputError::InvalidWakeTime`] if no accepted layout matches.
pub fn parse_wake_time(s: &str) -> Result<NaiveTime, InputError> {
    let trimmed = s.trim().to_uppercase();
    WAKE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(&trimmed, fmt).ok())
        .ok_or_else(|| InputError::InvalidWakeTime(s.to_string()))
}

/// Converts a time-of-day to seconds since midnight.
///
/// Seconds and sub-seconds are ignored: only hour and minute count.
#[must_use]
pub fn wake_seconds(time: NaiveTime) -> u32 {
    time.hour() * 3600 + time.minute() * 60
}
