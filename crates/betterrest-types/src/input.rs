//! Validated form inputs.

use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::{InputError, wake_seconds};

/// Desired sleep duration in hours, always within `[0, 14]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SleepHours(f64);

impl SleepHours {
    /// Smallest accepted sleep duration.
    pub const MIN: f64 = 0.0;
    /// Largest accepted sleep duration.
    pub const MAX: f64 = 14.0;

    /// Creates a validated sleep duration.
    ///
    /// # Errors
    ///
    /// Returns an error if `hours` is not finite or lies outside `[0, 14]`.
    pub fn new(hours: f64) -> Result<Self, InputError> {
        if !hours.is_finite() || !(Self::MIN..=Self::MAX).contains(&hours) {
            return Err(InputError::SleepHoursOutOfRange {
                value: hours,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(hours))
    }

    /// Returns the duration in hours.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Builds evenly spaced sleep goals from `from` to `to` inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidRange`] if `step` is not a positive finite
    /// number, if `from > to`, or if the range would hold more than
    /// [`MAX_RANGE_STEPS`] goals.
    pub fn range(from: Self, to: Self, step: f64) -> Result<Vec<Self>, InputError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(InputError::InvalidRange(format!(
                "step must be a positive number of hours, got {step}"
            )));
        }
        if from > to {
            return Err(InputError::InvalidRange(format!(
                "start ({from}) must not exceed end ({to})"
            )));
        }

        // Integer step count avoids accumulating float error.
        let steps = ((to.0 - from.0) / step + 1e-9).floor();
        if steps >= MAX_RANGE_STEPS as f64 {
            return Err(InputError::InvalidRange(format!(
                "step {step} yields more than {MAX_RANGE_STEPS} sleep goals"
            )));
        }

        // Clamped to `to`, so every goal stays within `[from, to]`.
        Ok((0..=steps as usize)
            .map(|i| Self((from.0 + step * i as f64).min(to.0)))
            .collect())
    }
}

/// Largest number of goals [`SleepHours::range`] will produce (one per minute over 14 hours).
pub const MAX_RANGE_STEPS: usize = 14 * 60 + 1;

impl Default for SleepHours {
    fn default() -> Self {
        Self(8.0)
    }
}

impl TryFrom<f64> for SleepHours {
    type Error = InputError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SleepHours> for f64 {
    fn from(value: SleepHours) -> Self {
        value.0
    }
}

impl FromStr for SleepHours {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hours: f64 = s
            .trim()
            .parse()
            .map_err(|_| InputError::InvalidSleepHours(s.to_string()))?;
        Self::new(hours)
    }
}

impl std::fmt::Display for SleepHours {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 8 -> "8", 7.25 -> "7.25"
        write!(f, "{}", self.0)
    }
}

/// Daily coffee intake in cups, always within `[0, 20]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct CoffeeCups(u8);

impl CoffeeCups {
    /// Smallest accepted intake.
    pub const MIN: u8 = 0;
    /// Largest accepted intake.
    pub const MAX: u8 = 20;

    /// Creates a validated coffee intake.
    ///
    /// # Errors
    ///
    /// Returns an error if `cups` lies outside `[0, 20]`.
    pub fn new(cups: i64) -> Result<Self, InputError> {
        match u8::try_from(cups) {
            Ok(c) if c <= Self::MAX => Ok(Self(c)),
            _ => Err(InputError::CoffeeCupsOutOfRange {
                value: cups,
                min: Self::MIN,
                max: Self::MAX,
            }),
        }
    }

    /// Returns the number of cups.
    #[must_use]
    pub const fn cups(&self) -> u8 {
        self.0
    }
}

impl Default for CoffeeCups {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<i64> for CoffeeCups {
    type Error = InputError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CoffeeCups> for u8 {
    fn from(value: CoffeeCups) -> Self {
        value.0
    }
}

impl std::fmt::Display for CoffeeCups {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 == 1 {
            write!(f, "1 cup")
        } else {
            write!(f, "{} cups", self.0)
        }
    }
}

/// One bedtime form submission.
///
/// Held only for the duration of a single calculation and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserInput {
    /// Desired wake-up time. Only hour and minute are significant.
    pub wake_time: NaiveTime,
    /// Desired amount of sleep.
    pub sleep_hours: SleepHours,
    /// Daily coffee intake.
    pub coffee_cups: CoffeeCups,
}

impl UserInput {
    /// Creates a new form submission from already validated values.
    #[must_use]
    pub const fn new(wake_time: NaiveTime, sleep_hours: SleepHours, coffee_cups: CoffeeCups) -> Self {
        Self {
            wake_time,
            sleep_hours,
            coffee_cups,
        }
    }

    /// Returns the wake time as seconds since midnight (hour and minute only).
    #[must_use]
    pub fn wake_seconds(&self) -> u32 {
        wake_seconds(self.wake_time)
    }
}

impl Default for UserInput {
    fn default() -> Self {
        Self {
            wake_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap_or(NaiveTime::MIN),
            sleep_hours: SleepHours::default(),
            coffee_cups: CoffeeCups::default(),
        }
    }
}
