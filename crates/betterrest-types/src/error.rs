//! Error types for user input validation.

use thiserror::Error;

/// Result type alias for input validation.
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors raised when a form value falls outside its allowed range.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// Sleep duration is outside `[0, 14]` hours or not a finite number.
    #[error("Sleep hours must be between {min} and {max}, got {value}")]
    SleepHoursOutOfRange {
        /// The rejected value.
        value: f64,
        /// Smallest accepted value.
        min: f64,
        /// Largest accepted value.
        max: f64,
    },

    /// Coffee intake is outside `[0, 20]` cups.
    #[error("Coffee cups must be between {min} and {max}, got {value}")]
    CoffeeCupsOutOfRange {
        /// The rejected value.
        value: i64,
        /// Smallest accepted value.
        min: u8,
        /// Largest accepted value.
        max: u8,
    },

    /// Sleep duration string is not a number.
    #[error("Invalid sleep hours '{0}': expected a number of hours")]
    InvalidSleepHours(String),

    /// Sleep goal range cannot be stepped through.
    #[error("Invalid sleep range: {0}")]
    InvalidRange(String),

    /// Bedtime record does not follow from its wake time and sleep needed.
    #[error("Invalid bedtime: {0}")]
    InvalidBedtime(String),

    /// Wake time string could not be parsed.
    #[error("Invalid wake time '{0}': expected HH:MM or H:MM AM/PM")]
    InvalidWakeTime(String),
}
