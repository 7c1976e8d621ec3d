//! Display utilities and output formatting for the betterrest CLI.

use betterrest_lib::prelude::*;
use clap::ValueEnum;
use serde::Serialize;
use std::time::Duration;

/// Clock style accepted on the command line.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Clock {
    /// 24-hour clock (22:35)
    #[value(name = "24h")]
    H24,
    /// 12-hour clock (10:35 PM)
    #[value(name = "12h")]
    H12,
}

impl From<Clock> for ClockStyle {
    fn from(value: Clock) -> Self {
        match value {
            Clock::H24 => Self::TwentyFourHour,
            Clock::H12 => Self::TwelveHour,
        }
    }
}

/// JSON shape printed by `estimate --json`.
#[derive(Serialize)]
pub(crate) struct BedtimeReport {
    pub(crate) bedtime: String,
    pub(crate) wake_time: String,
    pub(crate) sleep_hours: f64,
    pub(crate) coffee_cups: u8,
    pub(crate) predicted_sleep_seconds: u64,
    pub(crate) previous_day: bool,
}

impl BedtimeReport {
    /// Builds a report from an input and its bedtime.
    pub(crate) fn new(input: &UserInput, bedtime: &Bedtime, style: ClockStyle) -> Self {
        Self {
            bedtime: bedtime.format(style),
            wake_time: style.format(input.wake_time),
            sleep_hours: input.sleep_hours.hours(),
            coffee_cups: input.coffee_cups.cups(),
            predicted_sleep_seconds: bedtime.sleep_needed().as_secs(),
            previous_day: bedtime.is_previous_day(),
        }
    }
}

/// Formats a duration as hours and minutes (e.g., "8h 25m", "45m").
pub(crate) fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;

    if hours > 0 {
        if minutes > 0 {
            format!("{hours}h {minutes}m")
        } else {
            format!("{hours}h")
        }
    } else {
        format!("{minutes}m")
    }
}

/// Formats sleep hours compactly (e.g., "8h", "7.5h", "6.25h").
pub(crate) fn format_hours(hours: SleepHours) -> String {
    let h = hours.hours();
    if h.fract() == 0.0 {
        format!("{h:.0}h")
    } else {
        format!("{}h", (h * 100.0).round() / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(30)), "0m");
        assert_eq!(format_duration(Duration::from_secs(2700)), "45m");
        assert_eq!(format_duration(Duration::from_secs(3600)), "1h");
        assert_eq!(format_duration(Duration::from_secs(30_284)), "8h 24m");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(SleepHours::new(8.0).unwrap()), "8h");
        assert_eq!(format_hours(SleepHours::new(7.5).unwrap()), "7.5h");
        assert_eq!(format_hours(SleepHours::new(6.25).unwrap()), "6.25h");
    }

    #[test]
    fn test_bedtime_report() {
        let input = UserInput::default();
        let bedtime = Bedtime::before_wake(input.wake_time, Duration::from_secs(30_284));
        let report = BedtimeReport::new(&input, &bedtime, ClockStyle::TwelveHour);

        assert_eq!(report.bedtime, "10:35 PM");
        assert_eq!(report.wake_time, "7:00 AM");
        assert_eq!(report.coffee_cups, 1);
        assert!(report.previous_day);
    }
}
