//! Computed bedtime.

use std::time::Duration;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::{ClockStyle, InputError, wake_seconds};

const SECONDS_PER_DAY: i64 = 86_400;

/// A recommended bedtime for a given wake time.
///
/// Deserialization recomputes the bedtime from `wake_time` and
/// `sleep_needed_secs` and rejects records whose `time` or `day_offset`
/// disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBedtime")]
pub struct Bedtime {
    /// Time-of-day to go to sleep, truncated to the minute.
    time: NaiveTime,
    /// The wake time this bedtime was computed for.
    wake_time: NaiveTime,
    /// Predicted actual sleep needed, in whole seconds.
    sleep_needed_secs: u64,
    /// Calendar offset of the bedtime relative to the wake day (0 = same day, -1 = day before).
    day_offset: i64,
}

impl Bedtime {
    /// Computes a bedtime by subtracting `sleep_needed` from the wake time.
    ///
    /// The result wraps around midnight and is truncated to the minute.
    #[must_use]
    pub fn before_wake(wake_time: NaiveTime, sleep_needed: Duration) -> Self {
        let sleep_needed_secs = sleep_needed.as_secs();
        let wake = i64::from(wake_seconds(wake_time));
        let diff = wake - i64::try_from(sleep_needed_secs).unwrap_or(i64::MAX / 2);

        let day_offset = diff.div_euclid(SECONDS_PER_DAY);
        let secs_of_day = diff.rem_euclid(SECONDS_PER_DAY);
        let minutes = (secs_of_day / 60) as u32;
        let time = NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).unwrap_or(NaiveTime::MIN);

        Self {
            time,
            wake_time,
            sleep_needed_secs,
            day_offset,
        }
    }

    /// Returns the bedtime as a time-of-day.
    #[must_use]
    pub const fn time(&self) -> NaiveTime {
        self.time
    }

    /// Returns the wake time the bedtime was computed for.
    #[must_use]
    pub const fn wake_time(&self) -> NaiveTime {
        self.wake_time
    }

    /// Returns the predicted sleep needed.
    #[must_use]
    pub const fn sleep_needed(&self) -> Duration {
        Duration::from_secs(self.sleep_needed_secs)
    }

    /// Returns the day offset relative to the wake day.
    #[must_use]
    pub const fn day_offset(&self) -> i64 {
        self.day_offset
    }

    /// Returns true if the bedtime falls on an earlier calendar day than the wake time.
    #[must_use]
    pub const fn is_previous_day(&self) -> bool {
        self.day_offset < 0
    }

    /// Returns true if the bedtime lies strictly before the wake time on the timeline.
    #[must_use]
    pub fn precedes_wake(&self) -> bool {
        let wake = self.wake_time.with_second(0).unwrap_or(self.wake_time);
        (self.day_offset, self.time) < (0, wake)
    }

    /// Formats the bedtime for display.
    #[must_use]
    pub fn format(&self, style: ClockStyle) -> String {
        style.format(self.time)
    }

    /// Formats a one-line sentence announcing the bedtime.
    #[must_use]
    pub fn summary(&self, style: ClockStyle) -> String {
        format!("Your ideal bedtime is {}", self.format(style))
    }
}

#[derive(Deserialize)]
struct RawBedtime {
    time: NaiveTime,
    wake_time: NaiveTime,
    sleep_needed_secs: u64,
    day_offset: i64,
}

impl TryFrom<RawBedtime> for Bedtime {
    type Error = InputError;

    fn try_from(raw: RawBedtime) -> Result<Self, Self::Error> {
        let bedtime = Self::before_wake(raw.wake_time, Duration::from_secs(raw.sleep_needed_secs));
        if bedtime.time != raw.time || bedtime.day_offset != raw.day_offset {
            return Err(InputError::InvalidBedtime(format!(
                "{} (day {}) is not {}s before {}",
                raw.time, raw.day_offset, raw.sleep_needed_secs, raw.wake_time
            )));
        }
        Ok(bedtime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_before_wake_previous_day() {
        // 8h 24m 44s before 07:00
        let bedtime = Bedtime::before_wake(t(7, 0), Duration::from_secs(30_284));

        assert_eq!(bedtime.time(), t(22, 35));
        assert_eq!(bedtime.day_offset(), -1);
        assert!(bedtime.is_previous_day());
        assert!(bedtime.precedes_wake());
        assert_eq!(bedtime.sleep_needed(), Duration::from_secs(30_284));
    }

    #[test]
    fn test_before_wake_same_day() {
        let bedtime = Bedtime::before_wake(t(14, 30), Duration::from_secs(3 * 3600));

        assert_eq!(bedtime.time(), t(11, 30));
        assert_eq!(bedtime.day_offset(), 0);
        assert!(bedtime.precedes_wake());
    }

    #[test]
    fn test_before_wake_truncates_seconds() {
        let bedtime = Bedtime::before_wake(t(7, 0), Duration::from_secs(59));
        assert_eq!(bedtime.time(), t(6, 59));

        let bedtime = Bedtime::before_wake(t(7, 0), Duration::from_secs(1));
        assert_eq!(bedtime.time(), t(6, 59));
    }

    #[test]
    fn test_zero_duration_does_not_precede_wake() {
        let bedtime = Bedtime::before_wake(t(7, 0), Duration::ZERO);
        assert_eq!(bedtime.time(), t(7, 0));
        assert!(!bedtime.precedes_wake());
    }

    #[test]
    fn test_multi_day_wraps() {
        let bedtime = Bedtime::before_wake(t(7, 0), Duration::from_secs(2 * 86_400 + 3600));
        assert_eq!(bedtime.time(), t(6, 0));
        assert_eq!(bedtime.day_offset(), -2);
    }

    #[test]
    fn test_format_and_summary() {
        let bedtime = Bedtime::before_wake(t(7, 0), Duration::from_secs(30_284));

        assert_eq!(bedtime.format(ClockStyle::TwentyFourHour), "22:35");
        assert_eq!(bedtime.format(ClockStyle::TwelveHour), "10:35 PM");
        assert_eq!(
            bedtime.summary(ClockStyle::TwentyFourHour),
            "Your ideal bedtime is 22:35"
        );
    }

    #[test]
    fn test_serialize() {
        let bedtime = Bedtime::before_wake(t(7, 0), Duration::from_secs(30_284));
        let json = serde_json::to_value(bedtime).unwrap();

        assert_eq!(json["time"], "22:35:00");
        assert_eq!(json["wake_time"], "07:00:00");
        assert_eq!(json["sleep_needed_secs"], 30_284);
        assert_eq!(json["day_offset"], -1);
    }

    #[test]
    fn test_deserialize_accepts_computed_bedtime() {
        let bedtime = Bedtime::before_wake(t(7, 0), Duration::from_secs(30_284));
        let json = serde_json::to_string(&bedtime).unwrap();

        let parsed: Bedtime = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, bedtime);
        assert!(parsed.precedes_wake());
    }

    #[test]
    fn test_deserialize_rejects_inconsistent_bedtime() {
        // Seconds on the bedtime.
        let with_seconds = r#"{"time":"22:35:30","wake_time":"07:00:00","sleep_needed_secs":30284,"day_offset":-1}"#;
        assert!(serde_json::from_str::<Bedtime>(with_seconds).is_err());

        // Day offset that does not follow from the subtraction.
        let wrong_day = r#"{"time":"22:35:00","wake_time":"07:00:00","sleep_needed_secs":30284,"day_offset":5}"#;
        let err = serde_json::from_str::<Bedtime>(wrong_day).unwrap_err();
        assert!(err.to_string().contains("Invalid bedtime"));

        // Time that does not match the sleep needed.
        let wrong_time = r#"{"time":"23:00:00","wake_time":"07:00:00","sleep_needed_secs":30284,"day_offset":-1}"#;
        assert!(serde_json::from_str::<Bedtime>(wrong_time).is_err());
    }
}
