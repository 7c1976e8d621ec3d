//! Core types for the betterrest bedtime calculator.
//!
//! This crate provides the data structures shared by every betterrest crate:
//!
//! - [`SleepHours`] - Desired sleep duration, validated to `[0, 14]` hours
//! - [`CoffeeCups`] - Daily coffee intake, validated to `[0, 20]` cups
//! - [`UserInput`] - One form submission (wake time, sleep, coffee)
//! - [`Bedtime`] - A computed bedtime with the predicted sleep duration
//! - [`ClockStyle`] - 12-hour or 24-hour display of a time-of-day

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bedtime;
mod clock;
mod error;
mod input;

pub use bedtime::Bedtime;
pub use clock::{ClockStyle, ClockStyleParseError, parse_wake_time, wake_seconds};
pub use error::{InputError, Result};
pub use input::{CoffeeCups, MAX_RANGE_STEPS, SleepHours, UserInput};
