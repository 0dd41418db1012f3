//! Error types for civil time validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil date-time validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Month outside [1, 12].
    InvalidMonth(u32),
    /// Day invalid for the given year/month.
    InvalidDay(u32),
    /// Hour outside [0, 23].
    InvalidHour(u32),
    /// Minute outside [0, 59].
    InvalidMinute(u32),
    /// Second outside [0, 60).
    InvalidSecond(f64),
    /// UTC offset outside [-14, +14] hours.
    InvalidUtcOffset(f64),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(m) => write!(f, "invalid month: {m} (expected 1-12)"),
            Self::InvalidDay(d) => write!(f, "invalid day of month: {d}"),
            Self::InvalidHour(h) => write!(f, "invalid hour: {h} (expected 0-23)"),
            Self::InvalidMinute(m) => write!(f, "invalid minute: {m} (expected 0-59)"),
            Self::InvalidSecond(s) => write!(f, "invalid second: {s} (expected [0, 60))"),
            Self::InvalidUtcOffset(o) => {
                write!(f, "invalid UTC offset: {o} hours (expected [-14, +14])")
            }
        }
    }
}

impl Error for TimeError {}
