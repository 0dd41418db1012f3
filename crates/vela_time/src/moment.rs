//! Validated civil date-time with a fixed UTC offset.
//!
//! `LocalMoment` is the canonical input representation: one observation
//! instant expressed in local civil time. Conversion to JD UT subtracts
//! the offset; conversion back re-applies it.

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, day_of_year, days_in_month, jd_to_calendar};

/// Civil calendar date-time with a fixed UTC offset in hours.
///
/// Construction validates every field; an instance always represents a
/// real calendar instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalMoment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
    /// UTC offset in hours, east positive (e.g. 5.5 for IST).
    pub utc_offset_hours: f64,
}

impl LocalMoment {
    /// Create a validated civil moment. Fails fast on any out-of-range field.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        utc_offset_hours: f64,
    ) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidMonth(month));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDay(day));
        }
        if hour > 23 {
            return Err(TimeError::InvalidHour(hour));
        }
        if minute > 59 {
            return Err(TimeError::InvalidMinute(minute));
        }
        if !second.is_finite() || !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidSecond(second));
        }
        if !utc_offset_hours.is_finite() || !(-14.0..=14.0).contains(&utc_offset_hours) {
            return Err(TimeError::InvalidUtcOffset(utc_offset_hours));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_hours,
        })
    }

    /// Local time-of-day in decimal hours [0, 24).
    pub fn hour_of_day(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0 + self.second / 3600.0
    }

    /// 1-based day of year of the local calendar date.
    pub fn day_of_year(&self) -> u32 {
        day_of_year(self.year, self.month, self.day)
    }

    /// Julian Date (UT) of this instant.
    pub fn to_jd_ut(&self) -> f64 {
        let day_frac = self.day as f64 + (self.hour_of_day() - self.utc_offset_hours) / 24.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Julian Date (UT) of local midnight on this calendar date.
    pub fn local_midnight_jd_ut(&self) -> f64 {
        let day_frac = self.day as f64 - self.utc_offset_hours / 24.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Reconstruct a local civil moment from JD UT and a UTC offset.
    pub fn from_jd_ut(jd_ut: f64, utc_offset_hours: f64) -> Self {
        let local_jd = jd_ut + utc_offset_hours / 24.0;
        let (year, month, day_frac) = jd_to_calendar(local_jd);
        let day = day_frac.floor() as u32;
        // Guard against 23:59:59.9999 rounding up into the next day.
        let total_seconds = (day_frac.fract() * 86_400.0).min(86_399.999);
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_hours,
        }
    }
}

impl std::fmt::Display for LocalMoment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second.floor() as u32
        )
    }
}

/// Format decimal hours as a local `HH:MM:SS` clock string, wrapped to [0, 24).
pub fn hours_to_hms(hours: f64) -> String {
    let h = hours.rem_euclid(24.0);
    let total = (h * 3600.0).round() as u64;
    // 24:00:00 wraps to 00:00:00
    let total = total % 86_400;
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}
