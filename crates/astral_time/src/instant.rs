//! Civil date/time with a fixed UTC offset.
//!
//! `Instant` is the sole time input of the engine. It is validated once at
//! construction and converts 1:1 to a UT Julian Day.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

/// Largest UTC offset accepted, in minutes (UTC+14 / UTC−14).
pub const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Local civil date and time plus the offset that maps it to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instant {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Minutes east of UTC (e.g. +330 for India, −300 for New York winter).
    pub utc_offset_minutes: i32,
}

impl Instant {
    /// Validated constructor.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        utc_offset_minutes: i32,
    ) -> Result<Self, TimeError> {
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(TimeError::InvalidDate { year, month, day });
        }
        if hour > 23 || minute > 59 || second > 59 {
            return Err(TimeError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        if utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(TimeError::InvalidOffset(utc_offset_minutes));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_minutes,
        })
    }

    /// UTC instant (offset zero).
    pub fn utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, TimeError> {
        Self::new(year, month, day, hour, minute, second, 0)
    }

    /// From a chrono timestamp carrying its own offset.
    pub fn from_datetime(dt: &DateTime<FixedOffset>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
            utc_offset_minutes: dt.offset().local_minus_utc() / 60,
        }
    }

    /// From a naive local timestamp and an offset in minutes.
    pub fn from_naive(local: &NaiveDateTime, utc_offset_minutes: i32) -> Result<Self, TimeError> {
        Self::new(
            local.year(),
            local.month(),
            local.day(),
            local.hour(),
            local.minute(),
            local.second(),
            utc_offset_minutes,
        )
    }

    /// Back to a chrono timestamp. `None` only for out-of-range values.
    pub fn to_datetime(&self) -> Option<DateTime<FixedOffset>> {
        let offset = FixedOffset::east_opt(self.utc_offset_minutes * 60)?;
        let naive = NaiveDate::from_ymd_opt(self.year, self.month, self.day)?
            .and_hms_opt(self.hour, self.minute, self.second)?;
        offset.from_local_datetime(&naive).single()
    }

    /// UTC offset in fractional hours.
    pub fn utc_offset_hours(&self) -> f64 {
        self.utc_offset_minutes as f64 / 60.0
    }

    /// Local civil hour as a fraction (14:30 → 14.5).
    pub fn local_hour(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0 + self.second as f64 / 3600.0
    }

    /// Universal-time Julian Day.
    pub fn julian_day(&self) -> f64 {
        let ut_hours = self.local_hour() - self.utc_offset_hours();
        calendar_to_jd(self.year, self.month, self.day as f64 + ut_hours / 24.0)
    }

    /// Rebuild a UTC instant from a Julian Day, rounded to the second.
    pub fn from_julian_day(jd: f64) -> Self {
        // Round to whole seconds first so 23:59:59.9999 does not produce 60 s.
        let jd = (jd * 86_400.0).round() / 86_400.0;
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        let total_seconds = (day_frac.fract() * 86_400.0).round() as u32;
        let total_seconds = total_seconds.min(86_399);
        Self {
            year,
            month,
            day,
            hour: total_seconds / 3600,
            minute: (total_seconds % 3600) / 60,
            second: total_seconds % 60,
            utc_offset_minutes: 0,
        }
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.utc_offset_minutes < 0 { '-' } else { '+' };
        let off = self.utc_offset_minutes.abs();
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}{}{:02}:{:02}",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            sign,
            off / 60,
            off % 60
        )
    }
}

impl FromStr for Instant {
    type Err = TimeError;

    /// Accepts RFC 3339 (`2024-03-20T12:00:00+05:30`, `...Z`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let dt = DateTime::parse_from_rfc3339(s.trim())
            .map_err(|e| TimeError::Parse(format!("{s}: {e}")))?;
        Ok(Self::from_datetime(&dt))
    }
}
