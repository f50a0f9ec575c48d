//! Rail time handling for the RTT API.
//!
//! RTT provides times as compact "HHMM" strings (e.g. "0815") with the date
//! carried separately by the service's run date. This module provides a
//! date-aware time type built from those two parts.

use chrono::{Duration, NaiveDate, NaiveTime, Timelike};
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A date-aware time for rail services.
///
/// Carries both the time of day and the date, because comparing bare times
/// is ambiguous for services running near midnight.
///
/// # Examples
///
/// ```
/// use rtt_summary::domain::RailTime;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let time = RailTime::parse_hhmm("0815", date).unwrap();
/// assert_eq!(time.to_string(), "08:15");
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RailTime {
    date: NaiveDate,
    time: NaiveTime,
}

impl RailTime {
    /// Create a new RailTime from date and time components.
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self { date, time }
    }

    /// Parse a time from RTT's compact "HHMM" format with a given base date.
    ///
    /// # Examples
    ///
    /// ```
    /// use rtt_summary::domain::RailTime;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    ///
    /// assert!(RailTime::parse_hhmm("0000", date).is_ok());
    /// assert!(RailTime::parse_hhmm("2359", date).is_ok());
    ///
    /// // Colons, wrong lengths and out-of-range values are rejected
    /// assert!(RailTime::parse_hhmm("08:15", date).is_err());
    /// assert!(RailTime::parse_hhmm("815", date).is_err());
    /// assert!(RailTime::parse_hhmm("2500", date).is_err());
    /// ```
    pub fn parse_hhmm(s: &str, date: NaiveDate) -> Result<Self, TimeError> {
        // Must be exactly 4 digits: HHMM
        if s.len() != 4 {
            return Err(TimeError::new("expected HHMM format"));
        }

        let bytes = s.as_bytes();

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[2..4])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeError::new("invalid time"))?;

        Ok(Self { date, time })
    }

    /// Returns the date component.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the time component.
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    /// Returns the duration between two times.
    ///
    /// Negative if `other` is after `self`.
    pub fn signed_duration_since(&self, other: Self) -> Duration {
        self.date
            .and_time(self.time)
            .signed_duration_since(other.date.and_time(other.time))
    }
}

impl fmt::Debug for RailTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RailTime({} {:02}:{:02})",
            self.date,
            self.hour(),
            self.minute()
        )
    }
}

impl fmt::Display for RailTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
