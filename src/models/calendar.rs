//! Clock times and working-hours windows.
//!
//! Defines the daily slot time (`HH:MM`) and the weekly working pattern
//! of an interviewer: a daily `[start, end]` window and the set of
//! weekdays on which that window applies.
//!
//! # Time Model
//! Slot times are wall-clock times without a date or zone. Ordering is
//! chronological, which matches lexicographic ordering of the zero-padded
//! `HH:MM` form.
//!
//! # Precedence
//! A slot lies within working hours iff its weekday is active AND
//! `start <= time <= end` (both bounds inclusive).

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{AvailabilityError, Result};

/// A wall-clock slot time with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SlotTime {
    hour: u8,
    minute: u8,
}

impl SlotTime {
    /// Creates a slot time, validating the hour and minute ranges.
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(AvailabilityError::InvalidSlotTime(format!(
                "{hour:02}:{minute:02}"
            )));
        }
        Ok(Self { hour, minute })
    }

    /// Hour component (0-23).
    #[inline]
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute component (0-59).
    #[inline]
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Parses a backend clock string: `HH:MM` or `HH:MM:SS`.
    ///
    /// Seconds are accepted and dropped. Returns `None` for anything else.
    pub fn from_clock_str(s: &str) -> Option<Self> {
        let s = s.trim();
        match s.len() {
            5 => s.parse().ok(),
            8 => NaiveTime::parse_from_str(s, "%H:%M:%S")
                .ok()
                .map(Self::from),
            _ => None,
        }
    }
}

impl From<NaiveTime> for SlotTime {
    fn from(t: NaiveTime) -> Self {
        // NaiveTime guarantees hour < 24 and minute < 60.
        Self {
            hour: t.hour() as u8,
            minute: t.minute() as u8,
        }
    }
}

impl FromStr for SlotTime {
    type Err = AvailabilityError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || AvailabilityError::InvalidSlotTime(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(invalid());
        }
        let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
        if !digits.iter().all(u8::is_ascii_digit) {
            return Err(invalid());
        }
        let hour = (digits[0] - b'0') * 10 + (digits[1] - b'0');
        let minute = (digits[2] - b'0') * 10 + (digits[3] - b'0');
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl TryFrom<String> for SlotTime {
    type Error = AvailabilityError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<SlotTime> for String {
    fn from(t: SlotTime) -> Self {
        t.to_string()
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Weekly working pattern of an interviewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingHours {
    /// First bookable slot time (inclusive).
    pub start: SlotTime,
    /// Last bookable slot time (inclusive).
    pub end: SlotTime,
    /// Weekdays on which the window applies.
    pub active_days: Vec<Weekday>,
}

impl WorkingHours {
    /// Creates a working pattern, rejecting `start > end`.
    pub fn new(start: SlotTime, end: SlotTime, active_days: Vec<Weekday>) -> Result<Self> {
        let hours = Self {
            start,
            end,
            active_days,
        };
        hours.validate()?;
        Ok(hours)
    }

    /// 09:00-17:00, Monday through Friday.
    pub fn office_default() -> Self {
        Self {
            start: SlotTime { hour: 9, minute: 0 },
            end: SlotTime {
                hour: 17,
                minute: 0,
            },
            active_days: vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ],
        }
    }

    /// Replaces the active weekdays.
    pub fn with_active_days(mut self, days: Vec<Weekday>) -> Self {
        self.active_days = days;
        self
    }

    /// Checks that the window is not inverted.
    pub fn validate(&self) -> Result<()> {
        if self.start > self.end {
            return Err(AvailabilityError::InvalidWorkingHours {
                start: self.start.to_string(),
                end: self.end.to_string(),
            });
        }
        Ok(())
    }

    /// Whether the interviewer works on the given weekday.
    #[inline]
    pub fn works_on(&self, day: Weekday) -> bool {
        self.active_days.contains(&day)
    }

    /// Whether a slot time falls inside `[start, end]`.
    #[inline]
    pub fn contains(&self, time: SlotTime) -> bool {
        time >= self.start && time <= self.end
    }
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self::office_default()
    }
}
