//! `HH:mm` time-of-day codec.
//!
//! Session times are day-local: a [`ClockTime`] is minutes since midnight and
//! carries no date. Times are only ever compared within the same conference day,
//! so there is no day-rollover handling.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::ValidationError;

const MINUTES_PER_HOUR: u16 = 60;
const MINUTES_PER_DAY: u16 = 24 * MINUTES_PER_HOUR;

/// Parse a `HH:mm` string into minutes since midnight.
///
/// The hour and minute are two colon-separated integers. Hours run 0-23 and
/// minutes 0-59; anything else is rejected rather than producing a value that
/// would silently distort ordering.
pub fn parse_time(text: &str) -> Result<u16, ValidationError> {
    let invalid = || ValidationError::InvalidTime {
        value: text.to_string(),
    };

    let (hours, minutes) = text.split_once(':').ok_or_else(invalid)?;
    if hours.is_empty()
        || minutes.len() != 2
        || !hours.bytes().all(|b| b.is_ascii_digit())
        || !minutes.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let hours: u16 = hours.parse().map_err(|_| invalid())?;
    let minutes: u16 = minutes.parse().map_err(|_| invalid())?;
    if hours >= 24 || minutes >= MINUTES_PER_HOUR {
        return Err(invalid());
    }

    Ok(hours * MINUTES_PER_HOUR + minutes)
}

/// Format a start/end pair for display, e.g. `09:00 – 09:30`.
pub fn format_time_range(start: ClockTime, end: ClockTime) -> String {
    format!("{start} \u{2013} {end}")
}

/// A time of day, stored as minutes since midnight.
///
/// Ordering follows wall-clock order within a day. Serializes as `HH:mm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    /// Midnight, the earliest time of day.
    pub const MIDNIGHT: Self = Self(0);

    /// Creates a time from an hour and minute.
    pub fn from_hm(hour: u16, minute: u16) -> Result<Self, ValidationError> {
        if hour >= 24 || minute >= MINUTES_PER_HOUR {
            return Err(ValidationError::InvalidTime {
                value: format!("{hour}:{minute:02}"),
            });
        }
        Ok(Self(hour * MINUTES_PER_HOUR + minute))
    }

    /// Creates a time from minutes since midnight.
    pub const fn from_minutes(minutes: u16) -> Result<Self, ValidationError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(ValidationError::InvalidTime {
                value: String::new(),
            });
        }
        Ok(Self(minutes))
    }

    /// Minutes since midnight.
    #[must_use]
    pub const fn minutes(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn hour(self) -> u16 {
        self.0 / MINUTES_PER_HOUR
    }

    #[must_use]
    pub const fn minute(self) -> u16 {
        self.0 % MINUTES_PER_HOUR
    }
}

impl FromStr for ClockTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_time(s).map(Self)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}
