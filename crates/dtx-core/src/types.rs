//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// Conference days are numbered 1 and 2.
    #[error("day must be 1 or 2, got {value}")]
    DayOutOfRange { value: u8 },

    /// The value is not a `HH:mm` time of day.
    #[error("invalid time of day: {value:?} (expected HH:mm)")]
    InvalidTime { value: String },

    /// Unknown category name or slug.
    #[error("unknown category: {value}")]
    UnknownCategory { value: String },
}

/// A validated session identifier.
///
/// Session IDs must be non-empty strings. They are unique across both
/// conference days; uniqueness is checked when the agenda is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionId(String);

impl SessionId {
    /// Creates a new ID after validation.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::Empty {
                field: "session ID",
            });
        }
        Ok(Self(id))
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SessionId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SessionId> for String {
    fn from(id: SessionId) -> Self {
        id.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for SessionId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A conference day, either 1 or 2.
///
/// This is the "active day" of the timeline and is independent of the
/// calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(u8);

impl Day {
    /// The first conference day.
    pub const ONE: Self = Self(1);

    /// The second conference day.
    pub const TWO: Self = Self(2);

    /// Creates a day after validation.
    pub const fn new(value: u8) -> Result<Self, ValidationError> {
        match value {
            1 | 2 => Ok(Self(value)),
            _ => Err(ValidationError::DayOutOfRange { value }),
        }
    }

    /// Returns the day number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// The day after this one, if the conference is still running.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0 {
            1 => Some(Self::TWO),
            _ => None,
        }
    }
}

impl Default for Day {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u8> for Day {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Day {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| ValidationError::DayOutOfRange { value: 0 })?;
        Self::new(value)
    }
}
