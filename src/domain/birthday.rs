//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A birth date.
///
/// Parsed from `YYYY-MM-DD` and stored as a calendar date. The date must lie
/// strictly in the past: its midnight has to come before the current moment,
/// which means today is accepted and tomorrow is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday, checking it against the local clock.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` for malformed input and
    /// `ValidationError::BirthdayNotInPast` for dates that have not happened yet.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        Self::new_at(raw, Local::now().naive_local())
    }

    /// Parse a birthday, checking it against `now` instead of the local clock.
    pub fn new_at(raw: &str, now: NaiveDateTime) -> Result<Self, ValidationError> {
        let date = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))?;

        if date.and_time(NaiveTime::MIN) >= now {
            return Err(ValidationError::BirthdayNotInPast(raw.to_string()));
        }

        Ok(Self(date))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Whether this birthday falls on the same month and day as `date`.
    pub fn is_anniversary(&self, date: NaiveDate) -> bool {
        self.0.month() == date.month() && self.0.day() == date.day()
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
