//! Phone value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[0-9]{3} [0-9]{2} [0-9]{3}-[0-9]{2}-[0-9]{2}$")
        .expect("Failed to compile phone regex")
});

/// A type-safe wrapper for phone numbers.
///
/// The whole value must follow the `DDD DD DDD-DD-DD` digit grouping,
/// optionally preceded by a `+`. The value is stored verbatim.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let phone = Phone::new("+380 50 000-00-00").unwrap();
/// assert_eq!(phone.as_str(), "+380 50 000-00-00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !PHONE_REGEX.is_match(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = Phone::new("+380 50 000-00-00").unwrap();
        assert_eq!(phone.as_str(), "+380 50 000-00-00");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(Phone::new("").is_err());
        assert!(Phone::new("no digits").is_err());
        assert!(Phone::new("380 50 000-00-00").is_ok());
        assert!(Phone::new("+380 67 123-45-67").is_ok());
        assert!(Phone::new("+380500000000").is_err());
        assert!(Phone::new("+38 050 000-00-00").is_err());
        assert!(Phone::new("+380 50 000-00-0").is_err());
        assert!(Phone::new("tel: +380 50 000-00-00").is_err());
        assert!(Phone::new("++380 50 000-00-00").is_err());
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        assert!(Phone::new("+٣٨٠ 50 000-00-00").is_err());
    }

    #[test]
    fn test_phone_serialization() {
        let phone = Phone::new("+380 50 000-00-00").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"+380 50 000-00-00\"");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<Phone, _> = serde_json::from_str("\"invalid\"");
        assert!(result.is_err());
    }
}
