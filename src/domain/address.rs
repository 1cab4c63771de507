//! Address value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static ADDRESS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\p{L}+,\p{L}+ [0-9]+\b").expect("Failed to compile address regex")
});

/// A postal address in `City,street number` form.
///
/// The value must contain a `<letters>,<letters> <digits>` fragment; the
/// input is stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    /// Create a new Address, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidAddress` if no `City,street number`
    /// fragment is present.
    pub fn new(address: impl Into<String>) -> Result<Self, ValidationError> {
        let address = address.into();

        if !address.contains(',') || !ADDRESS_REGEX.is_match(&address) {
            return Err(ValidationError::InvalidAddress(address));
        }

        Ok(Self(address))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::new(s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
