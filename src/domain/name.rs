//! Name value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{Latin}\p{Cyrillic}]{2,}[\w-]*").expect("Failed to compile name regex")
});

/// A contact name.
///
/// A name is accepted when it contains at least one run of two or more
/// Latin or Cyrillic letters. Surrounding whitespace is dropped and the
/// value is stored title-cased, so `"boris o'neil"` becomes `"Boris O'Neil"`.
///
/// The name doubles as the key a [`Directory`](crate::Directory) stores the
/// record under.
///
/// # Example
///
/// ```
/// use contact_book::domain::Name;
///
/// let name = Name::new("олена петрівна").unwrap();
/// assert_eq!(name.as_str(), "Олена Петрівна");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Create a new Name, validating and title-casing it.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if no run of two letters exists.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();

        if !NAME_REGEX.is_match(trimmed) {
            return Err(ValidationError::InvalidName(name));
        }

        Ok(Self(title_case(trimmed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
///
/// A leading letter whose upper-case form spans several characters (`ß`,
/// `ﬁ`) keeps only the first of them upper-cased, so the result is stable
/// when title-cased again.
fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut previous_is_letter = false;

    for c in value.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                result.extend(c.to_lowercase());
            } else {
                let mut upper = c.to_uppercase();
                result.extend(upper.next());
                result.extend(upper.flat_map(char::to_lowercase));
            }
            previous_is_letter = true;
        } else {
            result.push(c);
            previous_is_letter = false;
        }
    }

    result
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
