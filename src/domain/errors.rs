//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// Every message names the rule that was violated and, where one exists,
/// shows an example of the expected format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name has no run of at least two letters.
    InvalidName(String),

    /// The provided address is not `City,street number`.
    InvalidAddress(String),

    /// The provided phone number is not `+xxx xx xxx-xx-xx`.
    InvalidPhone(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided birthday is not a `yyyy-mm-dd` date.
    InvalidBirthday(String),

    /// The provided birthday is not in the past.
    BirthdayNotInPast(String),
}

impl ValidationError {
    /// Example of a value that would have been accepted.
    pub fn expected_format(&self) -> &'static str {
        match self {
            Self::InvalidName(_) => "Boris",
            Self::InvalidAddress(_) => "City,street number",
            Self::InvalidPhone(_) => "+xxx xx xxx-xx-xx",
            Self::InvalidEmail(_) => "xxxx@xxxx.xxxx or xxxx.xxxx@xxxx.xxxx",
            Self::InvalidBirthday(_) | Self::BirthdayNotInPast(_) => "yyyy-mm-dd",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let example = self.expected_format();
        match self {
            Self::InvalidName(name) => write!(
                f,
                "Wrong name '{}': it must contain at least two letters. Example: \"{}\"",
                name, example
            ),
            Self::InvalidAddress(address) => write!(
                f,
                "Wrong format of address '{}'. Example: \"{}\"",
                address, example
            ),
            Self::InvalidPhone(phone) => write!(
                f,
                "{} - wrong format of phone. Example: {}",
                phone, example
            ),
            Self::InvalidEmail(email) => write!(
                f,
                "Wrong format of '{}'. Example: \"{}\"",
                email, example
            ),
            Self::InvalidBirthday(date) => {
                write!(f, "Wrong format of {}. Example: {}", date, example)
            }
            Self::BirthdayNotInPast(date) => {
                write!(f, "Birthday {} must be a date in the past", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_include_example() {
        let err = ValidationError::InvalidPhone("123".to_string());
        assert_eq!(
            err.to_string(),
            "123 - wrong format of phone. Example: +xxx xx xxx-xx-xx"
        );

        let err = ValidationError::InvalidAddress("Nowhere".to_string());
        assert!(err.to_string().contains("City,street number"));

        let err = ValidationError::InvalidBirthday("10.04.2000".to_string());
        assert!(err.to_string().contains("yyyy-mm-dd"));
    }

    #[test]
    fn test_not_in_past_message() {
        let err = ValidationError::BirthdayNotInPast("2999-01-01".to_string());
        assert_eq!(
            err.to_string(),
            "Birthday 2999-01-01 must be a date in the past"
        );
        assert_eq!(err.expected_format(), "yyyy-mm-dd");
    }
}
