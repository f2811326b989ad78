//! Vehicle identification number value object.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Number of characters in a well-formed VIN.
pub const VIN_LENGTH: usize = 17;

/// A 17-character alphanumeric vehicle identification number.
///
/// Case is preserved as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Vin(String);

impl Vin {
    /// Validate and wrap a raw VIN.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::BlankVin`] for empty or whitespace-only
    /// input, [`ValidationError::VinLength`] when the input is not
    /// [`VIN_LENGTH`] characters long, and [`ValidationError::VinCharacters`]
    /// when it contains anything but ASCII letters and digits.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::BlankVin);
        }
        let actual = value.chars().count();
        if actual != VIN_LENGTH {
            return Err(ValidationError::VinLength {
                expected: VIN_LENGTH,
                actual,
            });
        }
        if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::VinCharacters);
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Vin {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Vin> for String {
    fn from(vin: Vin) -> Self {
        vin.0
    }
}

impl AsRef<str> for Vin {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_seventeen_alphanumeric_characters() {
        let vin = Vin::parse("WBWSS52P9NEYLVDE9").unwrap();
        assert_eq!(vin.as_str(), "WBWSS52P9NEYLVDE9");
    }

    #[test]
    fn should_preserve_lowercase_input() {
        let vin = Vin::parse("abcdefghijklmnopq").unwrap();
        assert_eq!(vin.to_string(), "abcdefghijklmnopq");
    }

    #[test]
    fn should_reject_short_vin() {
        assert_eq!(
            Vin::parse("48765"),
            Err(ValidationError::VinLength {
                expected: 17,
                actual: 5
            })
        );
    }

    #[test]
    fn should_reject_blank_vin() {
        assert_eq!(Vin::parse("   "), Err(ValidationError::BlankVin));
        assert_eq!(Vin::parse(""), Err(ValidationError::BlankVin));
    }

    #[test]
    fn should_reject_punctuation_when_length_matches() {
        assert_eq!(
            Vin::parse("WBWSS52P9NEYLVDE-"),
            Err(ValidationError::VinCharacters)
        );
    }

    #[test]
    fn should_count_characters_not_bytes() {
        let result = Vin::parse("ÄBCDEFGHIJKLMNOPQ");
        assert_eq!(result, Err(ValidationError::VinCharacters));
    }

    #[test]
    fn should_reject_invalid_vin_when_deserializing() {
        let result: Result<Vin, _> = serde_json::from_str("\"48765\"");
        assert!(result.is_err());
    }
}
