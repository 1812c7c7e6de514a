//! Retailer catalog identifiers (SKUs / model numbers).

use serde::Serialize;

use crate::CoreError;

/// Minimum total length of an accepted identifier.
pub const MIN_IDENTIFIER_LEN: usize = 6;

/// An uppercase catalog identifier: at least two leading letters, at least
/// two digits, then any trailing alphanumerics, six characters or more.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Normalizes `input` (trim + uppercase) and validates its shape.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidIdentifier`] when the normalized token is
    /// too short, contains non-alphanumeric characters, or does not start
    /// with two letters followed by two digits.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let normalized = input.trim().to_ascii_uppercase();
        let invalid = |reason| CoreError::InvalidIdentifier {
            input: input.to_owned(),
            reason,
        };

        if normalized.len() < MIN_IDENTIFIER_LEN {
            return Err(invalid("shorter than 6 characters"));
        }
        if !normalized.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(invalid("contains non-alphanumeric characters"));
        }

        let bytes = normalized.as_bytes();
        let letters = bytes.iter().take_while(|b| b.is_ascii_alphabetic()).count();
        if letters < 2 {
            return Err(invalid("must start with at least two letters"));
        }
        let digits = bytes[letters..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits < 2 {
            return Err(invalid("letters must be followed by at least two digits"));
        }

        Ok(Self(normalized))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
