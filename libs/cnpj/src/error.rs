//! Error types for check-digit computation and document parsing.

use thiserror::Error;

use crate::CheckDigits;

/// Errors that can occur when computing check digits or parsing a CNPJ.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CnpjError {
    /// A character outside `0-9`/`A-Z` reached the weighted sum.
    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter { position: usize, character: char },

    /// The normalized input does not have the required number of characters.
    #[error("invalid length: expected {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The two trailing characters are not both decimal digits.
    #[error("check digits must be numeric, got '{suffix}'")]
    NonNumericCheckDigits { suffix: String },

    /// The check digits do not match the ones computed from the body.
    #[error("check digit mismatch: expected '{expected}', got '{actual}'")]
    CheckDigitMismatch {
        expected: CheckDigits,
        actual: String,
    },
}

impl CnpjError {
    /// Returns true if this error indicates a length problem.
    pub fn is_length_error(&self) -> bool {
        matches!(self, CnpjError::InvalidLength { .. })
    }

    /// Returns true if the document was well-formed but its check digits are wrong.
    pub fn is_checksum_error(&self) -> bool {
        matches!(self, CnpjError::CheckDigitMismatch { .. })
    }
}
