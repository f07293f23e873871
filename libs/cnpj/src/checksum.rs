//! Modulo-11 check-digit engine.
//!
//! Each character is valued with [`char_value`], multiplied by a weight, and
//! summed. Weights run 2, 3, ..., 9 starting at the rightmost character and
//! wrap back to 2, so the assignment only depends on distance from the end.
//! The remainder of the sum modulo 11 gives the digit: remainders 0 and 1
//! both collapse to 0, anything else becomes `11 - r`.
//!
//! The second check digit is computed over the body with the first digit
//! appended, which makes the pair cascade.

use serde::{Deserialize, Serialize};

use crate::normalize::{char_value, normalize};
use crate::{CnpjError, BODY_LEN};

const MIN_WEIGHT: u32 = 2;
const MAX_WEIGHT: u32 = 9;

/// The two verification digits of a CNPJ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CheckDigits {
    /// Computed over the 12-character body.
    pub first: u8,
    /// Computed over the body followed by `first`.
    pub second: u8,
}

impl CheckDigits {
    /// Creates a pair from two digits.
    #[must_use]
    pub const fn new(first: u8, second: u8) -> Self {
        Self { first, second }
    }

    /// Returns the digits as a tuple.
    #[must_use]
    pub const fn pair(&self) -> (u8, u8) {
        (self.first, self.second)
    }
}

impl std::fmt::Display for CheckDigits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

impl From<(u8, u8)> for CheckDigits {
    fn from((first, second): (u8, u8)) -> Self {
        Self { first, second }
    }
}

impl From<CheckDigits> for (u8, u8) {
    fn from(digits: CheckDigits) -> Self {
        digits.pair()
    }
}

/// Returns `len` weights, indexed left to right, where the last one is 2.
#[must_use]
pub fn right_weights(len: usize) -> Vec<u32> {
    let cycle = (MAX_WEIGHT - MIN_WEIGHT + 1) as usize;
    (0..len)
        .rev()
        .map(|distance| MIN_WEIGHT + (distance % cycle) as u32)
        .collect()
}

/// Computes one check digit over `body`.
///
/// `body` is used as given, without normalization. Any character outside
/// `0-9`/`A-Z` fails with [`CnpjError::InvalidCharacter`] at its position.
pub fn compute_single_dv(body: &str) -> Result<u8, CnpjError> {
    let values = body
        .chars()
        .enumerate()
        .map(|(position, character)| {
            char_value(character).ok_or(CnpjError::InvalidCharacter {
                position,
                character,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(check_digit(&values))
}

/// Computes one check digit over already valued characters.
pub(crate) fn check_digit(values: &[u32]) -> u8 {
    // Reduced as we go so arbitrarily long input cannot overflow.
    let remainder = values
        .iter()
        .zip(right_weights(values.len()))
        .fold(0, |acc, (value, weight)| (acc + value * weight) % 11);

    if remainder < 2 {
        0
    } else {
        (11 - remainder) as u8
    }
}

/// Computes both check digits for a 12-character body.
///
/// The input is normalized first, so punctuated or lowercase bodies are
/// accepted. Fails with [`CnpjError::InvalidLength`] unless exactly 12
/// characters remain.
pub fn compute_dv(body: &str) -> Result<CheckDigits, CnpjError> {
    let normalized = normalize(body);
    if normalized.len() != BODY_LEN {
        return Err(CnpjError::InvalidLength {
            expected: BODY_LEN,
            actual: normalized.len(),
        });
    }

    let first = compute_single_dv(&normalized)?;

    let mut extended = normalized;
    extended.push(char::from(b'0' + first));
    let second = compute_single_dv(&extended)?;

    Ok(CheckDigits { first, second })
}
