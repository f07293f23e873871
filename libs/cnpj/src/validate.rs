//! Validation and display formatting of complete documents.

use tracing::debug;

use crate::checksum::{compute_dv, CheckDigits};
use crate::normalize::normalize;
use crate::{CnpjError, BODY_LEN, CNPJ_LEN};

/// Returns true if `input` normalizes to a CNPJ with correct check digits.
///
/// Never fails: wrong length, non-numeric check digits, invalid characters,
/// and mismatching digits all yield `false`.
#[must_use]
pub fn validate(input: &str) -> bool {
    match check_normalized(&normalize(input)) {
        Ok(_) => true,
        Err(err) => {
            debug!(error = %err, "rejected CNPJ");
            false
        }
    }
}

/// Renders `input` as `AA.AAA.AAA/AAAA-DD`.
///
/// Input that does not normalize to 14 characters is returned normalized but
/// otherwise untouched. Check digits are not verified.
#[must_use]
pub fn format(input: &str) -> String {
    let normalized = normalize(input);
    if normalized.len() != CNPJ_LEN {
        return normalized;
    }

    format!(
        "{}.{}.{}/{}-{}",
        &normalized[0..2],
        &normalized[2..5],
        &normalized[5..8],
        &normalized[8..12],
        &normalized[12..14],
    )
}

/// Checks an already normalized document and returns its check digits.
pub(crate) fn check_normalized(normalized: &str) -> Result<CheckDigits, CnpjError> {
    if normalized.len() != CNPJ_LEN {
        return Err(CnpjError::InvalidLength {
            expected: CNPJ_LEN,
            actual: normalized.len(),
        });
    }

    let (body, suffix) = normalized.split_at(BODY_LEN);
    if !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CnpjError::NonNumericCheckDigits {
            suffix: suffix.to_string(),
        });
    }

    let expected = compute_dv(body)?;
    if expected.to_string() != suffix {
        return Err(CnpjError::CheckDigitMismatch {
            expected,
            actual: suffix.to_string(),
        });
    }

    Ok(expected)
}
