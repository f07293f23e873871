//! The validated [`Cnpj`] value type.

use rand::Rng;
use tracing::trace;

use crate::checksum::{check_digit, compute_dv, CheckDigits};
use crate::normalize::normalize;
use crate::validate::{check_normalized, format};
use crate::{CnpjError, BODY_LEN};

const ROOT_LEN: usize = 8;

/// Characters a CNPJ body may hold, in checksum-value order.
const ALPHANUMERIC: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Character set used when generating random documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    /// Digits only: the legacy numeric CNPJ.
    Numeric,
    /// Digits and uppercase letters.
    #[default]
    Alphanumeric,
}

impl Charset {
    fn alphabet(self) -> &'static [u8] {
        match self {
            Charset::Numeric => &ALPHANUMERIC[..10],
            Charset::Alphanumeric => ALPHANUMERIC,
        }
    }
}

/// A CNPJ whose check digits have been verified.
///
/// Stored in normalized form (14 characters from `0-9`/`A-Z`). `Display`
/// renders the punctuated form; serialization uses the normalized form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cnpj {
    normalized: String,
    digits: CheckDigits,
}

impl Cnpj {
    /// Parses and verifies a CNPJ in any punctuation or letter case.
    pub fn parse(input: &str) -> Result<Self, CnpjError> {
        let normalized = normalize(input);
        let digits = check_normalized(&normalized)?;
        Ok(Self { normalized, digits })
    }

    /// Builds a CNPJ from a 12-character body by appending its check digits.
    pub fn from_body(body: &str) -> Result<Self, CnpjError> {
        let digits = compute_dv(body)?;
        let mut normalized = normalize(body);
        normalized.push_str(&digits.to_string());
        Ok(Self { normalized, digits })
    }

    /// Generates a random valid CNPJ with a body drawn from `charset`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, charset: Charset) -> Self {
        let alphabet = charset.alphabet();
        let body: Vec<u8> = (0..BODY_LEN)
            .map(|_| alphabet[rng.random_range(0..alphabet.len())])
            .collect();

        // Every alphabet byte is a checksum character worth its code minus 48.
        let mut values: Vec<u32> = body.iter().map(|&b| u32::from(b - b'0')).collect();
        let first = check_digit(&values);
        values.push(u32::from(first));
        let digits = CheckDigits::new(first, check_digit(&values));

        let mut normalized: String = body.into_iter().map(char::from).collect();
        trace!(body = %normalized, ?charset, "generated CNPJ body");
        normalized.push_str(&digits.to_string());

        Self { normalized, digits }
    }

    /// Returns the normalized 14-character form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Returns the 12-character body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.normalized[..BODY_LEN]
    }

    /// Returns the 8-character root that identifies the legal entity.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.normalized[..ROOT_LEN]
    }

    /// Returns the 4-character branch number (`0001` for headquarters).
    #[must_use]
    pub fn branch(&self) -> &str {
        &self.normalized[ROOT_LEN..BODY_LEN]
    }

    /// Returns the verification digits.
    #[must_use]
    pub const fn check_digits(&self) -> CheckDigits {
        self.digits
    }

    /// Returns true for the legacy, digits-only form.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.normalized.bytes().all(|b| b.is_ascii_digit())
    }

    /// Returns the punctuated `AA.AAA.AAA/AAAA-DD` form.
    #[must_use]
    pub fn formatted(&self) -> String {
        format(&self.normalized)
    }
}

impl std::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl std::str::FromStr for Cnpj {
    type Err = CnpjError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Cnpj {
    type Error = CnpjError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl AsRef<str> for Cnpj {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}

impl serde::Serialize for Cnpj {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.normalized)
    }
}

impl<'de> serde::Deserialize<'de> for Cnpj {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
