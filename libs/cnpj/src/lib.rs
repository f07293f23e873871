//! # cnpj-alfa
//!
//! Check digits, validation, and formatting for Brazilian CNPJ identifiers,
//! covering both the alphanumeric form and the legacy all-digit form.
//!
//! ## Format
//!
//! A CNPJ has a 12-character body followed by 2 numeric check digits:
//!
//! ```text
//! 12.ABC.345/01DE-35
//! ^^^^^^^^^^ ^^^^ ^^
//! root       branch check digits
//! ```
//!
//! Body characters are `0-9` or `A-Z`. Punctuation is cosmetic and input is
//! case-insensitive: every entry point normalizes before doing any work.
//!
//! ## Check Digits
//!
//! Characters are valued as their ASCII code minus 48 (`'0'..'9'` → 0-9,
//! `'A'..'Z'` → 17-42), weighted 2..9 from the right, and reduced modulo 11.
//! The second digit is computed over the body plus the first digit.
//!
//! ## Usage
//!
//! ```
//! use cnpj_alfa::{compute_dv, format, validate, Cnpj};
//!
//! assert!(validate("12.ABC.345/01DE-35"));
//! assert_eq!(format("12abc34501de35"), "12.ABC.345/01DE-35");
//! assert_eq!(compute_dv("12ABC34501DE").unwrap().pair(), (3, 5));
//!
//! let cnpj: Cnpj = "11.222.333/0001-81".parse().unwrap();
//! assert!(cnpj.is_numeric());
//! ```

mod checksum;
mod document;
mod error;
mod normalize;
mod validate;

pub use checksum::{compute_dv, compute_single_dv, right_weights, CheckDigits};
pub use document::{Charset, Cnpj};
pub use error::CnpjError;
pub use normalize::{char_value, normalize};
pub use validate::{format, validate};

/// Number of characters in a CNPJ body.
pub const BODY_LEN: usize = 12;

/// Number of characters in a complete, normalized CNPJ.
pub const CNPJ_LEN: usize = 14;
