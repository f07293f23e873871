//! Check digit computation command.

use anyhow::{Context, Result};
use clap::Args;
use cnpj_alfa::{compute_dv, normalize};
use serde::Serialize;
use tabled::Tabled;

use crate::input::InputArgs;
use crate::output::print_output;

use super::CommandContext;

/// Compute the check digits of 12-character bodies.
#[derive(Debug, Args)]
pub struct DvCommand {
    #[command(flatten)]
    input: InputArgs,
}

#[derive(Debug, Serialize, Tabled)]
struct DvRow {
    body: String,
    first: u8,
    second: u8,
    check_digits: String,
}

impl DvCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let rows = self
            .input
            .collect()?
            .iter()
            .map(|body| dv_row(body))
            .collect::<Result<Vec<_>>>()?;

        print_output(&rows, ctx.format);
        Ok(())
    }
}

fn dv_row(body: &str) -> Result<DvRow> {
    let digits = compute_dv(body)
        .with_context(|| format!("failed to compute check digits for '{body}'"))?;

    Ok(DvRow {
        body: normalize(body),
        first: digits.first,
        second: digits.second,
        check_digits: digits.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dv_row() {
        let row = dv_row("12.abc.345/01de").unwrap();
        assert_eq!(row.body, "12ABC34501DE");
        assert_eq!((row.first, row.second), (3, 5));
        assert_eq!(row.check_digits, "35");
    }

    #[test]
    fn test_dv_row_leading_zero() {
        let row = dv_row("ABCDEFGHIJKL").unwrap();
        assert_eq!(row.check_digits, "80");
    }

    #[test]
    fn test_dv_row_invalid_length() {
        let err = dv_row("SHORT").unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to compute check digits for 'SHORT'"
        );
        assert!(err
            .downcast_ref::<cnpj_alfa::CnpjError>()
            .is_some_and(|e| e.is_length_error()));
    }
}
