//! Complete command: body in, full document out.

use anyhow::{Context, Result};
use clap::Args;
use cnpj_alfa::Cnpj;
use serde::Serialize;
use tabled::Tabled;

use crate::input::InputArgs;
use crate::output::print_output;

use super::CommandContext;

/// Append check digits to 12-character bodies.
#[derive(Debug, Args)]
pub struct CompleteCommand {
    #[command(flatten)]
    input: InputArgs,
}

#[derive(Debug, Serialize, Tabled)]
struct CompleteRow {
    body: String,
    cnpj: String,
}

impl CompleteCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let rows = self
            .input
            .collect()?
            .iter()
            .map(|body| complete_row(body))
            .collect::<Result<Vec<_>>>()?;

        print_output(&rows, ctx.format);
        Ok(())
    }
}

fn complete_row(body: &str) -> Result<CompleteRow> {
    let cnpj = Cnpj::from_body(body).with_context(|| format!("failed to complete '{body}'"))?;

    Ok(CompleteRow {
        body: cnpj.body().to_string(),
        cnpj: cnpj.formatted(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_row() {
        let row = complete_row("12.abc.345/01de").unwrap();
        assert_eq!(row.body, "12ABC34501DE");
        assert_eq!(row.cnpj, "12.ABC.345/01DE-35");
    }

    #[test]
    fn test_complete_row_legacy_numeric() {
        let row = complete_row("11.222.333/0001").unwrap();
        assert_eq!(row.cnpj, "11.222.333/0001-81");
    }

    #[test]
    fn test_complete_row_short_body() {
        let err = complete_row("12.ABC.345/01D").unwrap_err();
        assert_eq!(err.to_string(), "failed to complete '12.ABC.345/01D'");
        assert_eq!(
            err.downcast_ref::<cnpj_alfa::CnpjError>(),
            Some(&cnpj_alfa::CnpjError::InvalidLength {
                expected: 12,
                actual: 11
            })
        );
    }
}
