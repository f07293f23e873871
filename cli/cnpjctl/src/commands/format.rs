//! Format command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::input::InputArgs;
use crate::output::print_output;

use super::CommandContext;

/// Render documents in punctuated form.
///
/// Inputs that do not have 14 characters after normalization are printed
/// normalized but unpunctuated. Check digits are not verified.
#[derive(Debug, Args)]
pub struct FormatCommand {
    #[command(flatten)]
    input: InputArgs,
}

#[derive(Debug, Serialize, Tabled)]
struct FormatRow {
    input: String,
    formatted: String,
}

impl FormatCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let rows: Vec<FormatRow> = self.input.collect()?.into_iter().map(format_row).collect();

        print_output(&rows, ctx.format);
        Ok(())
    }
}

fn format_row(input: String) -> FormatRow {
    FormatRow {
        formatted: cnpj_alfa::format(&input),
        input,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_row() {
        let row = format_row("12abc34501de35".to_string());
        assert_eq!(row.input, "12abc34501de35");
        assert_eq!(row.formatted, "12.ABC.345/01DE-35");
    }

    #[test]
    fn test_format_row_wrong_length_is_normalized() {
        let row = format_row("12.abc.345".to_string());
        assert_eq!(row.formatted, "12ABC345");
    }
}
