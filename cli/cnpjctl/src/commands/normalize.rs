//! Normalize command.

use anyhow::Result;
use clap::Args;
use cnpj_alfa::normalize;
use serde::Serialize;
use tabled::Tabled;

use crate::input::InputArgs;
use crate::output::print_output;

use super::CommandContext;

/// Strip punctuation and uppercase documents.
#[derive(Debug, Args)]
pub struct NormalizeCommand {
    #[command(flatten)]
    input: InputArgs,
}

#[derive(Debug, Serialize, Tabled)]
struct NormalizeRow {
    input: String,
    normalized: String,
}

impl NormalizeCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let rows: Vec<NormalizeRow> = self
            .input
            .collect()?
            .into_iter()
            .map(normalize_row)
            .collect();

        print_output(&rows, ctx.format);
        Ok(())
    }
}

fn normalize_row(input: String) -> NormalizeRow {
    NormalizeRow {
        normalized: normalize(&input),
        input,
    }
}
