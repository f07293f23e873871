//! Validate command.

use anyhow::Result;
use clap::Args;
use cnpj_alfa::{normalize, Cnpj};
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use crate::error::CliError;
use crate::input::InputArgs;
use crate::output::print_output;

use super::CommandContext;

/// Check documents; exits non-zero if any is invalid.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    #[command(flatten)]
    input: InputArgs,

    /// Print nothing; only set the exit status.
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct ValidationRow {
    input: String,
    normalized: String,
    valid: bool,
    reason: String,
}

impl ValidateCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let inputs = self.input.collect()?;
        let rows: Vec<ValidationRow> = inputs.iter().map(|input| check(input)).collect();

        let invalid = rows.iter().filter(|row| !row.valid).count();
        info!(total = rows.len(), invalid, "validated documents");

        if !self.quiet {
            print_output(&rows, ctx.format);
        }

        if invalid > 0 {
            return Err(CliError::InvalidDocuments { count: invalid }.into());
        }
        Ok(())
    }
}

fn check(input: &str) -> ValidationRow {
    let (valid, reason) = match Cnpj::parse(input) {
        Ok(_) => (true, String::new()),
        Err(err) => (false, err.to_string()),
    };

    ValidationRow {
        input: input.to_string(),
        normalized: normalize(input),
        valid,
        reason,
    }
}
