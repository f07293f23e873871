//! Collects documents from arguments, files, or stdin.

use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use crate::error::CliError;

/// Where to read documents from.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Documents to process. Reads stdin when omitted and --file is not set.
    #[arg(value_name = "CNPJ")]
    values: Vec<String>,

    /// Read documents from a file, one per line.
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
}

impl InputArgs {
    /// Returns every document, arguments first.
    pub fn collect(&self) -> Result<Vec<String>> {
        let mut inputs = self.values.clone();

        if let Some(path) = &self.file {
            let file = File::open(path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            let lines = read_lines(BufReader::new(file))
                .with_context(|| format!("failed to read input file {}", path.display()))?;
            debug!(path = %path.display(), count = lines.len(), "read inputs from file");
            inputs.extend(lines);
        }

        if self.values.is_empty() && self.file.is_none() {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                return Err(CliError::NoInput.into());
            }
            let lines = read_lines(stdin.lock()).context("failed to read stdin")?;
            debug!(count = lines.len(), "read inputs from stdin");
            inputs.extend(lines);
        }

        Ok(inputs)
    }
}

/// Reads non-empty lines, skipping `#` comments.
fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        lines.push(trimmed.to_string());
    }
    Ok(lines)
}
