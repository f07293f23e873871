//! cnpjctl (cnpj) - CLI for CNPJ identifiers
//!
//! Validates, formats, and completes Brazilian CNPJ numbers in both the
//! alphanumeric and the legacy numeric form.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod input;
mod logging;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbosity());

    // Run the command
    if let Err(e) = cli.run() {
        // Print error in a user-friendly way
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
