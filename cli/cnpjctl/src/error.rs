//! Error handling and display for the CLI.

use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("No input given.")]
    NoInput,

    #[error("{count} invalid document(s)")]
    InvalidDocuments { count: usize },

    #[error("Config error: {0}")]
    Config(String),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    // Check for specific error types and provide hints
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::NoInput => {
                eprintln!(
                    "\n{}",
                    "Hint: Pass documents as arguments, use --file, or pipe them on stdin."
                        .yellow()
                );
            }
            CliError::Config(_) => {
                eprintln!(
                    "\n{}",
                    "Hint: Run `cnpj config reset` to restore the default config.".yellow()
                );
            }
            _ => {}
        }
    }
}
