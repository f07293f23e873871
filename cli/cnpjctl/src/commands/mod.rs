//! CLI commands.

mod complete;
mod dv;
mod format;
mod generate;
mod normalize;
mod settings;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::Config;
use crate::output::OutputFormat;

/// cnpj - Validate, format, and generate Brazilian CNPJ identifiers.
#[derive(Debug, Parser)]
#[command(name = "cnpj")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format. Defaults to the saved config, then table.
    #[arg(long, global = true, env = "CNPJ_FORMAT", value_enum)]
    format: Option<OutputFormat>,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check documents and report why invalid ones were rejected.
    Validate(validate::ValidateCommand),

    /// Render documents as AA.AAA.AAA/AAAA-DD.
    Format(format::FormatCommand),

    /// Strip punctuation and uppercase documents.
    Normalize(normalize::NormalizeCommand),

    /// Compute the check digits of 12-character bodies.
    Dv(dv::DvCommand),

    /// Append check digits to 12-character bodies.
    Complete(complete::CompleteCommand),

    /// Generate random valid documents.
    Generate(generate::GenerateCommand),

    /// Show or change saved CLI defaults.
    Config(settings::ConfigCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Requested log verbosity.
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let config = if self.command.reads_config() {
            Config::load()?
        } else {
            Config::default()
        };
        let format = self.format.unwrap_or(config.format);

        if self.no_color || !config.color {
            colored::control::set_override(false);
        }
        debug!(?format, color = config.color, "resolved CLI settings");

        let ctx = CommandContext { config, format };

        match self.command {
            Commands::Validate(cmd) => cmd.run(ctx),
            Commands::Format(cmd) => cmd.run(ctx),
            Commands::Normalize(cmd) => cmd.run(ctx),
            Commands::Dv(cmd) => cmd.run(ctx),
            Commands::Complete(cmd) => cmd.run(ctx),
            Commands::Generate(cmd) => cmd.run(ctx),
            Commands::Config(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("cnpj {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

impl Commands {
    /// Whether the saved config must be loaded before running.
    ///
    /// `version` and `config reset` work even when the file is corrupt.
    fn reads_config(&self) -> bool {
        match self {
            Commands::Version => false,
            Commands::Config(cmd) => !cmd.is_reset(),
            _ => true,
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
}
