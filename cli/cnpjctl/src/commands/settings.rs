//! Config commands (saved defaults for output).

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::Config;
use crate::output::{print_info, print_single, print_success, OutputFormat};

use super::CommandContext;

/// Manage saved CLI defaults.
#[derive(Debug, Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Debug, Subcommand)]
enum ConfigSubcommand {
    /// Show the saved config.
    Show,

    /// Change saved defaults.
    Set(SetArgs),

    /// Restore the default config.
    Reset,
}

#[derive(Debug, Args)]
struct SetArgs {
    /// Default output format.
    #[arg(long = "default-format", value_enum, value_name = "FORMAT")]
    default_format: Option<OutputFormat>,

    /// Enable or disable colors.
    #[arg(long)]
    color: Option<bool>,
}

impl ConfigCommand {
    /// Returns true for `config reset`, which never reads the existing file.
    pub fn is_reset(&self) -> bool {
        matches!(self.command, ConfigSubcommand::Reset)
    }

    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            ConfigSubcommand::Show => show(ctx),
            ConfigSubcommand::Set(args) => set(ctx, args),
            ConfigSubcommand::Reset => reset(ctx),
        }
    }
}

fn show(ctx: CommandContext) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => print_single(&ctx.config),
        OutputFormat::Table => {
            print_info(&format!("config file: {}", Config::path()?.display()));
            println!("format: {}", ctx.config.format.as_str());
            println!("color: {}", ctx.config.color);
        }
    }

    Ok(())
}

fn set(mut ctx: CommandContext, args: SetArgs) -> Result<()> {
    if args.default_format.is_none() && args.color.is_none() {
        anyhow::bail!("Nothing to set. Use --default-format or --color.");
    }

    apply(&mut ctx.config, &args);
    ctx.config.save()?;

    match ctx.format {
        OutputFormat::Json => print_single(&ctx.config),
        OutputFormat::Table => print_success("Saved config"),
    }

    Ok(())
}

fn reset(ctx: CommandContext) -> Result<()> {
    let config = Config::reset()?;

    match ctx.format {
        OutputFormat::Json => print_single(&config),
        OutputFormat::Table => print_success("Restored default config"),
    }

    Ok(())
}

fn apply(config: &mut Config, args: &SetArgs) {
    if let Some(format) = args.default_format {
        config.format = format;
    }
    if let Some(color) = args.color {
        config.color = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_only_touches_given_fields() {
        let mut config = Config::default();
        apply(
            &mut config,
            &SetArgs {
                default_format: Some(OutputFormat::Json),
                color: None,
            },
        );
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.color);

        apply(
            &mut config,
            &SetArgs {
                default_format: None,
                color: Some(false),
            },
        );
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.color);
    }
}
