//! Persistent CLI configuration.
//!
//! Stored as `config.json` in the platform config directory. A missing file
//! means defaults; command line flags and environment variables take
//! precedence over anything stored here.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::CliError;
use crate::output::OutputFormat;

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Get the config directory path.
fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("br", "cnpj", "cnpj")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Whether to use colors in terminal output.
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Path of the config file.
    pub fn path() -> Result<PathBuf> {
        Ok(config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from disk, or return default.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load config from `path`, or return default if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        serde_json::from_str(&contents).map_err(|e| {
            CliError::Config(format!("failed to parse {}: {e}", path.display())).into()
        })
    }

    /// Save config to disk.
    pub fn save(&self) -> Result<()> {
        let dir = config_dir()?;
        fs::create_dir_all(&dir)?;
        self.save_to(&dir.join(CONFIG_FILE))
    }

    /// Overwrite the saved config with defaults, whatever the file holds.
    pub fn reset() -> Result<Self> {
        let dir = config_dir()?;
        fs::create_dir_all(&dir)?;
        Self::reset_at(&dir.join(CONFIG_FILE))
    }

    /// Overwrite the config at `path` with defaults.
    pub fn reset_at(path: &Path) -> Result<Self> {
        let config = Self::default();
        config.save_to(path)?;
        Ok(config)
    }

    /// Save config to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;

        #[cfg(unix)]
        {
            use std::io::Write;
            use std::os::unix::fs::OpenOptionsExt;

            let mut file = fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(path)
                .with_context(|| format!("Failed to open config at {:?}", path))?;
            file.write_all(contents.as_bytes())?;
        }

        #[cfg(not(unix))]
        {
            fs::write(path, contents)
                .with_context(|| format!("Failed to write config to {:?}", path))?;
        }

        Ok(())
    }
}
