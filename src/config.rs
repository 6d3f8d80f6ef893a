//! Configuration loading.
//!
//! Handles the optional `.taskdeck.toml` file in the working directory. The
//! store path resolves in precedence order: `--file` flag, `TASKDECK_FILE`
//! env (both handled by clap), config file, then the built-in default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::storage::DEFAULT_STORE_FILE;

/// Name of the config file, looked up in the working directory
pub const CONFIG_FILE: &str = ".taskdeck.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the task store file
    #[serde(default = "default_file")]
    pub file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: default_file(),
        }
    }
}

fn default_file() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_FILE)
}

impl Config {
    /// Load configuration from `dir`, falling back to defaults when the
    /// config file is absent.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        if config.file.as_os_str().is_empty() {
            return Err(Error::InvalidConfig(format!(
                "{}: file must not be empty",
                path.display()
            )));
        }
        Ok(config)
    }

    /// Load configuration from the current working directory.
    pub fn load_cwd() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }
}
