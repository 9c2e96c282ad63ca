//! Optional preferences file.
//!
//! Preferences are read from a small TOML file:
//!
//! ```toml
//! log_level = "info"
//! show_breakdown = false
//! ```
//!
//! Every key is optional. When no path is given on the command line the
//! calculator looks for [`DEFAULT_CONFIG_FILE`] in the working directory and
//! silently uses defaults if it is absent.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "zakat.toml";

/// Errors that can occur when loading preferences.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// User preferences for the terminal calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Preferences {
    /// Log filter directive used when `RUST_LOG` is not set.
    pub log_level: String,

    /// Print asset, investment and wealth totals above the zakat amount.
    pub show_breakdown: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            show_breakdown: true,
        }
    }
}

impl Preferences {
    /// Parses preferences from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Reads preferences from `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let preferences = Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), ?preferences, "loaded preferences");
        Ok(preferences)
    }

    /// Reads preferences from an explicit path, or from
    /// [`DEFAULT_CONFIG_FILE`] if it exists.
    ///
    /// A missing explicit file is an error; a missing default file is not.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
