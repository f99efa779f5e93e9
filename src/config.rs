//! Output settings read from an optional TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

/// Environment variable naming a config file when `--config` is not given.
pub const CONFIG_ENV: &str = "WORMCARD_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// None lets the caller pick based on where output goes
    pub format: Option<OutputFormat>,
    pub pretty: bool,
    pub skip_empty_teams: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: None,
            pretty: true,
            skip_empty_teams: false,
        }
    }
}

impl Config {
    pub fn from_toml(text: &str, path: &Path) -> Result<Config, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        debug!("Loading config from {:?}", path);
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Load from `path`, else from `$WORMCARD_CONFIG`, else defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Config, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => match std::env::var_os(CONFIG_ENV) {
                Some(env_path) => Self::load(Path::new(&env_path)),
                None => Ok(Config::default()),
            },
        }
    }
}
