//! Configuration loading.
//!
//! Each setting is taken from the first source that has it: command-line
//! flag, environment variable, YAML config file, built-in default.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::api::{data_api_base, DEFAULT_ENDPOINT};
use crate::cli::CliOptions;
use crate::error::ConfigError;

pub const ENV_AUTH_TOKEN: &str = "HONEYBADGER_AUTH_TOKEN";
pub const ENV_ENDPOINT: &str = "HONEYBADGER_ENDPOINT";

/// File name of the default config file in the home directory.
pub const CONFIG_FILE_NAME: &str = ".honeybadger-cli.yaml";

/// Contents of the YAML config file. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub auth_token: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
}

/// Resolved settings for one run of the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub auth_token: String,
    pub endpoint: String,
}

impl Config {
    /// Resolve settings from the process environment.
    pub fn load(options: &CliOptions) -> Result<Self, ConfigError> {
        Self::resolve(options, |key| std::env::var(key).ok())
    }

    /// Resolve settings with `env` standing in for the process environment.
    pub fn resolve<F>(options: &CliOptions, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = match &options.config_path {
            Some(path) => read_config_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => read_config_file(&path)?,
                _ => FileConfig::default(),
            },
        };

        let pick = |flag: &Option<String>, key: &str, from_file: &Option<String>| {
            non_empty(flag.clone())
                .or_else(|| non_empty(env(key)))
                .or_else(|| non_empty(from_file.clone()))
        };

        let auth_token = pick(&options.auth_token, ENV_AUTH_TOKEN, &file.auth_token)
            .ok_or(ConfigError::MissingAuthToken)?;
        let endpoint = pick(&options.endpoint, ENV_ENDPOINT, &file.endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Ok(Self {
            auth_token,
            endpoint,
        })
    }

    /// Base URL for Data API requests.
    pub fn data_api_url(&self) -> String {
        data_api_base(&self.endpoint)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// `~/.honeybadger-cli.yaml`, if a home directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
}

/// Read and parse a config file. An empty file yields the defaults.
pub fn read_config_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if contents.trim().is_empty() {
        return Ok(FileConfig::default());
    }

    serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
