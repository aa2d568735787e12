//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `DINERSCORE_*` environment variables (a `.env`
//! file in the working directory is honoured by the binary). Provider credentials such as
//! `OPENAI_API_KEY` are read by genai directly and never pass through [`Config`].

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use crate::constants::{DEFAULT_CORPUS_PATH, DEFAULT_MODEL};

/// Runtime configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `DINERSCORE_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Review corpus file. Default: `restaurant-data.txt`.
    pub corpus_path: PathBuf,

    /// Chat model used for both resolution and classification. Default: `gpt-4o-mini`.
    pub model: String,

    /// Run with the offline keyword resolver/classifier instead of a chat model.
    pub mock_provider: bool,

    /// List corpus restaurant names in the resolution prompt.
    pub hint_known_names: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_path: PathBuf::from(DEFAULT_CORPUS_PATH),
            model: DEFAULT_MODEL.to_string(),
            mock_provider: false,
            hint_known_names: false,
        }
    }
}

impl Config {
    const ENV_CORPUS_PATH: &'static str = "DINERSCORE_CORPUS_PATH";
    const ENV_MODEL: &'static str = "DINERSCORE_MODEL";
    const ENV_MOCK_PROVIDER: &'static str = "DINERSCORE_MOCK_PROVIDER";
    const ENV_RESOLVER_HINTS: &'static str = "DINERSCORE_RESOLVER_HINTS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let corpus_path = Self::parse_path_from_env(Self::ENV_CORPUS_PATH, defaults.corpus_path);
        let model = Self::parse_string_from_env(Self::ENV_MODEL, defaults.model);
        let mock_provider = Self::parse_presence_from_env(Self::ENV_MOCK_PROVIDER);
        let hint_known_names =
            Self::parse_flag_from_env(Self::ENV_RESOLVER_HINTS, defaults.hint_known_names)?;

        Ok(Self {
            corpus_path,
            model,
            mock_provider,
            hint_known_names,
        })
    }

    /// Validates the corpus path and model name (does not read the corpus).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.corpus_path.exists() {
            return Err(ConfigError::PathNotFound {
                path: self.corpus_path.clone(),
            });
        }
        if !self.corpus_path.is_file() {
            return Err(ConfigError::NotAFile {
                path: self.corpus_path.clone(),
            });
        }

        if self.model.trim().is_empty() {
            return Err(ConfigError::EmptyModel);
        }

        Ok(())
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(default)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_presence_from_env(var_name: &str) -> bool {
        env::var_os(var_name).is_some_and(|v| !v.is_empty())
    }

    fn parse_flag_from_env(var_name: &'static str, default: bool) -> Result<bool, ConfigError> {
        match env::var(var_name) {
            Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" | "" => Ok(false),
                _ => Err(ConfigError::InvalidFlag {
                    name: var_name,
                    value,
                }),
            },
            Err(_) => Ok(default),
        }
    }
}
