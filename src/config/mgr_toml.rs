#![forbid(unsafe_code)]

//! `mudnix-mgr.toml` parsing
//!
//! The file is optional. Every section and key has a default, so an empty
//! file is equivalent to no file at all. Command-line flags override it.

use crate::error::{Error, Result};
use crate::store::DEFAULT_USERS_FILE;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const CONFIG_FILE: &str = "mudnix-mgr.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where the users file lives
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    #[serde(default = "default_users_file")]
    pub path: PathBuf,
}

/// How listings are printed
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub color: ColorOption,
}

/// Listing format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented blocks for people
    #[default]
    Human,
    /// One JSON object per line
    Jsonl,
}

/// When to colorize human output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    /// Color only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

fn default_users_file() -> PathBuf {
    PathBuf::from(DEFAULT_USERS_FILE)
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            path: default_users_file(),
        }
    }
}

impl ColorOption {
    /// Resolves to a termcolor choice given whether stdout is a terminal
    pub fn resolve(self, is_terminal: bool) -> termcolor::ColorChoice {
        match self {
            ColorOption::Always => termcolor::ColorChoice::Always,
            ColorOption::Never => termcolor::ColorChoice::Never,
            ColorOption::Auto if is_terminal => termcolor::ColorChoice::Auto,
            ColorOption::Auto => termcolor::ColorChoice::Never,
        }
    }
}

impl Config {
    /// Parses configuration from TOML text
    pub fn parse(content: &str) -> std::result::Result<Config, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads configuration from a file that must exist
    pub fn load(path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Config::parse(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Loads `explicit` if given, else [`CONFIG_FILE`] from `dir` if present,
    /// else the defaults
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Config> {
        if let Some(path) = explicit {
            return Config::load(path);
        }

        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            log::debug!("using configuration from {}", candidate.display());
            Config::load(&candidate)
        } else {
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.store.path, PathBuf::from("users.json"));
        assert_eq!(config.output.format, OutputFormat::Human);
        assert_eq!(config.output.color, ColorOption::Auto);
    }

    #[test]
    fn test_full_config() {
        let config = Config::parse(
            r#"
[store]
path = "/srv/mudnix/users.json"

[output]
format = "jsonl"
color = "never"
"#,
        )
        .unwrap();

        assert_eq!(config.store.path, PathBuf::from("/srv/mudnix/users.json"));
        assert_eq!(config.output.format, OutputFormat::Jsonl);
        assert_eq!(config.output.color, ColorOption::Never);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::parse("[store]\nfile = \"x.json\"\n").is_err());
        assert!(Config::parse("[server]\nport = 8000\n").is_err());
    }

    #[test]
    fn test_invalid_format_rejected() {
        assert!(Config::parse("[output]\nformat = \"xml\"\n").is_err());
    }

    #[test]
    fn test_discover_without_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::discover(None, temp_dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_discover_reads_working_directory_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "[store]\npath = \"players.json\"\n",
        )
        .unwrap();

        let config = Config::discover(None, temp_dir.path()).unwrap();
        assert_eq!(config.store.path, PathBuf::from("players.json"));
    }

    #[test]
    fn test_discover_explicit_missing_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("absent.toml");

        let result = Config::discover(Some(missing.as_path()), temp_dir.path());
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_color_resolution() {
        use termcolor::ColorChoice;

        assert_eq!(ColorOption::Auto.resolve(false), ColorChoice::Never);
        assert_eq!(ColorOption::Auto.resolve(true), ColorChoice::Auto);
        assert_eq!(ColorOption::Always.resolve(false), ColorChoice::Always);
        assert_eq!(ColorOption::Never.resolve(true), ColorChoice::Never);
    }
}
