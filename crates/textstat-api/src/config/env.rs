//! Config loading from environment variables

use std::path::PathBuf;
use std::str::FromStr;

use super::constants::{DEFAULT_BIND_ADDR, DEFAULT_DATABASE_URL, DEFAULT_LOG_FILE};
use crate::errors::ApiError;

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  /// One JSON object per line (with timestamp)
  Json,
  /// Human readable multi-line output
  Pretty,
}

impl FromStr for LogFormat {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "json" => Ok(Self::Json),
      "pretty" => Ok(Self::Pretty),
      _ => Err(format!("Unknown log format: {}. Valid values: json, pretty", s)),
    }
  }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogSettings {
  /// Output format for stdout and the log file
  pub format: LogFormat,
  /// File the log stream is appended to; `None` disables the file sink
  pub file: Option<PathBuf>,
}

impl Default for LogSettings {
  fn default() -> Self {
    Self { format: LogFormat::Json, file: Some(PathBuf::from(DEFAULT_LOG_FILE)) }
  }
}

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:3000")
  pub bind_addr: String,
  /// sqlx database URL (e.g. "sqlite://textstat.db")
  pub database_url: String,
  /// Logging configuration
  pub log: LogSettings,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// - `TEXTSTAT_BIND_ADDR`
  /// - `TEXTSTAT_DATABASE_URL`
  /// - `TEXTSTAT_LOG_FORMAT` (`json` | `pretty`)
  /// - `TEXTSTAT_LOG_FILE` (empty string disables the file sink)
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Builds configuration from an arbitrary key lookup
  ///
  /// # Errors
  /// Returns an error if a value is invalid
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> crate::errors::Result<Self> {
    let bind_addr = lookup("TEXTSTAT_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

    let database_url =
      lookup("TEXTSTAT_DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

    let format = match lookup("TEXTSTAT_LOG_FORMAT") {
      Some(value) => LogFormat::from_str(&value).map_err(ApiError::config)?,
      None => LogFormat::Json,
    };

    let file = match lookup("TEXTSTAT_LOG_FILE") {
      Some(value) if value.is_empty() => None,
      Some(value) => Some(PathBuf::from(value)),
      None => Some(PathBuf::from(DEFAULT_LOG_FILE)),
    };

    Ok(Self { bind_addr, database_url, log: LogSettings { format, file } })
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use super::*;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
      pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| map.get(key).cloned()
  }

  #[test]
  fn log_format_from_str() {
    assert_eq!(LogFormat::from_str("json").unwrap(), LogFormat::Json);
    assert_eq!(LogFormat::from_str("PRETTY").unwrap(), LogFormat::Pretty);
    assert!(LogFormat::from_str("xml").is_err());
  }

  #[test]
  fn config_defaults() {
    let config = Config::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    assert_eq!(config.log.format, LogFormat::Json);
    assert_eq!(config.log.file, Some(PathBuf::from(DEFAULT_LOG_FILE)));
  }

  #[test]
  fn config_overrides() {
    let config = Config::from_lookup(lookup_from(&[
      ("TEXTSTAT_BIND_ADDR", "0.0.0.0:8080"),
      ("TEXTSTAT_DATABASE_URL", "sqlite::memory:"),
      ("TEXTSTAT_LOG_FORMAT", "pretty"),
      ("TEXTSTAT_LOG_FILE", "/tmp/textstat.log"),
    ]))
    .unwrap();

    assert_eq!(config.bind_addr, "0.0.0.0:8080");
    assert_eq!(config.database_url, "sqlite::memory:");
    assert_eq!(config.log.format, LogFormat::Pretty);
    assert_eq!(config.log.file, Some(PathBuf::from("/tmp/textstat.log")));
  }

  #[test]
  fn empty_log_file_disables_file_sink() {
    let config = Config::from_lookup(lookup_from(&[("TEXTSTAT_LOG_FILE", "")])).unwrap();
    assert_eq!(config.log.file, None);
  }

  #[test]
  fn invalid_log_format_is_config_error() {
    let err = Config::from_lookup(lookup_from(&[("TEXTSTAT_LOG_FORMAT", "xml")])).unwrap_err();
    assert_eq!(err.code(), "config_error");
  }

  #[test]
  fn config_from_env_reads_process_environment() {
    // Note: set_var/remove_var became unsafe in Rust 2024, so not used here
    // If an environment variable is set, it's that value, otherwise the default
    let config = Config::from_env().unwrap();
    assert!(!config.bind_addr.is_empty());
  }
}
