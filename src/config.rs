// Fri Oct 16 2026 - Alex

use crate::pattern::hex::DEFAULT_WILDCARD;
use crate::stream::{DEFAULT_BUFFER_SIZE, MIN_BUFFER_SIZE};
use crate::utils::logging::LoggingUtils;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0:?}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub buffer_size: usize,
    pub log_level: String,
    pub color: bool,
    pub wildcard_token: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            log_level: "warn".to_string(),
            color: true,
            wildcard_token: DEFAULT_WILDCARD.to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_log_level(mut self, level: &str) -> Self {
        self.log_level = level.to_string();
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_size < MIN_BUFFER_SIZE {
            return Err(ConfigError::Invalid(format!(
                "buffer_size must be at least {}",
                MIN_BUFFER_SIZE
            )));
        }

        // A hex-looking token would be ambiguous with literal bytes.
        let token = &self.wildcard_token;
        if token.chars().count() != 2 || token.chars().any(|c| c.is_ascii_hexdigit() || c.is_whitespace() || c == ',') {
            return Err(ConfigError::Invalid(format!(
                "wildcard_token must be two non-hex characters, got {:?}",
                token
            )));
        }

        if LoggingUtils::parse_level(&self.log_level).is_none() {
            return Err(ConfigError::Invalid(format!("unknown log_level {:?}", self.log_level)));
        }

        Ok(())
    }

    pub fn level_filter(&self) -> LevelFilter {
        LoggingUtils::level_from_str(&self.log_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.buffer_size, 65535);
        assert_eq!(config.wildcard_token, "??");
        assert!(config.validate().is_ok());
        assert_eq!(config.level_filter(), LevelFilter::Warn);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = Config::from_json(r#"{ "buffer_size": 4096 }"#).unwrap();
        assert_eq!(config.buffer_size, 4096);
        assert_eq!(config.log_level, "warn");
        assert!(config.color);
    }

    #[test]
    fn test_rejects_small_buffer() {
        let err = Config::from_json(r#"{ "buffer_size": 1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_hex_wildcard_token() {
        let config = Config { wildcard_token: "AA".to_string(), ..Config::default() };
        assert!(config.validate().is_err());

        let config = Config { wildcard_token: "?".to_string(), ..Config::default() };
        assert!(config.validate().is_err());

        let config = Config { wildcard_token: "**".to_string(), ..Config::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let config = Config::new().with_log_level("chatty");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Config::from_json("{ buffer_size"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hexpatch.json");
        let config = Config::new().with_buffer_size(1024).with_log_level("debug").with_color(false);

        config.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load("/nonexistent/hexpatch.json").unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }
}
