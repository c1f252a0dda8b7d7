use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing_subscriber::filter;

pub const DEFAULT_FILE_NAME: &str = "signup.toml";
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api/v1";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Base URL of the registration API.
    pub api_url: Option<String>,
    /// log level, can be "info", "debug", "trace".
    pub log_level: Option<String>,
    /// Use iced debug feature if true.
    pub debug: Option<bool>,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = std::fs::read_to_string(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ConfigError::NotFound,
                _ => ConfigError::ReadingFile(format!("Reading configuration file: {}", e)),
            })
            .and_then(|content| {
                toml::from_str::<Config>(&content).map_err(|e| {
                    ConfigError::ReadingFile(format!("Parsing configuration file: {}", e))
                })
            })?;

        // check if log_level field is valid
        config.log_level()?;
        Ok(config)
    }

    pub fn to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string(&self)
            .map_err(|e| ConfigError::WritingFile(format!("Failed to serialize config: {}", e)))?;

        let mut config_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| ConfigError::WritingFile(e.to_string()))?;

        config_file
            .write_all(content.as_bytes())
            .map_err(|e| ConfigError::WritingFile(e.to_string()))?;

        tracing::info!("Done writing signup configuration file");
        Ok(())
    }

    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    pub fn log_level(&self) -> Result<filter::LevelFilter, ConfigError> {
        if let Some(level) = &self.log_level {
            match level.as_ref() {
                "info" => Ok(filter::LevelFilter::INFO),
                "debug" => Ok(filter::LevelFilter::DEBUG),
                "trace" => Ok(filter::LevelFilter::TRACE),
                _ => Err(ConfigError::InvalidField(
                    "log_level",
                    format!("Unknown value '{}'", level),
                )),
            }
        } else if let Some(true) = self.debug {
            Ok(filter::LevelFilter::DEBUG)
        } else {
            Ok(filter::LevelFilter::INFO)
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum ConfigError {
    InvalidField(&'static str, String),
    NotFound,
    ReadingFile(String),
    WritingFile(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::InvalidField(field, message) => {
                write!(f, "Invalid configuration field '{}': {}", field, message)
            }
            Self::NotFound => write!(f, "Configuration file not found"),
            Self::ReadingFile(e) => write!(f, "Error while reading file: {}", e),
            Self::WritingFile(e) => write!(f, "Error while writing file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_file() {
        let config: Config = toml::from_str(
            r#"
            api_url = "https://api.example.org/v2"
            log_level = "debug"
            debug = false
            "#,
        )
        .unwrap();
        assert_eq!(config.api_url(), "https://api.example.org/v2");
        assert_eq!(config.log_level().unwrap(), filter::LevelFilter::DEBUG);
    }

    #[test]
    fn applies_defaults() {
        let config = Config::default();
        assert_eq!(config.api_url(), DEFAULT_API_URL);
        assert_eq!(config.log_level().unwrap(), filter::LevelFilter::INFO);
    }

    #[test]
    fn writes_and_reads_back_a_file() {
        let path = std::env::temp_dir().join(format!("signup-{}.toml", std::process::id()));
        let config = Config {
            api_url: Some("https://api.example.org/v2".to_string()),
            log_level: Some("trace".to_string()),
            debug: None,
        };
        config.to_file(&path).unwrap();

        let read = Config::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(read.api_url(), "https://api.example.org/v2");
        assert_eq!(read.log_level().unwrap(), filter::LevelFilter::TRACE);
    }

    #[test]
    fn missing_file_is_reported_as_not_found() {
        let path = std::env::temp_dir().join("signup-does-not-exist.toml");
        assert!(matches!(
            Config::from_file(&path),
            Err(ConfigError::NotFound)
        ));
    }

    #[test]
    fn rejects_unknown_log_level() {
        let config = Config {
            log_level: Some("noisy".to_string()),
            ..Config::default()
        };
        assert!(matches!(
            config.log_level(),
            Err(ConfigError::InvalidField("log_level", _))
        ));
    }
}
