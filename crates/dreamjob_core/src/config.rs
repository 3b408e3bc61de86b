//! Core configuration loaded from JSON.
//!
//! # Responsibility
//! - Select the storage backend used to build repositories.
//! - Carry logging level and directory for `init_logging`.
//!
//! # Invariants
//! - Every field has a default; `{}` is a valid config (memory backend,
//!   build-mode log level, logging disabled).
//! - `validate()` normalizes the log level and rejects relative log dirs.

use crate::logging::{default_log_level, normalize_level};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unsupported log level `{0}`; expected trace|debug|info|warn|error")]
    InvalidLogLevel(String),
    #[error("log_dir must be an absolute path, got `{0}`")]
    RelativeLogDir(String),
}

/// Storage variant backing every repository of one process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum StorageConfig {
    /// Concurrent in-memory maps, vacancies seeded with example data.
    #[default]
    Memory,
    /// SQLite database file, migrated on open.
    Sqlite { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Absolute directory for rolling log files; `None` disables logging.
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl CoreConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&mut self) -> Result<(), ConfigError> {
        self.logging.level = normalize_level(&self.logging.level)
            .ok_or_else(|| ConfigError::InvalidLogLevel(self.logging.level.clone()))?
            .to_string();

        if let Some(dir) = &self.logging.log_dir {
            if !dir.is_absolute() {
                return Err(ConfigError::RelativeLogDir(dir.display().to_string()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig, StorageConfig};
    use std::path::PathBuf;

    #[test]
    fn empty_document_uses_defaults() {
        let config = CoreConfig::from_json_str("{}").unwrap();
        assert_eq!(config.storage, StorageConfig::Memory);
        assert!(config.logging.log_dir.is_none());
    }

    #[test]
    fn parses_sqlite_backend_and_normalizes_level() {
        let config = CoreConfig::from_json_str(
            r#"{
                "storage": { "backend": "sqlite", "path": "/var/lib/dreamjob/db.sqlite3" },
                "logging": { "level": " WARNING " }
            }"#,
        )
        .unwrap();

        assert_eq!(
            config.storage,
            StorageConfig::Sqlite {
                path: PathBuf::from("/var/lib/dreamjob/db.sqlite3")
            }
        );
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn rejects_unknown_level_and_relative_dir() {
        let err = CoreConfig::from_json_str(r#"{ "logging": { "level": "loud" } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(level) if level == "loud"));

        let err = CoreConfig::from_json_str(r#"{ "logging": { "log_dir": "logs" } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::RelativeLogDir(_)));
    }

    #[test]
    fn rejects_unknown_backend() {
        let err = CoreConfig::from_json_str(r#"{ "storage": { "backend": "redis" } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reports_missing_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = CoreConfig::load(&path).unwrap_err();
        match err {
            ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
