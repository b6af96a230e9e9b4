//! # Companion configuration
//!
//! Loaded from a small TOML file:
//!
//! ```toml
//! # Must match the watchface build installed on the watch
//! schema = "three-key"
//! # Send non-JSON notifications as a single text element
//! fallback_to_text = true
//! ```

use std::fs;
use std::path::Path;

use pebbar_protocol::Schema;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Configuration errors
#[derive(Debug, Error)]
pub enum CompanionConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Companion settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanionConfig {
    /// Key layout of the watchface build on the other end
    pub schema: Schema,
    /// Wrap notifications that are not face JSON as plain text
    pub fallback_to_text: bool,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            schema: Schema::ThreeKey,
            fallback_to_text: true,
        }
    }
}

impl CompanionConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, CompanionConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration from `path`
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, CompanionConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load configuration from `path`, falling back to defaults
    ///
    /// A missing or malformed file is logged and otherwise ignored.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load_from_path(path) {
            Ok(config) => {
                info!(path = %path.display(), schema = ?config.schema, "loaded companion config");
                config
            }
            Err(CompanionConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no config file, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring config file");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CompanionConfig::default();
        assert_eq!(config.schema, Schema::ThreeKey);
        assert!(config.fallback_to_text);
    }

    #[test]
    fn test_parse_full() {
        let config = CompanionConfig::from_toml_str(
            r#"
            schema = "two-key"
            fallback_to_text = false
            "#,
        )
        .unwrap();
        assert_eq!(config.schema, Schema::TwoKey);
        assert!(!config.fallback_to_text);
    }

    #[test]
    fn test_parse_partial_uses_defaults() {
        let config = CompanionConfig::from_toml_str("fallback_to_text = false").unwrap();
        assert_eq!(config.schema, Schema::ThreeKey);
        assert!(CompanionConfig::from_toml_str("").unwrap().fallback_to_text);
    }

    #[test]
    fn test_parse_unknown_schema() {
        let err = CompanionConfig::from_toml_str(r#"schema = "four-key""#).unwrap_err();
        assert!(matches!(err, CompanionConfigError::Toml(_)));
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"schema = "two-key""#).unwrap();

        let config = CompanionConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.schema, Schema::TwoKey);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = CompanionConfig::load_or_default(dir.path().join("pebbar.toml"));
        assert_eq!(config, CompanionConfig::default());
    }

    #[test]
    fn test_load_or_default_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "schema = [").unwrap();
        assert_eq!(
            CompanionConfig::load_or_default(file.path()),
            CompanionConfig::default()
        );
    }
}
