//! Head configuration.
//!
//! Controls the marker class stamped on every managed tag and the content of
//! the default contribution. Every field has a default, so an empty TOML
//! document is a valid configuration.
//!
//! ```toml
//! class_name = "spark-head"
//! charset = "utf-8"
//! viewport = "width=device-width,minimum-scale=1,initial-scale=1"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Marker class appended to every managed tag.
pub const DEFAULT_CLASS_NAME: &str = "spark-head";

/// Character encoding of the default charset meta.
pub const DEFAULT_CHARSET: &str = "utf-8";

/// Content of the default viewport meta.
pub const DEFAULT_VIEWPORT: &str = "width=device-width,minimum-scale=1,initial-scale=1";

/// Configuration for reconciliation and the default contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadConfig {
    /// Marker class appended to the class list of every managed tag.
    #[serde(default = "default_class_name")]
    pub class_name: String,

    /// Encoding declared by the default charset meta.
    #[serde(default = "default_charset")]
    pub charset: String,

    /// Content of the default viewport meta (omitted in restricted mode).
    #[serde(default = "default_viewport")]
    pub viewport: String,
}

fn default_class_name() -> String {
    DEFAULT_CLASS_NAME.to_string()
}

fn default_charset() -> String {
    DEFAULT_CHARSET.to_string()
}

fn default_viewport() -> String {
    DEFAULT_VIEWPORT.to_string()
}

impl Default for HeadConfig {
    fn default() -> Self {
        Self {
            class_name: default_class_name(),
            charset: default_charset(),
            viewport: default_viewport(),
        }
    }
}

impl HeadConfig {
    /// Default configuration with a different marker class.
    pub fn with_class_name(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            ..Self::default()
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), class_name = %config.class_name, "loaded head config");
        Ok(config)
    }

    /// Check invariants the reconciler relies on.
    ///
    /// The marker class must be a single non-empty class token.
    pub fn validate(&self) -> Result<()> {
        if self.class_name.is_empty() {
            return Err(ConfigError::Invalid("class_name must not be empty".into()));
        }
        if self.class_name.chars().any(char::is_whitespace) {
            return Err(ConfigError::Invalid(format!(
                "class_name must be a single class, got {:?}",
                self.class_name
            )));
        }
        if self.charset.trim().is_empty() {
            return Err(ConfigError::Invalid("charset must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = HeadConfig::from_toml_str("").unwrap();
        assert_eq!(config, HeadConfig::default());
        assert_eq!(config.class_name, "spark-head");
        assert_eq!(config.charset, "utf-8");
    }

    #[test]
    fn test_partial_override() {
        let config = HeadConfig::from_toml_str(r#"class_name = "my-head""#).unwrap();
        assert_eq!(config.class_name, "my-head");
        assert_eq!(config.viewport, DEFAULT_VIEWPORT);
    }

    #[test]
    fn test_rejects_multi_class_marker() {
        let err = HeadConfig::from_toml_str(r#"class_name = "a b""#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_empty_marker() {
        let err = HeadConfig::with_class_name("").validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_parse_error() {
        let err = HeadConfig::from_toml_str("class_name = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = HeadConfig::load("/definitely/not/here/head.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("spark-head-{}.toml", std::process::id()));
        std::fs::write(&path, "charset = \"iso-8859-1\"\n").unwrap();
        let config = HeadConfig::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(config.charset, "iso-8859-1");
    }
}
