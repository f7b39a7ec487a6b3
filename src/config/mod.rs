use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, WikiError};

/// Separator written between a page's content and its JSON metadata.
pub const DEFAULT_SEPARATOR: &str = "#####-----|+|-|-|+|-----#####";

/// Directory pages are stored under when nothing else is configured.
pub const DEFAULT_DATA_ROOT: &str = "data";

/// Page store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Filesystem path under which pages are stored
    #[serde(default = "default_data_root")]
    pub data_root: PathBuf,
    /// Literal token delimiting content from metadata
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_data_root() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_ROOT)
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            data_root: default_data_root(),
            separator: default_separator(),
        }
    }

    /// Create configuration with custom values
    pub fn with_custom(data_root: PathBuf, separator: Option<String>) -> Self {
        Self {
            data_root,
            separator: separator.unwrap_or_else(default_separator),
        }
    }

    /// Load config from a JSON document. Missing fields take their defaults.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|source| WikiError::Config { source })
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|source| WikiError::Config { source })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.data_root, PathBuf::from("data"));
        assert_eq!(config.separator, DEFAULT_SEPARATOR);
    }

    #[test]
    fn test_with_custom_keeps_default_separator() {
        let config = Config::with_custom(PathBuf::from("/tmp/wiki"), None);
        assert_eq!(config.data_root, PathBuf::from("/tmp/wiki"));
        assert_eq!(config.separator, DEFAULT_SEPARATOR);

        let config = Config::with_custom(PathBuf::from("w"), Some("%%%".to_string()));
        assert_eq!(config.separator, "%%%");
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = Config::from_json(r#"{ "data_root": "pages" }"#).unwrap();
        assert_eq!(config.data_root, PathBuf::from("pages"));
        assert_eq!(config.separator, DEFAULT_SEPARATOR);

        let back = Config::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = Config::from_json("data_root = 1").unwrap_err();
        assert!(matches!(err, WikiError::Config { .. }));
    }
}
