/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Engine and history configuration, read from TOML.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Hard ceiling on retained history entries.
pub const MAX_HISTORY: usize = 50;

/// Storage key of the persisted history blob.
pub const DEFAULT_NAMESPACE: &str = "citation-history";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generation: GenerationConfig,

    #[serde(default)]
    pub history: HistoryConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Reject generation when a required field is absent instead of
    /// rendering an empty slot.
    #[serde(default)]
    pub require_fields: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Directory for file-backed history; in-memory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            namespace: default_namespace(),
            dir: None,
        }
    }
}

impl HistoryConfig {
    /// The configured capacity clamped to `1..=MAX_HISTORY`.
    pub fn effective_capacity(&self) -> usize {
        self.capacity.clamp(1, MAX_HISTORY)
    }
}

fn default_capacity() -> usize {
    MAX_HISTORY
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, "<string>")
    }

    fn parse(content: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.generation.require_fields);
        assert_eq!(config.history.capacity, 50);
        assert_eq!(config.history.namespace, "citation-history");
        assert!(config.history.dir.is_none());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml_str(
            r#"
[generation]
require_fields = true

[history]
capacity = 10
dir = "/tmp/citegen"
"#,
        )
        .unwrap();
        assert!(config.generation.require_fields);
        assert_eq!(config.history.capacity, 10);
        assert_eq!(config.history.namespace, DEFAULT_NAMESPACE);
        assert_eq!(config.history.dir, Some(PathBuf::from("/tmp/citegen")));
    }

    #[test]
    fn test_capacity_is_clamped() {
        let mut history = HistoryConfig {
            capacity: 500,
            ..Default::default()
        };
        assert_eq!(history.effective_capacity(), MAX_HISTORY);
        history.capacity = 0;
        assert_eq!(history.effective_capacity(), 1);
    }

    #[test]
    fn test_parse_error_names_origin() {
        let err = Config::from_toml_str("[history]\ncapacity = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { ref path, .. } if path == "<string>"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("citegen.toml");
        let mut config = Config::default();
        config.history.capacity = 25;
        config.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);
    }
}
