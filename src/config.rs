use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::document::DEFAULT_HISTORY_CAPACITY;

fn default_true() -> bool {
    true
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

/// Editor behaviour configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Number of undo snapshots kept (default: 5)
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// Print the command menu before every prompt
    #[serde(default = "default_true")]
    pub show_menu: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_capacity: default_history_capacity(),
            show_menu: true,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub editor: EditorConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file(path: impl AsRef<Path>) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| miette::miette!("Failed to read config file: {}", e))?;

        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> miette::Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| miette::miette!("Failed to parse config file: {}", e))?;

        if config.editor.history_capacity == 0 {
            return Err(miette::miette!(
                "Invalid config: editor.history_capacity must be at least 1"
            ));
        }

        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> miette::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| miette::miette!("Failed to serialize config: {}", e))?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| miette::miette!("Failed to create config directory: {}", e))?;
        }

        std::fs::write(path.as_ref(), content)
            .map_err(|e| miette::miette!("Failed to write config file: {}", e))?;

        Ok(())
    }

    /// Load configuration from default location or use defaults
    pub fn load_or_default() -> Self {
        let config_path = Self::default_config_path();

        if config_path.exists() {
            Self::load_from_file(&config_path).unwrap_or_else(|e| {
                log::warn!("ignoring {}: {}", config_path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Get default config file path
    pub fn default_config_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("stack-edit").join("config.toml")
        } else {
            PathBuf::from(".stack-edit.toml")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.editor.history_capacity, 5);
        assert!(config.editor.show_menu);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
            [editor]
            show_menu = false
        "#;

        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.editor.history_capacity, 5);
        assert!(!config.editor.show_menu);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let toml = r#"
            [editor]
            history_capacity = 0
        "#;

        assert!(Config::from_toml(toml).is_err());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(Config::from_toml("[editor").is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            editor: EditorConfig {
                history_capacity: 10,
                show_menu: false,
            },
        };
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from_file(dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.ends_with("config.toml") || path.ends_with(".stack-edit.toml"));
    }
}
