use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Idle delay before a changed document is autosaved.
    #[serde(default = "default_autosave_delay_ms")]
    pub autosave_delay_ms: u64,
    /// Trailing debounce window for the preview pane.
    #[serde(default = "default_preview_debounce_ms")]
    pub preview_debounce_ms: u64,
    /// File name prefix for exported documents.
    #[serde(default = "default_export_prefix")]
    pub export_prefix: String,
}

fn default_autosave_delay_ms() -> u64 {
    2000
}

fn default_preview_debounce_ms() -> u64 {
    300
}

fn default_export_prefix() -> String {
    "marknote".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            autosave_delay_ms: default_autosave_delay_ms(),
            preview_debounce_ms: default_preview_debounce_ms(),
            export_prefix: default_export_prefix(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/marknote");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Fixed location of the single autosave record.
    pub fn autosave_path() -> PathBuf {
        let data_dir = shellexpand::tilde("~/.local/share/marknote");
        PathBuf::from(data_dir.as_ref()).join("autosave.md")
    }
}
