//! Configuration management for iconset.
//!
//! Configuration is loaded from the platform config directory
//! (`~/.config/iconset/config.toml` on Linux) with sensible defaults.
//! Every section is optional; a missing file means all defaults.

mod types;
mod validate;

pub use types::*;
pub(crate) use validate::is_plain_file_name;

use crate::error::ConfigError;
use crate::manifest::ManifestSource;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Output directory layout
    pub output: OutputConfig,

    /// Resource limits
    pub limits: LimitsConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories:
    /// - macOS: ~/Library/Application Support/com.iconset.iconset/config.toml
    /// - Linux: ~/.config/iconset/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\iconset\config\config.toml
    ///
    /// Falls back to ~/.iconset/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "iconset", "iconset")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".iconset").join("config.toml")
            })
    }

    /// Resolve where the manifest comes from.
    ///
    /// A configured `general.manifest` path (with `~` expansion) wins;
    /// otherwise the manifest compiled into the binary is used.
    pub fn manifest_source(&self) -> ManifestSource {
        match &self.general.manifest {
            Some(path) => {
                let expanded = shellexpand::tilde(path);
                ManifestSource::File(PathBuf::from(expanded.into_owned()))
            }
            None => ManifestSource::Embedded,
        }
    }
}
