//! Sub-configuration structs with their defaults.

use serde::Deserialize;

/// General settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Manifest to read instead of the built-in one (supports `~`)
    pub manifest: Option<String>,
}

/// Output directory layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory created under the output path; replaced on every run
    pub directory_name: String,

    /// Name of the manifest copy written next to the icons
    pub manifest_filename: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory_name: "AppIcon.appiconset".to_string(),
            manifest_filename: "Contents.json".to_string(),
        }
    }
}

/// Resource limits to protect against problematic inputs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum edge length, in pixels, for both the source and generated icons
    pub max_image_dimension: u32,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_image_dimension: 10000,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
