//! Configuration validation with range checks.

use std::ffi::OsStr;
use std::path::{Component, Path};

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !is_plain_file_name(&self.output.directory_name) {
            return Err(ConfigError::ValidationError(
                "output.directory_name must be a single, non-empty path component".into(),
            ));
        }
        if !is_plain_file_name(&self.output.manifest_filename) {
            return Err(ConfigError::ValidationError(
                "output.manifest_filename must be a single, non-empty path component".into(),
            ));
        }
        if self.limits.max_image_dimension == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_image_dimension must be > 0".into(),
            ));
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::ValidationError(
                "logging.format must be \"pretty\" or \"json\"".into(),
            ));
        }
        if let Some(manifest) = &self.general.manifest {
            if manifest.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "general.manifest must not be empty when set".into(),
                ));
            }
        }
        Ok(())
    }
}

/// True when `name` is exactly one normal path component (no separators, no `..`).
///
/// `Path::components` drops a trailing separator, so the name must also equal
/// its own `file_name`.
pub(crate) fn is_plain_file_name(name: &str) -> bool {
    let path = Path::new(name);
    let mut components = path.components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && path.file_name() == Some(OsStr::new(name))
}
