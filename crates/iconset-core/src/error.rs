//! Error types for the icon set pipeline.
//!
//! Errors are organized by stage so the operator sees which step failed along
//! with the relevant context (file paths, manifest fields, raw values).

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for icon set generation.
#[derive(Error, Debug)]
pub enum IconsetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Manifest loading errors
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// Pipeline processing errors
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Errors raised while reading or parsing the icon manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The manifest file could not be read
    #[error("Failed to read manifest {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not well-formed JSON or lacks the `images` list
    #[error("Failed to parse manifest: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Pipeline processing errors, organized by stage.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A size or scale field has no usable leading number
    #[error("Malformed {field} {value:?} for {filename:?}: {reason}")]
    MalformedDimension {
        filename: String,
        field: &'static str,
        value: String,
        reason: String,
    },

    /// A computed icon size exceeds the configured limit
    #[error("Target size for {filename:?} is {pixels}px (> {max_dim})")]
    TargetTooLarge {
        filename: String,
        pixels: u64,
        max_dim: u32,
    },

    /// A manifest file name would resolve outside the icon set or over the manifest copy
    #[error("Invalid file name {filename:?} in manifest entry {index}: {reason}")]
    InvalidFilename {
        index: usize,
        filename: String,
        reason: &'static str,
    },

    /// Source file extension is not one of the supported formats
    #[error("Unsupported format for {path}: {format}")]
    UnsupportedFormat { path: PathBuf, format: String },

    /// Source file does not exist
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Source bytes do not decode as the detected format
    #[error("Decode error for {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// Source image dimensions exceed the configured limit
    #[error("Image too large: {path} ({width}x{height} > {max_dim})")]
    ImageTooLarge {
        path: PathBuf,
        width: u32,
        height: u32,
        max_dim: u32,
    },

    /// The output directory could not be reset or the manifest copy failed
    #[error("Output directory error at {path}: {message}")]
    OutputDir { path: PathBuf, message: String },

    /// A generated icon could not be created or encoded
    #[error("Failed to write {path}: {message}")]
    Write { path: PathBuf, message: String },

    /// A resize task panicked or was lost by the runtime
    #[error("Worker for {filename:?} failed: {message}")]
    Worker { filename: String, message: String },
}

/// Convenience type alias for icon set results.
pub type Result<T> = std::result::Result<T, IconsetError>;

/// Convenience type alias for pipeline-specific results.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_dimension_message_names_field_and_value() {
        let err = PipelineError::MalformedDimension {
            filename: "40.png".to_string(),
            field: "scale",
            value: "twox".to_string(),
            reason: "no leading number".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("scale"));
        assert!(msg.contains("\"twox\""));
        assert!(msg.contains("40.png"));
    }

    #[test]
    fn test_invalid_filename_message_names_entry() {
        let err = PipelineError::InvalidFilename {
            index: 3,
            filename: "../x.png".to_string(),
            reason: "must be a single path component",
        };
        let msg = err.to_string();
        assert!(msg.contains("\"../x.png\""));
        assert!(msg.contains("entry 3"));
    }

    #[test]
    fn test_pipeline_error_wraps_into_top_level() {
        let err: IconsetError = PipelineError::FileNotFound(PathBuf::from("icon.png")).into();
        assert!(matches!(err, IconsetError::Pipeline(_)));
        assert!(err.to_string().starts_with("Pipeline error: File not found"));
    }
}
