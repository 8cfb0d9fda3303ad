//! Icon manifest loading.
//!
//! The manifest is an Xcode-style `Contents.json`: an `images` list naming each
//! required file with its logical size and scale, plus an `info` block. Only
//! `filename`, `size` and `scale` drive generation; the raw bytes are kept so
//! the manifest can be copied into the output directory unchanged.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ManifestError;

/// The default `AppIcon` manifest (iPhone, iPad, App Store, Mac).
pub const EMBEDDED_MANIFEST: &[u8] = include_bytes!("../assets/Contents.json");

/// One required output image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSpec {
    /// Output file name; empty means the entry has no asset and is skipped
    #[serde(default)]
    pub filename: String,

    /// Device family ("iphone", "ipad", "mac", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idiom: Option<String>,

    /// Scale factor, e.g. "2x"
    pub scale: String,

    /// Logical size in points, e.g. "40x40"
    pub size: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
}

/// Parsed icon manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Required images, in manifest order
    pub images: Vec<IconSpec>,

    /// Metadata block, kept as-is; any JSON value (or none) is accepted
    #[serde(default)]
    pub info: serde_json::Value,
}

impl Manifest {
    /// Parse a manifest from raw JSON bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ManifestError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Where the manifest is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    /// The manifest compiled into the binary
    Embedded,
    /// A manifest file on disk
    File(PathBuf),
}

impl ManifestSource {
    /// Read the raw manifest bytes.
    pub fn read(&self) -> Result<Vec<u8>, ManifestError> {
        match self {
            ManifestSource::Embedded => Ok(EMBEDDED_MANIFEST.to_vec()),
            ManifestSource::File(path) => {
                std::fs::read(path).map_err(|source| ManifestError::Read {
                    path: path.clone(),
                    source,
                })
            }
        }
    }
}

impl std::fmt::Display for ManifestSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestSource::Embedded => write!(f, "built-in manifest"),
            ManifestSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A parsed manifest together with the exact bytes it was parsed from.
#[derive(Debug, Clone)]
pub struct ManifestDocument {
    /// Raw manifest bytes, copied verbatim to the output directory
    pub bytes: Vec<u8>,
    /// Parsed view of `bytes`
    pub manifest: Manifest,
}

impl ManifestDocument {
    /// Read and parse a manifest from the given source.
    pub fn load(source: &ManifestSource) -> Result<Self, ManifestError> {
        let bytes = source.read()?;
        Self::from_bytes(bytes)
    }

    /// Parse a manifest from bytes already in memory.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, ManifestError> {
        let manifest = Manifest::from_bytes(&bytes)?;
        tracing::debug!("Manifest loaded: {} image entries", manifest.images.len());
        Ok(Self { bytes, manifest })
    }
}
