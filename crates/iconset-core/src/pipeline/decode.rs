//! Source image decoding with extension-based format detection.
//!
//! The source is decoded once per run into an RGBA buffer behind an `Arc`, so
//! every resize worker reads the same pixels without copying or locking.

use image::{GenericImageView, ImageFormat, RgbaImage};
use std::path::Path;
use std::sync::Arc;

use crate::config::LimitsConfig;
use crate::error::{PipelineError, PipelineResult};

/// Image decoder with configurable limits.
pub struct ImageDecoder {
    limits: LimitsConfig,
}

/// Result of decoding the source image.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Shared, read-only RGBA pixels
    pub image: Arc<RgbaImage>,
    /// Format the source was decoded as
    pub format: ImageFormat,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Source file size in bytes
    pub file_size: u64,
}

impl ImageDecoder {
    /// Create a new decoder with the given limits.
    pub fn new(limits: LimitsConfig) -> Self {
        Self { limits }
    }

    /// Decode the source image at `path`.
    ///
    /// The extension is checked before the file is opened, so an unsupported
    /// source fails without any I/O.
    pub async fn decode(&self, path: &Path) -> PipelineResult<DecodedImage> {
        let format = detect_format(path)?;

        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(PipelineError::FileNotFound(path.to_path_buf()));
            }
            Err(e) => {
                return Err(PipelineError::Decode {
                    path: path.to_path_buf(),
                    message: format!("Cannot read file: {}", e),
                });
            }
        };

        self.decode_from_bytes(bytes, format, path).await
    }

    /// Decode an in-memory buffer as `format` on the blocking pool.
    pub async fn decode_from_bytes(
        &self,
        bytes: Vec<u8>,
        format: ImageFormat,
        path: &Path,
    ) -> PipelineResult<DecodedImage> {
        let path_owned = path.to_path_buf();
        let decoded =
            tokio::task::spawn_blocking(move || Self::decode_bytes_sync(bytes, format, &path_owned))
                .await
                .map_err(|e| PipelineError::Decode {
                    path: path.to_path_buf(),
                    message: format!("Task join error: {}", e),
                })??;

        let max_dim = self.limits.max_image_dimension;
        if decoded.width > max_dim || decoded.height > max_dim {
            return Err(PipelineError::ImageTooLarge {
                path: path.to_path_buf(),
                width: decoded.width,
                height: decoded.height,
                max_dim,
            });
        }

        if decoded.width != decoded.height {
            tracing::warn!(
                "Source {:?} is {}x{}; icons will be stretched to squares",
                path,
                decoded.width,
                decoded.height
            );
        }

        Ok(decoded)
    }

    /// Synchronous decode from bytes (runs in spawn_blocking).
    fn decode_bytes_sync(
        bytes: Vec<u8>,
        format: ImageFormat,
        path: &Path,
    ) -> PipelineResult<DecodedImage> {
        let file_size = bytes.len() as u64;
        let image = image::load_from_memory_with_format(&bytes, format).map_err(|e| {
            PipelineError::Decode {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?;

        let (width, height) = image.dimensions();
        Ok(DecodedImage {
            image: Arc::new(image.into_rgba8()),
            format,
            width,
            height,
            file_size,
        })
    }
}

/// Map a source extension to a decoder format.
///
/// Matching is case-sensitive: `png`, `jpg` and `jpeg` only.
pub fn detect_format(path: &Path) -> PipelineResult<ImageFormat> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") => Ok(ImageFormat::Png),
        Some("jpg") | Some("jpeg") => Ok(ImageFormat::Jpeg),
        other => Err(PipelineError::UnsupportedFormat {
            path: path.to_path_buf(),
            format: other.unwrap_or("no extension").to_string(),
        }),
    }
}

/// Convert an ImageFormat to a string representation.
pub fn format_to_string(format: ImageFormat) -> String {
    match format {
        ImageFormat::Jpeg => "jpeg".to_string(),
        ImageFormat::Png => "png".to_string(),
        _ => "unknown".to_string(),
    }
}
