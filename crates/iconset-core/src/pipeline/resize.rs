//! Icon rendering: nearest-neighbor scale to a square, PNG to disk.

use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{PipelineError, PipelineResult};
use crate::types::{GeneratedIcon, IconTarget};

/// Renders icons from the shared source into one output directory.
///
/// Cloning is cheap: the source pixels sit behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ResizeWorker {
    source: Arc<RgbaImage>,
    output_dir: PathBuf,
}

impl ResizeWorker {
    pub fn new(source: Arc<RgbaImage>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source,
            output_dir: output_dir.into(),
        }
    }

    /// Render one icon and write it as `<output_dir>/<filename>`.
    ///
    /// Blocking; callers run it on the blocking pool.
    pub fn render(&self, target: &IconTarget) -> PipelineResult<GeneratedIcon> {
        let path = self.output_dir.join(&target.filename);
        let icon = scale_nearest(&self.source, target.pixels);
        write_png(&icon, &path)?;

        tracing::trace!("Wrote {:?} ({}px)", path, target.pixels);
        Ok(GeneratedIcon {
            filename: target.filename.clone(),
            path,
            pixels: target.pixels,
        })
    }
}

/// Scale `source` to a `pixels`×`pixels` square with nearest-neighbor sampling.
///
/// The result starts as a fully transparent canvas with the scaled source drawn
/// over it; over a blank canvas that is exactly the scaled source, so no
/// blending pass is needed.
pub fn scale_nearest(source: &RgbaImage, pixels: u32) -> RgbaImage {
    imageops::resize(source, pixels, pixels, FilterType::Nearest)
}

/// Encode `icon` as PNG at `path`, creating or truncating the file.
pub fn write_png(icon: &RgbaImage, path: &Path) -> PipelineResult<()> {
    let file = File::create(path).map_err(|e| PipelineError::Write {
        path: path.to_path_buf(),
        message: format!("Cannot create file: {}", e),
    })?;
    let mut writer = BufWriter::new(file);

    icon.write_to(&mut writer, ImageFormat::Png)
        .map_err(|e| PipelineError::Write {
            path: path.to_path_buf(),
            message: format!("PNG encode failed: {}", e),
        })?;
    writer.flush().map_err(|e| PipelineError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(())
}
