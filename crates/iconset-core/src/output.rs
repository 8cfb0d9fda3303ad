//! Output directory handling.
//!
//! Each run owns `<output>/<directory_name>` completely: whatever is there is
//! removed, the directory is recreated empty and the manifest copy is written
//! before any icon lands in it.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::OutputConfig;
use crate::error::{PipelineError, PipelineResult};

/// A freshly reset icon set directory.
#[derive(Debug, Clone)]
pub struct IconsetDirectory {
    path: PathBuf,
    manifest_path: PathBuf,
}

impl IconsetDirectory {
    /// Remove and recreate `<root>/<directory_name>`, then copy the manifest into it.
    ///
    /// `root` is created if it does not exist yet.
    pub async fn prepare(
        root: &Path,
        config: &OutputConfig,
        manifest_bytes: &[u8],
    ) -> PipelineResult<Self> {
        let path = root.join(&config.directory_name);

        match tokio::fs::remove_dir_all(&path).await {
            Ok(()) => tracing::debug!("Removed previous icon set at {:?}", path),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(output_error(&path, "Cannot remove existing directory", e)),
        }

        tokio::fs::create_dir_all(&path)
            .await
            .map_err(|e| output_error(&path, "Cannot create directory", e))?;

        let manifest_path = path.join(&config.manifest_filename);
        tokio::fs::write(&manifest_path, manifest_bytes)
            .await
            .map_err(|e| output_error(&manifest_path, "Cannot write manifest copy", e))?;

        Ok(Self {
            path,
            manifest_path,
        })
    }

    /// The icon set directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The manifest copy inside the directory.
    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }
}

fn output_error(path: &Path, what: &str, e: std::io::Error) -> PipelineError {
    PipelineError::OutputDir {
        path: path.to_path_buf(),
        message: format!("{}: {}", what, e),
    }
}
