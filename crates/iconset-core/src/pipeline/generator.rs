//! Pipeline orchestration - wires the stages together for one run.
//!
//! ```text
//! manifest → plan (resolve + dedup) → decode source → reset output dir
//!          → one resize task per icon → join → report
//! ```
//!
//! Everything that can fail on bad input (manifest dimensions, source format,
//! source bytes) fails before the output directory is touched. Once workers
//! are running, the first failure ends the run; icons already written stay on
//! disk and the remaining workers are left to finish on their own.

use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

use tokio::task::{self, JoinSet};

use crate::config::{Config, OutputConfig};
use crate::error::{PipelineError, PipelineResult, Result};
use crate::manifest::{Manifest, ManifestDocument};
use crate::output::IconsetDirectory;
use crate::types::{GeneratedIcon, GenerationReport};

use super::decode::{format_to_string, ImageDecoder};
use super::dimension::DimensionResolver;
use super::plan::IconPlan;
use super::resize::ResizeWorker;

/// Generates an icon set from a source image and a manifest.
pub struct IconsetGenerator {
    resolver: DimensionResolver,
    decoder: ImageDecoder,
    output: OutputConfig,
}

impl IconsetGenerator {
    /// Create a new generator with the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            resolver: DimensionResolver::new(&config.limits),
            decoder: ImageDecoder::new(config.limits.clone()),
            output: config.output.clone(),
        }
    }

    /// Resolve and deduplicate the manifest entries without touching the disk.
    pub fn plan(&self, manifest: &Manifest) -> PipelineResult<IconPlan> {
        IconPlan::build(manifest, &self.resolver, &self.output.manifest_filename)
    }

    /// Run the whole pipeline.
    pub async fn generate(
        &self,
        source: &Path,
        output_root: &Path,
        manifest: &ManifestDocument,
    ) -> Result<GenerationReport> {
        self.generate_with_progress(source, output_root, manifest, |_, _, _| {})
            .await
    }

    /// Run the whole pipeline, calling `on_created(icon, done, total)` as each
    /// icon finishes (in completion order).
    pub async fn generate_with_progress<F>(
        &self,
        source: &Path,
        output_root: &Path,
        manifest: &ManifestDocument,
        mut on_created: F,
    ) -> Result<GenerationReport>
    where
        F: FnMut(&GeneratedIcon, usize, usize),
    {
        let start = Instant::now();

        let plan = self.plan(&manifest.manifest)?;
        tracing::trace!("  Plan: {:?}", start.elapsed());

        let decode_start = Instant::now();
        let decoded = self.decoder.decode(source).await?;
        tracing::debug!(
            "Decoded {:?} ({}x{} {}, {} bytes) in {:?}",
            source,
            decoded.width,
            decoded.height,
            format_to_string(decoded.format),
            decoded.file_size,
            decode_start.elapsed()
        );

        let dir = IconsetDirectory::prepare(output_root, &self.output, &manifest.bytes).await?;
        tracing::debug!("Manifest copied to {:?}", dir.manifest_path());

        let worker = ResizeWorker::new(decoded.image.clone(), dir.path());
        let total = plan.targets.len();
        let mut tasks = JoinSet::new();
        let mut names: HashMap<task::Id, String> = HashMap::with_capacity(total);

        for target in plan.targets {
            let worker = worker.clone();
            let filename = target.filename.clone();
            let handle = tasks.spawn_blocking(move || worker.render(&target));
            names.insert(handle.id(), filename);
        }

        let mut generated = Vec::with_capacity(total);
        while let Some(joined) = tasks.join_next_with_id().await {
            match task_outcome(joined, &mut names) {
                Ok(icon) => {
                    generated.push(icon);
                    let icon = &generated[generated.len() - 1];
                    tracing::debug!("Created {} ({}/{})", icon.filename, generated.len(), total);
                    on_created(icon, generated.len(), total);
                }
                Err(e) => {
                    // Outstanding workers keep running; each only touches its own file.
                    tasks.detach_all();
                    return Err(e.into());
                }
            }
        }

        let elapsed = start.elapsed();
        tracing::info!("Done creating icons in {:?}", elapsed);

        Ok(GenerationReport {
            output_dir: dir.path().to_path_buf(),
            generated,
            skipped: plan.skipped,
            elapsed,
        })
    }
}

/// Unwrap a joined resize task, naming its file when the task itself failed.
fn task_outcome<T>(
    joined: std::result::Result<(task::Id, PipelineResult<T>), task::JoinError>,
    names: &mut HashMap<task::Id, String>,
) -> PipelineResult<T> {
    match joined {
        Ok((id, result)) => {
            names.remove(&id);
            result
        }
        Err(e) => Err(PipelineError::Worker {
            filename: names.remove(&e.id()).unwrap_or_default(),
            message: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IconsetError;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::path::PathBuf;

    fn write_source(dir: &Path, name: &str, edge: u32) -> PathBuf {
        let path = dir.join(name);
        RgbaImage::from_pixel(edge, edge, Rgba([10, 120, 240, 255]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();
        path
    }

    fn document(json: &str) -> ManifestDocument {
        ManifestDocument::from_bytes(json.as_bytes().to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_generate_reports_every_icon() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_source(dir.path(), "icon.png", 64);
        let manifest = document(
            r#"{"images": [
                {"filename": "40.png", "idiom": "iphone", "size": "20x20", "scale": "2x"},
                {"filename": "40.png", "idiom": "ipad", "size": "40x40", "scale": "1x"},
                {"filename": "", "idiom": "ipad", "size": "10x10", "scale": "1x"},
                {"filename": "29.png", "idiom": "ipad", "size": "29x29", "scale": "1x"}
            ]}"#,
        );

        let generator = IconsetGenerator::new(&Config::default());
        let mut seen = Vec::new();
        let report = generator
            .generate_with_progress(&source, &dir.path().join("out"), &manifest, |icon, done, total| {
                seen.push((icon.filename.clone(), done, total));
            })
            .await
            .unwrap();

        assert_eq!(report.generated.len(), 2);
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(report.output_dir, dir.path().join("out/AppIcon.appiconset"));
        assert_eq!(seen.len(), 2);
        assert!(seen.iter().all(|(_, _, total)| *total == 2));
        let mut names: Vec<_> = seen.into_iter().map(|(name, _, _)| name).collect();
        names.sort();
        assert_eq!(names, vec!["29.png", "40.png"]);
    }

    #[tokio::test]
    async fn test_generate_with_empty_plan_still_copies_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_source(dir.path(), "icon.png", 16);
        let manifest = document(r#"{"images": [{"filename": "", "size": "1x1", "scale": "1x"}]}"#);

        let report = IconsetGenerator::new(&Config::default())
            .generate(&source, dir.path(), &manifest)
            .await
            .unwrap();

        assert!(report.generated.is_empty());
        assert!(report.output_dir.join("Contents.json").is_file());
    }

    #[tokio::test]
    async fn test_generate_surfaces_malformed_dimension() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_source(dir.path(), "icon.png", 16);
        let manifest =
            document(r#"{"images": [{"filename": "a.png", "size": "large", "scale": "1x"}]}"#);

        let err = IconsetGenerator::new(&Config::default())
            .generate(&source, dir.path(), &manifest)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            IconsetError::Pipeline(PipelineError::MalformedDimension { .. })
        ));
        assert!(!dir.path().join("AppIcon.appiconset").exists());
    }

    #[test]
    fn test_plan_without_io() {
        let generator = IconsetGenerator::new(&Config::default());
        let manifest = document(
            r#"{"images": [{"filename": "120.png", "size": "60x60", "scale": "2x"}]}"#,
        );
        let plan = generator.plan(&manifest.manifest).unwrap();
        assert_eq!(plan.targets[0].pixels, 120);
    }

    #[tokio::test]
    async fn test_panicked_worker_is_reported_by_filename() {
        let mut tasks = JoinSet::new();
        let mut names = HashMap::new();
        let handle = tasks.spawn_blocking(|| -> PipelineResult<GeneratedIcon> {
            panic!("encoder blew up")
        });
        names.insert(handle.id(), "58.png".to_string());

        let joined = tasks.join_next_with_id().await.unwrap();
        match task_outcome(joined, &mut names) {
            Err(PipelineError::Worker { filename, message }) => {
                assert_eq!(filename, "58.png");
                assert!(message.contains("panic"));
            }
            other => panic!("expected worker error, got {other:?}"),
        }
        assert!(names.is_empty());
    }
}
