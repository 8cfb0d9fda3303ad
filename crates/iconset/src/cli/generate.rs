//! Icon set generation: flag checks, progress reporting, and the run summary.

use anyhow::Context;
use clap::Args;
use iconset_core::{Config, GeneratedIcon, GenerationReport, IconsetGenerator, ManifestDocument};
use indicatif::ProgressBar;
use std::path::PathBuf;

/// Flags for a generation run.
///
/// Both paths are optional at the clap level so a missing one can be reported
/// with our own message on stdout instead of clap's error on stderr.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Source image (.png, .jpg or .jpeg)
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Directory that receives AppIcon.appiconset
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Validated paths for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// A required flag that was not given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingFlag {
    Input,
    Output,
}

impl std::fmt::Display for MissingFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingFlag::Input => write!(
                f,
                "no input path provided\nplease give an input image with the -i flag"
            ),
            MissingFlag::Output => write!(
                f,
                "no output path provided\nplease give an output directory with the -o flag"
            ),
        }
    }
}

impl GenerateArgs {
    /// Check that both required paths are present.
    pub fn into_request(self) -> Result<GenerateRequest, MissingFlag> {
        let input = self.input.ok_or(MissingFlag::Input)?;
        let output = self.output.ok_or(MissingFlag::Output)?;
        Ok(GenerateRequest { input, output })
    }
}

/// Execute a generation run.
pub async fn execute(request: GenerateRequest, config: &Config) -> anyhow::Result<()> {
    let source = config.manifest_source();
    let manifest = ManifestDocument::load(&source)
        .with_context(|| format!("Cannot load manifest from {}", source))?;
    tracing::debug!(
        "Using {} with {} entries",
        source,
        manifest.manifest.images.len()
    );

    let generator = IconsetGenerator::new(config);
    // Per-icon debug lines would tear the bar, so it only draws at info and above.
    let progress = create_progress_bar(!tracing::enabled!(tracing::Level::DEBUG));

    let result = generator
        .generate_with_progress(
            &request.input,
            &request.output,
            &manifest,
            |icon, done, total| record_progress(&progress, icon, done, total),
        )
        .await;
    progress.finish_and_clear();

    let report = result?;
    print_summary(&report);
    Ok(())
}

/// Advance the bar; it is cleared with the last icon so later log lines print cleanly.
fn record_progress(progress: &ProgressBar, icon: &GeneratedIcon, done: usize, total: usize) {
    progress.set_length(total as u64);
    progress.set_position(done as u64);
    progress.set_message(icon.filename.clone());
    if done == total {
        progress.finish_and_clear();
    }
}

/// Create a progress bar; its length is set once the first icon completes.
fn create_progress_bar(visible: bool) -> ProgressBar {
    use indicatif::ProgressStyle;

    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-"),
    );
    pb.set_message("rendering...");
    pb
}

/// Print a formatted summary after a successful run.
fn print_summary(report: &GenerationReport) {
    let secs = report.elapsed.as_secs_f64();
    let rate = if secs > 0.0 {
        report.generated.len() as f64 / secs
    } else {
        0.0
    };

    eprintln!();
    eprintln!("  ====================================");
    eprintln!("               Summary");
    eprintln!("  ====================================");
    eprintln!("    Generated:    {:>8}", report.generated.len());
    if !report.skipped.is_empty() {
        eprintln!("    Skipped:      {:>8}", report.skipped.len());
    }
    eprintln!("  ------------------------------------");
    eprintln!("    Duration:     {:>7.2}s", secs);
    eprintln!("    Rate:         {:>7.1} icons/sec", rate);
    eprintln!("  ====================================");
    eprintln!("    {}", report.output_dir.display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_request_with_both_paths() {
        let args = GenerateArgs {
            input: Some(PathBuf::from("logo.png")),
            output: Some(PathBuf::from("Assets.xcassets")),
        };
        assert_eq!(
            args.into_request().unwrap(),
            GenerateRequest {
                input: PathBuf::from("logo.png"),
                output: PathBuf::from("Assets.xcassets"),
            }
        );
    }

    #[test]
    fn into_request_reports_missing_input_first() {
        let args = GenerateArgs::default();
        assert_eq!(args.into_request().unwrap_err(), MissingFlag::Input);
    }

    #[test]
    fn into_request_reports_missing_output() {
        let args = GenerateArgs {
            input: Some(PathBuf::from("logo.png")),
            output: None,
        };
        assert_eq!(args.into_request().unwrap_err(), MissingFlag::Output);
    }

    #[test]
    fn missing_flag_message_names_the_flag() {
        assert!(MissingFlag::Input.to_string().contains("-i"));
        assert!(MissingFlag::Output.to_string().contains("-o"));
    }

    #[test]
    fn progress_bar_finishes_with_last_icon() {
        let pb = ProgressBar::hidden();
        let icon = |name: &str| GeneratedIcon {
            filename: name.to_string(),
            path: PathBuf::from(name),
            pixels: 40,
        };

        record_progress(&pb, &icon("40.png"), 1, 2);
        assert!(!pb.is_finished());
        assert_eq!(pb.position(), 1);
        assert_eq!(pb.length(), Some(2));

        record_progress(&pb, &icon("80.png"), 2, 2);
        assert!(pb.is_finished());
    }

    #[test]
    fn hidden_progress_bar_when_not_visible() {
        assert!(create_progress_bar(false).is_hidden());
    }

    #[tokio::test]
    async fn execute_writes_icon_set() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("logo.png");
        image::RgbaImage::from_pixel(64, 64, image::Rgba([0, 0, 0, 255]))
            .save_with_format(&input, image::ImageFormat::Png)
            .unwrap();

        let request = GenerateRequest {
            input,
            output: dir.path().join("out"),
        };
        execute(request, &Config::default()).await.unwrap();

        let set = dir.path().join("out/AppIcon.appiconset");
        assert!(set.join("Contents.json").is_file());
        assert!(set.join("1024.png").is_file());
    }

    #[tokio::test]
    async fn execute_fails_on_unsupported_source() {
        let dir = tempfile::tempdir().unwrap();
        let request = GenerateRequest {
            input: dir.path().join("logo.bmp"),
            output: dir.path().join("out"),
        };
        let err = execute(request, &Config::default()).await.unwrap_err();
        assert!(err.to_string().contains("Unsupported format"));
    }
}
