//! Iconset Core - turns one source image into an app icon set.
//!
//! A manifest (Xcode's `Contents.json`) lists every icon file an app needs
//! together with its logical size and scale. This crate reads that manifest,
//! works out the pixel size of each unique file, decodes the source image once
//! and renders every icon concurrently into `AppIcon.appiconset`.
//!
//! # Architecture
//!
//! ```text
//! Manifest → Plan (size × scale, dedup) → Decode → Resize workers → Report
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use iconset_core::{Config, IconsetGenerator, ManifestDocument};
//!
//! #[tokio::main]
//! async fn main() -> iconset_core::Result<()> {
//!     let config = Config::load()?;
//!     let manifest = ManifestDocument::load(&config.manifest_source())?;
//!     let generator = IconsetGenerator::new(&config);
//!
//!     let report = generator
//!         .generate("./logo.png".as_ref(), "./Assets.xcassets".as_ref(), &manifest)
//!         .await?;
//!     println!("{} icons in {:?}", report.generated.len(), report.elapsed);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod manifest;
pub mod output;
pub mod pipeline;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{ConfigError, IconsetError, ManifestError, PipelineError, PipelineResult, Result};
pub use manifest::{IconSpec, Manifest, ManifestDocument, ManifestSource};
pub use output::IconsetDirectory;
pub use pipeline::{IconPlan, IconsetGenerator};
pub use types::{GeneratedIcon, GenerationReport, IconTarget, SkipReason, SkippedSpec};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
