//! Core data types passed between pipeline stages and returned to callers.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// One icon scheduled for generation: a unique file name and its square edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconTarget {
    /// Output file name, unique within a plan
    pub filename: String,

    /// Width and height of the generated icon, in pixels
    pub pixels: u32,
}

/// Why a manifest entry did not produce an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The entry has no file name
    EmptyFilename,
    /// An earlier entry already scheduled the same file name
    Duplicate,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::EmptyFilename => write!(f, "no filename"),
            SkipReason::Duplicate => write!(f, "already scheduled"),
        }
    }
}

/// A manifest entry that was skipped during planning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedSpec {
    /// Position of the entry in the manifest's `images` list
    pub index: usize,
    pub filename: String,
    /// Unrounded `size * scale` of the skipped entry
    pub scaled_size: f64,
    pub reason: SkipReason,
}

/// An icon written to disk by a resize worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedIcon {
    pub filename: String,
    pub path: PathBuf,
    pub pixels: u32,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    /// The icon set directory that was (re)created
    pub output_dir: PathBuf,

    /// Generated icons, in completion order
    pub generated: Vec<GeneratedIcon>,

    /// Entries that produced no icon
    pub skipped: Vec<SkippedSpec>,

    /// Wall-clock time for the whole run
    #[serde(with = "duration_ms")]
    pub elapsed: Duration,
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        (value.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_millis(u64::deserialize(deserializer)?))
    }
}
