//! Planning: resolve every manifest entry and keep the first entry per file name.

use std::collections::HashSet;

use crate::config::is_plain_file_name;
use crate::error::{PipelineError, PipelineResult};
use crate::manifest::Manifest;
use crate::types::{IconTarget, SkipReason, SkippedSpec};

use super::dimension::DimensionResolver;

/// The icons a run will produce, plus the entries it will not.
#[derive(Debug, Clone, Default)]
pub struct IconPlan {
    /// Unique targets, in manifest order
    pub targets: Vec<IconTarget>,
    /// Entries skipped for an empty or repeated file name
    pub skipped: Vec<SkippedSpec>,
}

impl IconPlan {
    /// Build the plan for a manifest.
    ///
    /// Every entry's dimensions are resolved, so one malformed entry fails the
    /// whole plan even if it would have been skipped. Non-empty file names must
    /// be a single path component and must not collide with `manifest_filename`.
    pub fn build(
        manifest: &Manifest,
        resolver: &DimensionResolver,
        manifest_filename: &str,
    ) -> PipelineResult<Self> {
        let mut scheduled: HashSet<&str> = HashSet::new();
        let mut plan = IconPlan::default();

        for (index, spec) in manifest.images.iter().enumerate() {
            let scaled_size = DimensionResolver::scaled_size(spec)?;
            check_filename(index, &spec.filename, manifest_filename)?;

            let reason = if spec.filename.is_empty() {
                Some(SkipReason::EmptyFilename)
            } else if scheduled.contains(spec.filename.as_str()) {
                Some(SkipReason::Duplicate)
            } else {
                None
            };

            if let Some(reason) = reason {
                tracing::debug!(
                    "Skipping entry {index} ({:?}, {scaled_size}px): {reason}",
                    spec.filename
                );
                plan.skipped.push(SkippedSpec {
                    index,
                    filename: spec.filename.clone(),
                    scaled_size,
                    reason,
                });
                continue;
            }

            let pixels = resolver.resolve(spec)?;
            scheduled.insert(spec.filename.as_str());
            plan.targets.push(IconTarget {
                filename: spec.filename.clone(),
                pixels,
            });
        }

        tracing::debug!(
            "Planned {} icon(s), skipped {} manifest entries",
            plan.targets.len(),
            plan.skipped.len()
        );
        Ok(plan)
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Empty names are left to the skip logic.
fn check_filename(index: usize, filename: &str, manifest_filename: &str) -> PipelineResult<()> {
    let reason = if !filename.is_empty() && !is_plain_file_name(filename) {
        "must be a single path component"
    } else if filename.eq_ignore_ascii_case(manifest_filename) {
        "collides with the manifest copy"
    } else {
        return Ok(());
    };
    Err(PipelineError::InvalidFilename {
        index,
        filename: filename.to_string(),
        reason,
    })
}
