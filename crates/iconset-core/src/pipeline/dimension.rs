//! Size/scale parsing: turns manifest strings like `"83.5x83.5"` and `"2x"`
//! into a square pixel edge.
//!
//! Only the leading number of each field is used. Icons are always square, so
//! a size whose second number differs from the first is rejected rather than
//! silently squared.

use crate::config::LimitsConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::manifest::IconSpec;

/// Resolves manifest entries to pixel dimensions.
#[derive(Debug, Clone)]
pub struct DimensionResolver {
    max_dimension: u32,
}

impl DimensionResolver {
    /// Create a resolver bounded by the configured dimension limit.
    pub fn new(limits: &LimitsConfig) -> Self {
        Self {
            max_dimension: limits.max_image_dimension,
        }
    }

    /// Unrounded `size * scale` for an entry.
    pub fn scaled_size(spec: &IconSpec) -> PipelineResult<f64> {
        let size = leading_number(&spec.size)
            .ok_or_else(|| malformed(spec, "size", &spec.size, "no leading number"))?;
        let scale = leading_number(&spec.scale)
            .ok_or_else(|| malformed(spec, "scale", &spec.scale, "no leading number"))?;

        if let Some(height) = second_number(&spec.size) {
            if height != size {
                return Err(malformed(
                    spec,
                    "size",
                    &spec.size,
                    &format!("non-square size ({size} != {height}); icons are square"),
                ));
            }
        }

        Ok(size * scale)
    }

    /// Square pixel edge for an entry: `round(size * scale)`.
    pub fn resolve(&self, spec: &IconSpec) -> PipelineResult<u32> {
        let scaled = Self::scaled_size(spec)?;
        let rounded = scaled.round();

        if !rounded.is_finite() || rounded < 1.0 {
            return Err(malformed(
                spec,
                "size",
                &spec.size,
                &format!("resolves to {scaled} pixels at scale {:?}", spec.scale),
            ));
        }
        if rounded > f64::from(self.max_dimension) {
            return Err(PipelineError::TargetTooLarge {
                filename: spec.filename.clone(),
                pixels: rounded as u64,
                max_dim: self.max_dimension,
            });
        }

        Ok(rounded as u32)
    }
}

/// First non-empty token before/between `x` separators, parsed as a float.
///
/// `"83.5x83.5"` → 83.5, `"2x"` → 2.0, `"x3"` → 3.0, `"abc"` → `None`.
pub fn leading_number(value: &str) -> Option<f64> {
    value
        .split('x')
        .find(|token| !token.is_empty())
        .and_then(|token| token.parse::<f64>().ok())
}

/// The second numeric token of a size string, if present and parseable.
fn second_number(value: &str) -> Option<f64> {
    value
        .split('x')
        .filter(|token| !token.is_empty())
        .nth(1)
        .and_then(|token| token.parse::<f64>().ok())
}

fn malformed(spec: &IconSpec, field: &'static str, value: &str, reason: &str) -> PipelineError {
    PipelineError::MalformedDimension {
        filename: spec.filename.clone(),
        field,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
