//! Icon generation pipeline components.
//!
//! - **dimension**: Parse size/scale strings into square pixel edges
//! - **plan**: Deduplicate manifest entries into unique icon targets
//! - **decode**: Decode the source image once into shared RGBA pixels
//! - **resize**: Nearest-neighbor scaling and PNG encoding per icon
//! - **generator**: Orchestrates the full run with concurrent workers

pub mod decode;
pub mod dimension;
pub mod generator;
pub mod plan;
pub mod resize;

// Re-exports for convenient access
pub use decode::{DecodedImage, ImageDecoder};
pub use dimension::DimensionResolver;
pub use generator::IconsetGenerator;
pub use plan::IconPlan;
pub use resize::ResizeWorker;
