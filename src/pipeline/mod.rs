// file: src/pipeline/mod.rs
// description: question answering pipeline module exports
// reference: internal module structure

pub mod progress;
pub mod qa;

pub use progress::{PipelineStats, ProgressTracker};
pub use qa::QaPipeline;
