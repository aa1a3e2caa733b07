// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod answer;
pub mod chunk;
pub mod document;
pub mod ranked;

pub use answer::{AnswerSource, QaAnswer};
pub use chunk::Chunk;
pub use document::Document;
pub use ranked::RankedMatch;
