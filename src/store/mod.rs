// file: src/store/mod.rs
// description: vector store module exports
// reference: internal module structure

pub mod memory;

pub use memory::{MemoryVectorStore, ScoredChunk};
