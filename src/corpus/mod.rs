// file: src/corpus/mod.rs
// description: document loading and chunking module exports
// reference: internal module structure

pub mod loader;
pub mod pdf;
pub mod splitter;

pub use loader::DocumentLoader;
pub use pdf::PdfLoader;
pub use splitter::TextSplitter;
