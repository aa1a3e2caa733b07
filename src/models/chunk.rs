// file: src/models/chunk.rs
// description: text chunk model produced by the splitter
// reference: internal data structures

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chunk {
    /// Position of the chunk within its document
    pub index: usize,

    /// Byte offset where the chunk starts in the original text
    pub start: usize,

    /// Byte offset where the chunk ends in the original text
    pub end: usize,

    pub text: String,
}

impl Chunk {
    pub fn new(index: usize, start: usize, end: usize, text: String) -> Self {
        Self {
            index,
            start,
            end,
            text,
        }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
