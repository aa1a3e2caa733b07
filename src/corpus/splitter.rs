// file: src/corpus/splitter.rs
// description: character-window text splitter with overlap
// reference: fixed-size chunking for retrieval pipelines

use crate::config::SplitterConfig;
use crate::models::Chunk;
use tracing::debug;

/// Splits text into windows of at most `chunk_size` characters with
/// `chunk_overlap` characters carried over between consecutive chunks.
/// Window edges prefer whitespace so words are not cut mid-token unless a
/// single word exceeds half the window.
pub struct TextSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl TextSplitter {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        // overlap >= size would stall the window; config validation rejects
        // it, this guards direct construction
        let chunk_overlap = chunk_overlap.min(chunk_size.saturating_sub(1));
        Self {
            chunk_size: chunk_size.max(1),
            chunk_overlap,
        }
    }

    pub fn from_config(config: &SplitterConfig) -> Self {
        Self::new(config.chunk_size, config.chunk_overlap)
    }

    pub fn split(&self, text: &str) -> Vec<Chunk> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let chars: Vec<char> = text.chars().collect();
        // byte offset of every char plus the end of the text, so slices
        // always land on utf-8 boundaries
        let mut byte_offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        byte_offsets.push(text.len());

        let total = chars.len();
        let mut chunks = Vec::new();
        let mut start = 0usize;

        while start < total {
            let hard_end = (start + self.chunk_size).min(total);
            let end = if hard_end < total {
                self.backtrack_to_whitespace(&chars, start, hard_end)
            } else {
                hard_end
            };

            let slice = &text[byte_offsets[start]..byte_offsets[end]];
            if !slice.trim().is_empty() {
                chunks.push(Chunk::new(
                    chunks.len(),
                    byte_offsets[start],
                    byte_offsets[end],
                    slice.to_string(),
                ));
            }

            if end == total {
                break;
            }

            // Step the window forward, keeping the overlap; always make
            // progress even when overlap nearly spans the chunk
            start = end.saturating_sub(self.chunk_overlap).max(start + 1);
        }

        debug!(
            chunks = chunks.len(),
            chars = total,
            "Split text into chunks"
        );
        chunks
    }

    /// Walk back from the hard window edge to the nearest whitespace, but
    /// never past the midpoint of the window.
    fn backtrack_to_whitespace(&self, chars: &[char], start: usize, hard_end: usize) -> usize {
        let floor = start + self.chunk_size / 2;

        let mut pos = hard_end;
        while pos > floor.max(start + 1) {
            if chars[pos - 1].is_whitespace() {
                return pos;
            }
            pos -= 1;
        }

        hard_end
    }
}
