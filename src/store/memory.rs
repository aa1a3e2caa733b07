// file: src/store/memory.rs
// description: in-memory vector store with cosine similarity search
// reference: brute-force top-k retrieval over embedded chunks

use crate::error::{Result, RetrieverError};
use crate::models::Chunk;
use crate::retrieval::cosine_similarity;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ScoredChunk {
    pub chunk: Chunk,
    pub score: f32,
}

/// Holds embedded chunks for the lifetime of one pipeline run. Search is a
/// linear scan; corpora here are a single document's chunks, far below the
/// point where an index would pay off.
#[derive(Default)]
pub struct MemoryVectorStore {
    chunks: Vec<Chunk>,
    embeddings: Vec<Vec<f32>>,
}

impl MemoryVectorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, chunk: Chunk, embedding: Vec<f32>) -> Result<()> {
        if embedding.is_empty() {
            return Err(RetrieverError::Store(
                "embedding must not be empty".to_string(),
            ));
        }

        if let Some(first) = self.embeddings.first()
            && first.len() != embedding.len()
        {
            return Err(RetrieverError::Store(format!(
                "embedding dimension mismatch: store holds {}, got {}",
                first.len(),
                embedding.len()
            )));
        }

        self.chunks.push(chunk);
        self.embeddings.push(embedding);
        Ok(())
    }

    /// Top-k chunks by cosine similarity, descending; ties keep insertion
    /// order.
    pub fn search(&self, query_embedding: &[f32], k: usize) -> Vec<ScoredChunk> {
        let mut scored: Vec<ScoredChunk> = self
            .chunks
            .iter()
            .zip(self.embeddings.iter())
            .map(|(chunk, embedding)| ScoredChunk {
                chunk: chunk.clone(),
                score: cosine_similarity(query_embedding, embedding),
            })
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);

        debug!(results = scored.len(), "Vector store search complete");
        scored
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn dimension(&self) -> Option<usize> {
        self.embeddings.first().map(|e| e.len())
    }
}
