// file: src/models/answer.rs
// description: question answering result with retrieved source chunks
// reference: internal data structures

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerSource {
    /// Chunk position within the source document
    pub chunk_index: usize,

    /// Retrieval similarity for this chunk
    pub score: f32,

    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaAnswer {
    pub question: String,

    /// Generated answer, or None when no chat model was available and only
    /// retrieved context is returned
    pub answer: Option<String>,

    pub sources: Vec<AnswerSource>,

    pub document_source: String,

    pub model: Option<String>,
}

impl QaAnswer {
    pub fn generated(
        question: String,
        answer: String,
        sources: Vec<AnswerSource>,
        document_source: String,
        model: String,
    ) -> Self {
        Self {
            question,
            answer: Some(answer),
            sources,
            document_source,
            model: Some(model),
        }
    }

    /// Retrieval-only result, produced when no API key is configured.
    pub fn extractive(
        question: String,
        sources: Vec<AnswerSource>,
        document_source: String,
    ) -> Self {
        Self {
            question,
            answer: None,
            sources,
            document_source,
            model: None,
        }
    }

    pub fn is_extractive(&self) -> bool {
        self.answer.is_none()
    }
}
