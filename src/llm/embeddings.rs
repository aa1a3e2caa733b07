// file: src/llm/embeddings.rs
// description: Groq API integration for text embeddings with local fallback
// reference: https://console.groq.com/docs/embeddings

use crate::error::{Result, RetrieverError};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

const EMBEDDINGS_URL: &str = "https://api.groq.com/openai/v1/embeddings";

/// Dimension of the deterministic fallback embedding
pub const FALLBACK_DIM: usize = 256;

#[derive(Debug, Serialize)]
struct EmbeddingRequest {
    input: Vec<String>,
    model: String,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

pub struct GroqEmbeddingClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GroqEmbeddingClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
        }
    }

    pub async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings.pop().ok_or_else(|| {
            RetrieverError::Embedding("no embedding data returned from Groq API".to_string())
        })
    }

    /// Embed a batch of texts in one request. The response preserves input
    /// order.
    pub async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let request = EmbeddingRequest {
            input: texts.to_vec(),
            model: self.model.clone(),
        };

        debug!("Requesting {} embeddings from Groq API", texts.len());

        let response = self
            .client
            .post(EMBEDDINGS_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                RetrieverError::Embedding(format!("failed to send Groq API request: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(RetrieverError::Embedding(format!(
                "Groq API request failed with status {}: {}",
                status, error_text
            )));
        }

        let parsed: EmbeddingResponse = response.json().await.map_err(|e| {
            RetrieverError::Embedding(format!("failed to parse Groq API response: {}", e))
        })?;

        if parsed.data.len() != texts.len() {
            return Err(RetrieverError::Embedding(format!(
                "Groq API returned {} embeddings for {} inputs",
                parsed.data.len(),
                texts.len()
            )));
        }

        Ok(parsed.data.into_iter().map(|d| d.embedding).collect())
    }

    /// Deterministic local embedding used when no API key is configured.
    ///
    /// Hashes word tokens into a fixed number of buckets and L2-normalizes,
    /// so identical texts map to identical vectors and texts with shared
    /// vocabulary land near each other. A stand-in, not a semantic model.
    pub fn fallback_embedding(text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; FALLBACK_DIM];

        for token in crate::retrieval::tfidf::tokenize(text) {
            let mut hasher = Sha256::new();
            hasher.update(token.as_bytes());
            let digest = hasher.finalize();
            let bucket = u64::from_le_bytes(digest[..8].try_into().expect("8-byte prefix"))
                as usize
                % FALLBACK_DIM;
            vector[bucket] += 1.0;
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        } else {
            warn!("Fallback embedding for token-free text is all zeros");
        }

        vector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retrieval::cosine_similarity;

    #[test]
    fn test_fallback_embedding_shape() {
        let embedding = GroqEmbeddingClient::fallback_embedding("some test text");
        assert_eq!(embedding.len(), FALLBACK_DIM);
        let norm: f32 = embedding.iter().map(|v| v * v).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_fallback_embedding_deterministic() {
        let a = GroqEmbeddingClient::fallback_embedding("same text");
        let b = GroqEmbeddingClient::fallback_embedding("same text");
        assert_eq!(a, b);
    }

    #[test]
    fn test_fallback_embedding_reflects_shared_vocabulary() {
        let query = GroqEmbeddingClient::fallback_embedding("what is deep learning");
        let related = GroqEmbeddingClient::fallback_embedding("deep learning is a type of machine learning");
        let unrelated = GroqEmbeddingClient::fallback_embedding("cast iron skillet maintenance");

        assert!(cosine_similarity(&query, &related) > cosine_similarity(&query, &unrelated));
    }

    #[test]
    fn test_fallback_embedding_empty_text_is_zero() {
        let embedding = GroqEmbeddingClient::fallback_embedding("!!");
        assert!(embedding.iter().all(|&v| v == 0.0));
    }
}
