// file: src/pipeline/qa.rs
// description: document QA orchestration - load, chunk, embed, retrieve, answer
// reference: retrieval-augmented generation over a single document

use crate::config::Config;
use crate::corpus::{DocumentLoader, TextSplitter};
use crate::error::{Result, RetrieverError};
use crate::llm::{GroqChatClient, GroqEmbeddingClient, build_qa_prompt};
use crate::models::{AnswerSource, Chunk, QaAnswer};
use crate::pipeline::progress::{PipelineStats, ProgressTracker};
use crate::store::MemoryVectorStore;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

/// Chunks per embedding request when the hosted API is in use
const EMBEDDING_BATCH_SIZE: usize = 64;

pub struct QaPipeline {
    config: Config,
    loader: DocumentLoader,
    splitter: TextSplitter,
    colored: bool,
}

impl QaPipeline {
    pub fn new(config: Config, colored: bool) -> Self {
        let loader = DocumentLoader::new(config.corpus.clone());
        let splitter = TextSplitter::from_config(&config.splitter);
        Self {
            config,
            loader,
            splitter,
            colored,
        }
    }

    /// Answer a question about one document. When no API key is configured
    /// the pipeline still runs with local fallback embeddings and returns
    /// the retrieved chunks instead of a generated answer.
    pub async fn run(
        &self,
        path: &Path,
        question: &str,
        top_k: Option<usize>,
    ) -> Result<(QaAnswer, PipelineStats)> {
        let start = Instant::now();
        let mut stats = PipelineStats::new();

        if question.trim().is_empty() {
            return Err(RetrieverError::Validation(
                "question must not be empty".to_string(),
            ));
        }

        let document = self.loader.load_document(path)?;
        let chunks = self.splitter.split(&document.content);
        if chunks.is_empty() {
            return Err(RetrieverError::Corpus(format!(
                "document produced no chunks: {}",
                path.display()
            )));
        }
        stats.chunks_total = chunks.len();
        info!("Split document into {} chunks", chunks.len());

        let embedding_client = self.config.llm.api_key.as_ref().map(|key| {
            GroqEmbeddingClient::new(key.clone(), self.config.llm.embedding_model.clone())
        });

        let (store, used_fallback) = self.embed_chunks(chunks, embedding_client.as_ref()).await?;
        stats.chunks_embedded = store.len();
        stats.used_fallback_embeddings = used_fallback;

        // the question must live in the same vector space as the chunks
        let query_embedding = match (&embedding_client, used_fallback) {
            (Some(client), false) => client.embed(question).await?,
            _ => GroqEmbeddingClient::fallback_embedding(question),
        };

        let k = top_k.unwrap_or(self.config.retrieval.top_k);
        let retrieved = store.search(&query_embedding, k);
        stats.chunks_retrieved = retrieved.len();
        info!("Retrieved {} chunks for the question", retrieved.len());

        let sources: Vec<AnswerSource> = retrieved
            .iter()
            .map(|scored| AnswerSource {
                chunk_index: scored.chunk.index,
                score: scored.score,
                text: scored.chunk.text.clone(),
            })
            .collect();

        let answer = match &self.config.llm.api_key {
            Some(key) => {
                let chat = GroqChatClient::new(
                    key.clone(),
                    self.config.llm.chat_model.clone(),
                    self.config.llm.max_tokens,
                    self.config.llm.temperature,
                );
                let prompt = build_qa_prompt(question, &retrieved);
                let completion = chat.complete(&prompt).await?;
                stats.answer_generated = true;

                QaAnswer::generated(
                    question.to_string(),
                    completion.trim().to_string(),
                    sources,
                    document.source,
                    self.config.llm.chat_model.clone(),
                )
            }
            None => {
                warn!("No API key configured; returning retrieved context without generation");
                QaAnswer::extractive(question.to_string(), sources, document.source)
            }
        };

        stats.duration_secs = start.elapsed().as_secs_f64();
        Ok((answer, stats))
    }

    /// Embed every chunk into a fresh in-memory store. Falls back to local
    /// embeddings for the whole document when the API fails part-way, so
    /// the store never mixes vector spaces.
    async fn embed_chunks(
        &self,
        chunks: Vec<Chunk>,
        client: Option<&GroqEmbeddingClient>,
    ) -> Result<(MemoryVectorStore, bool)> {
        match client {
            Some(client) => match self.embed_via_api(&chunks, client).await {
                Ok(store) => Ok((store, false)),
                Err(e) => {
                    warn!("API embedding failed ({}); using local fallback", e);
                    Ok((self.embed_via_fallback(&chunks)?, true))
                }
            },
            None => Ok((self.embed_via_fallback(&chunks)?, true)),
        }
    }

    async fn embed_via_api(
        &self,
        chunks: &[Chunk],
        client: &GroqEmbeddingClient,
    ) -> Result<MemoryVectorStore> {
        let tracker = ProgressTracker::new(chunks.len(), self.colored);
        tracker.set_message("embedding chunks");

        let mut store = MemoryVectorStore::new();
        for batch in chunks.chunks(EMBEDDING_BATCH_SIZE) {
            let texts: Vec<String> = batch.iter().map(|c| c.text.clone()).collect();
            let embeddings = client.embed_batch(&texts).await?;

            for (chunk, embedding) in batch.iter().zip(embeddings) {
                store.add(chunk.clone(), embedding)?;
            }
            tracker.inc_embedded(batch.len());
        }

        tracker.finish();
        info!(
            "Embedded {} chunks in {:.2}s",
            store.len(),
            tracker.elapsed_secs()
        );
        Ok(store)
    }

    fn embed_via_fallback(&self, chunks: &[Chunk]) -> Result<MemoryVectorStore> {
        let mut store = MemoryVectorStore::new();
        for chunk in chunks {
            let embedding = GroqEmbeddingClient::fallback_embedding(&chunk.text);
            store.add(chunk.clone(), embedding)?;
        }
        Ok(store)
    }
}
