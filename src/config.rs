// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{Result, RetrieverError};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub corpus: CorpusConfig,
    pub splitter: SplitterConfig,
    pub retrieval: RetrievalConfig,
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    /// Built-in knowledge base used when no corpus file is given
    pub documents: Vec<String>,
    pub max_file_size_mb: usize,
    #[serde(default)]
    pub skip_patterns: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SplitterConfig {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RetrievalConfig {
    pub top_k: usize,
    pub min_score: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub chat_model: String,
    pub embedding_model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("RAG_RETRIEVER")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| RetrieverError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| RetrieverError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            corpus: CorpusConfig {
                documents: vec![
                    "I don't know".to_string(),
                    "Machine learning is a subset of artificial intelligence.".to_string(),
                    "Deep learning is a type of machine learning.".to_string(),
                    "Deep learning is used in most modern AI applications.".to_string(),
                    "Artificial intelligence is the science of programming smart machines."
                        .to_string(),
                    "Natural language processing is used in AI applications.".to_string(),
                ],
                max_file_size_mb: 10,
                skip_patterns: vec![
                    ".git/*".to_string(),
                    "*.zip".to_string(),
                    "*.png".to_string(),
                    "*.jpg".to_string(),
                ],
            },
            splitter: SplitterConfig {
                chunk_size: 1000,
                chunk_overlap: 20,
            },
            retrieval: RetrievalConfig {
                top_k: 2,
                min_score: 0.0,
            },
            llm: LlmConfig {
                api_key: None,
                chat_model: "llama-3.3-70b-versatile".to_string(),
                embedding_model: "nomic-embed-text-v1.5".to_string(),
                max_tokens: 256,
                temperature: 0.0,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.corpus.documents.is_empty() {
            return Err(RetrieverError::Config(
                "corpus.documents must not be empty".to_string(),
            ));
        }

        if self.splitter.chunk_size == 0 {
            return Err(RetrieverError::Config(
                "splitter.chunk_size must be greater than 0".to_string(),
            ));
        }

        if self.splitter.chunk_overlap >= self.splitter.chunk_size {
            return Err(RetrieverError::Config(
                "splitter.chunk_overlap must be smaller than chunk_size".to_string(),
            ));
        }

        if self.retrieval.top_k == 0 {
            return Err(RetrieverError::Config(
                "retrieval.top_k must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
