// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod corpus;
pub mod error;
pub mod llm;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod retrieval;
pub mod store;
pub mod utils;

pub use config::{Config, CorpusConfig, LlmConfig, RetrievalConfig, SplitterConfig};
pub use corpus::{DocumentLoader, PdfLoader, TextSplitter};
pub use error::{Result, RetrieverError};
pub use llm::{GroqChatClient, GroqEmbeddingClient, build_qa_prompt};
pub use models::{AnswerSource, Chunk, Document, QaAnswer, RankedMatch};
pub use output::OutputFormat;
pub use pipeline::{PipelineStats, ProgressTracker, QaPipeline};
pub use retrieval::{TfIdfRetriever, TfIdfVectorizer, cosine_similarity};
pub use store::{MemoryVectorStore, ScoredChunk};
pub use utils::OperationTimer;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _config = Config::default_config();
        let _retriever = TfIdfRetriever::default();
    }
}
