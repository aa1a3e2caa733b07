// file: src/llm/mod.rs
// description: hosted model client module exports
// reference: internal module structure

pub mod chat;
pub mod embeddings;
pub mod prompt;

pub use chat::GroqChatClient;
pub use embeddings::GroqEmbeddingClient;
pub use prompt::build_qa_prompt;
