// file: src/retrieval/mod.rs
// description: lexical retrieval module exports
// reference: internal module structure

pub mod retriever;
pub mod similarity;
pub mod tfidf;

pub use retriever::TfIdfRetriever;
pub use similarity::{argmax_first, cosine_similarity};
pub use tfidf::TfIdfVectorizer;
