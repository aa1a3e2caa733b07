// file: src/models/document.rs
// description: core document model with content hashing
// reference: internal data structures

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub source: String,
    pub content: String,
    pub content_hash: String,
    pub size: u64,
    pub loaded_at: u64,
}

impl Document {
    pub fn new(source: String, content: String) -> Self {
        let content_hash = Self::compute_hash(&content);
        let size = content.len() as u64;
        let loaded_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        Self {
            source,
            content,
            content_hash,
            size,
            loaded_at,
        }
    }

    /// A document built from an in-memory string rather than a file.
    pub fn inline(content: &str) -> Self {
        Self::new("<inline>".to_string(), content.to_string())
    }

    fn compute_hash(content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}
