// file: src/models/ranked.rs
// description: ranked match model with similarity scores
// reference: used for cosine similarity search results

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatch {
    /// Index of the matched document in the original corpus
    pub index: usize,

    pub content: String,

    /// Cosine similarity to the query (0.0-1.0, higher is more similar)
    pub score: f32,
}

impl RankedMatch {
    pub fn new(index: usize, content: String, score: f32) -> Self {
        Self {
            index,
            content,
            score,
        }
    }

    /// Format as a one-line summary for display
    pub fn format_summary(&self, max_content_len: usize) -> String {
        let preview = if self.content.chars().count() > max_content_len {
            let truncated: String = self.content.chars().take(max_content_len).collect();
            format!("{}...", truncated)
        } else {
            self.content.clone()
        };

        format!("Score: {:.4} | [{}] {}", self.score, self.index, preview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_match_creation() {
        let m = RankedMatch::new(2, "Deep learning is a type of machine learning.".to_string(), 0.73);
        assert_eq!(m.index, 2);
        assert_eq!(m.score, 0.73);
    }

    #[test]
    fn test_format_summary_truncates() {
        let m = RankedMatch::new(0, "a very long matched document content".to_string(), 0.5);
        let summary = m.format_summary(10);
        assert!(summary.contains("0.5000"));
        assert!(summary.contains("..."));
    }

    #[test]
    fn test_format_summary_short_content() {
        let m = RankedMatch::new(0, "short".to_string(), 0.5);
        assert!(!m.format_summary(10).contains("..."));
    }
}
