// file: src/retrieval/retriever.rs
// description: TF-IDF corpus ranking against a query
// reference: cosine similarity document retrieval

use crate::error::{Result, RetrieverError};
use crate::models::RankedMatch;
use crate::retrieval::similarity::{argmax_first, cosine_similarity};
use crate::retrieval::tfidf::TfIdfVectorizer;
use tracing::debug;

/// Ranks a corpus of documents against a query by TF-IDF cosine similarity.
///
/// The vectorizer is fitted over the query and the corpus together, so query
/// terms absent from the corpus still participate in the vocabulary (they
/// lower the query's cosine against every document uniformly and preserve
/// relative order).
pub struct TfIdfRetriever {
    min_score: f32,
}

impl TfIdfRetriever {
    pub fn new(min_score: f32) -> Self {
        Self { min_score }
    }

    /// Score every document against the query. Results are sorted by score
    /// descending; equal scores keep corpus order.
    pub fn rank(&self, query: &str, documents: &[String]) -> Result<Vec<RankedMatch>> {
        let scores = self.score_all(query, documents)?;

        let mut matches: Vec<RankedMatch> = documents
            .iter()
            .zip(scores.iter().copied())
            .enumerate()
            .filter(|(_, (_, score))| *score >= self.min_score)
            .map(|(index, (content, score))| RankedMatch::new(index, content.clone(), score))
            .collect();

        // Stable sort keeps first-occurrence order for tied scores
        matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

        Ok(matches)
    }

    /// The single most relevant document: argmax of the cosine scores, ties
    /// broken by first occurrence. When no document shares vocabulary with
    /// the query all scores are zero and the first document wins.
    pub fn best_match(&self, query: &str, documents: &[String]) -> Result<RankedMatch> {
        let scores = self.score_all(query, documents)?;

        let index = argmax_first(&scores).ok_or_else(|| {
            RetrieverError::Corpus("cannot select a match from an empty corpus".to_string())
        })?;

        Ok(RankedMatch::new(
            index,
            documents[index].clone(),
            scores[index],
        ))
    }

    fn score_all(&self, query: &str, documents: &[String]) -> Result<Vec<f32>> {
        if documents.is_empty() {
            return Err(RetrieverError::Corpus(
                "documents list must be non-empty".to_string(),
            ));
        }

        let mut texts: Vec<&str> = Vec::with_capacity(documents.len() + 1);
        texts.push(query);
        texts.extend(documents.iter().map(|d| d.as_str()));

        let (vectorizer, vectors) = TfIdfVectorizer::fit_transform(&texts)?;
        debug!(
            vocabulary = vectorizer.vocabulary_size(),
            documents = documents.len(),
            "Fitted TF-IDF vectorizer"
        );

        let query_vector = &vectors[0];
        let scores = vectors[1..]
            .iter()
            .map(|doc_vector| cosine_similarity(query_vector, doc_vector))
            .collect();

        Ok(scores)
    }
}

impl Default for TfIdfRetriever {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(docs: &[&str]) -> Vec<String> {
        docs.iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn test_empty_corpus_is_an_error() {
        let retriever = TfIdfRetriever::default();
        assert!(retriever.best_match("query", &[]).is_err());
        assert!(retriever.rank("query", &[]).is_err());
    }

    #[test]
    fn test_exact_match_scores_highest() {
        let docs = corpus(&[
            "the weather in paris",
            "machine learning fundamentals",
            "cooking with cast iron",
        ]);
        let retriever = TfIdfRetriever::default();
        let best = retriever
            .best_match("machine learning fundamentals", &docs)
            .unwrap();
        assert_eq!(best.index, 1);
        assert!(best.score > 0.99);
    }

    #[test]
    fn test_tied_scores_select_first_occurrence() {
        // Documents 0 and 2 have identical structure relative to the query:
        // one shared term plus one term unique to that document.
        let docs = corpus(&["apple banana", "cherry date", "banana split"]);
        let retriever = TfIdfRetriever::default();

        let best = retriever.best_match("banana", &docs).unwrap();
        assert_eq!(best.index, 0);

        let ranked = retriever.rank("banana", &docs).unwrap();
        assert_eq!(ranked[0].index, 0);
        assert_eq!(ranked[1].index, 2);
        assert_eq!(ranked[0].score, ranked[1].score);
    }

    #[test]
    fn test_no_overlap_returns_first_document_with_zero_score() {
        let docs = corpus(&["alpha beta", "gamma delta"]);
        let retriever = TfIdfRetriever::default();
        let best = retriever.best_match("unrelated words", &docs).unwrap();
        assert_eq!(best.index, 0);
        assert_eq!(best.score, 0.0);
    }

    #[test]
    fn test_rank_is_sorted_descending() {
        let docs = corpus(&[
            "Machine learning is a subset of artificial intelligence.",
            "Deep learning is a type of machine learning.",
            "Natural language processing is used in AI applications.",
        ]);
        let retriever = TfIdfRetriever::default();
        let ranked = retriever.rank("Tell me about machine learning.", &docs).unwrap();

        assert_eq!(ranked.len(), 3);
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        // Both machine-learning documents must outrank the NLP document,
        // which shares no query vocabulary.
        assert!(ranked[0].content.to_lowercase().contains("machine learning"));
        assert_eq!(ranked[2].index, 2);
        assert_eq!(ranked[2].score, 0.0);
    }

    #[test]
    fn test_min_score_filters_rank_results() {
        let docs = corpus(&["machine learning", "unrelated cooking recipe"]);
        let retriever = TfIdfRetriever::new(0.01);
        let ranked = retriever.rank("machine learning", &docs).unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].index, 0);
    }

    #[test]
    fn test_deterministic_ranking() {
        let docs = corpus(&[
            "I don't know",
            "Machine learning is a subset of artificial intelligence.",
            "Deep learning is a type of machine learning.",
            "Deep learning is used in most modern AI applications.",
            "Artificial intelligence is the science of programming smart machines.",
            "Natural language processing is used in AI applications.",
        ]);
        let retriever = TfIdfRetriever::default();
        let first = retriever.rank("What is deep learning?", &docs).unwrap();
        let second = retriever.rank("What is deep learning?", &docs).unwrap();

        let order = |ranked: &[RankedMatch]| ranked.iter().map(|m| m.index).collect::<Vec<_>>();
        assert_eq!(order(&first), order(&second));
        // The doubled "deep learning" sentence is the clear winner.
        assert_eq!(first[0].index, 2);
    }
}
