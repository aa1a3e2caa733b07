// file: src/retrieval/tfidf.rs
// description: TF-IDF vectorizer with smoothed idf and l2-normalized rows
// reference: term-frequency / inverse-document-frequency weighting

use crate::error::{Result, RetrieverError};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};

lazy_static! {
    /// Tokens are runs of two or more word characters; single-character
    /// tokens and punctuation are dropped.
    static ref TOKEN_PATTERN: Regex = Regex::new(r"\b\w\w+\b").expect("valid token pattern");
}

/// Lowercase a text and split it into vocabulary tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// TF-IDF weighting fitted over a corpus.
///
/// idf(t) = ln((1 + n) / (1 + df(t))) + 1, tf is the raw term count, and
/// each output vector is L2-normalized. Vectors for texts that share no
/// vocabulary with the corpus come out as all zeros.
pub struct TfIdfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl TfIdfVectorizer {
    /// Build the vocabulary and idf table from a corpus.
    pub fn fit<S: AsRef<str>>(texts: &[S]) -> Result<Self> {
        if texts.is_empty() {
            return Err(RetrieverError::Corpus(
                "cannot fit vectorizer on an empty corpus".to_string(),
            ));
        }

        // BTreeMap keeps terms sorted so column order is deterministic
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();

        for text in texts {
            let mut seen: Vec<String> = tokenize(text.as_ref());
            seen.sort();
            seen.dedup();
            for term in seen {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(RetrieverError::Corpus(
                "corpus contains no vocabulary tokens".to_string(),
            ));
        }

        let n = texts.len() as f32;
        let mut vocabulary = HashMap::with_capacity(document_frequency.len());
        let mut idf = Vec::with_capacity(document_frequency.len());

        for (column, (term, df)) in document_frequency.into_iter().enumerate() {
            vocabulary.insert(term, column);
            idf.push(((1.0 + n) / (1.0 + df as f32)).ln() + 1.0);
        }

        Ok(Self { vocabulary, idf })
    }

    /// Fit on a corpus and return the vectorizer together with one vector
    /// per input text.
    pub fn fit_transform<S: AsRef<str>>(texts: &[S]) -> Result<(Self, Vec<Vec<f32>>)> {
        let vectorizer = Self::fit(texts)?;
        let vectors = texts
            .iter()
            .map(|t| vectorizer.transform(t.as_ref()))
            .collect();
        Ok((vectorizer, vectors))
    }

    /// Produce the L2-normalized TF-IDF vector for a single text. Terms
    /// outside the fitted vocabulary are ignored.
    pub fn transform(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.idf.len()];

        for token in tokenize(text) {
            if let Some(&column) = self.vocabulary.get(&token) {
                vector[column] += self.idf[column];
            }
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }

        vector
    }

    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }
}
