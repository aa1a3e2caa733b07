// file: tests/ranking.rs
// description: end-to-end ranking behavior over the built-in knowledge base

use pretty_assertions::assert_eq;
use rag_retriever::{Config, DocumentLoader, TfIdfRetriever};

fn knowledge_base() -> Vec<String> {
    Config::default_config().corpus.documents
}

#[test]
fn best_match_for_deep_learning_query() {
    let documents = knowledge_base();
    let retriever = TfIdfRetriever::default();

    let best = retriever
        .best_match("What is deep learning?", &documents)
        .unwrap();

    assert_eq!(best.content, "Deep learning is a type of machine learning.");
    assert!(best.score > 0.0);
}

#[test]
fn machine_learning_query_ranks_ml_documents_first() {
    let documents = vec![
        "Machine learning is a subset of artificial intelligence.".to_string(),
        "Deep learning is a type of machine learning.".to_string(),
        "Natural language processing is used in AI applications.".to_string(),
    ];
    let retriever = TfIdfRetriever::default();

    let ranked = retriever
        .rank("Tell me about machine learning.", &documents)
        .unwrap();

    // both machine-learning sentences beat the NLP sentence, which shares
    // no vocabulary with the query and scores zero
    assert!(ranked[0].content.to_lowercase().contains("machine learning"));
    assert!(ranked[1].content.to_lowercase().contains("machine learning"));
    assert_eq!(ranked[2].index, 2);
    assert_eq!(ranked[2].score, 0.0);
    assert!(ranked[0].score >= ranked[1].score);
}

#[test]
fn ranking_is_stable_across_runs() {
    let documents = knowledge_base();
    let retriever = TfIdfRetriever::default();

    let first: Vec<usize> = retriever
        .rank("artificial intelligence applications", &documents)
        .unwrap()
        .iter()
        .map(|m| m.index)
        .collect();

    let second: Vec<usize> = retriever
        .rank("artificial intelligence applications", &documents)
        .unwrap()
        .iter()
        .map(|m| m.index)
        .collect();

    assert_eq!(first, second);
}

#[test]
fn corpus_file_feeds_the_retriever() {
    let temp = tempfile::TempDir::new().unwrap();
    let corpus_file = temp.path().join("corpus.txt");
    std::fs::write(
        &corpus_file,
        "The cat sat on the mat.\nRust has a strong type system.\nBread needs time to rise.\n",
    )
    .unwrap();

    let config = Config::default_config();
    let loader = DocumentLoader::new(config.corpus);
    let documents = loader.load_corpus(&corpus_file).unwrap();

    let retriever = TfIdfRetriever::default();
    let best = retriever
        .best_match("What makes Rust's type system strong?", &documents)
        .unwrap();

    assert_eq!(best.content, "Rust has a strong type system.");
}
