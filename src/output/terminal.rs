// file: src/output/terminal.rs
// description: human-readable terminal rendering of results
// reference: https://docs.rs/colored

use crate::models::{QaAnswer, RankedMatch};
use colored::Colorize;

const RULE_WIDTH: usize = 80;

pub fn render_search(query: &str, matches: &[RankedMatch]) -> String {
    let mut out = String::new();

    out.push_str(&format!("\nUser Query: {}\n", query.bold()));

    if matches.is_empty() {
        out.push_str("\nNo matching documents found.\n");
        out.push_str("Try different search terms or a larger corpus.\n");
        return out;
    }

    out.push_str(&format!(
        "Most Relevant Document: {}\n",
        matches[0].content.green()
    ));

    if matches.len() > 1 {
        out.push_str(&format!("\n{}\n", "=".repeat(RULE_WIDTH)));
        for (rank, m) in matches.iter().enumerate() {
            out.push_str(&format!(
                "{:>2}. {} {}\n",
                rank + 1,
                format!("(score {:.4})", m.score).cyan(),
                m.content
            ));
        }
        out.push_str(&format!("{}\n", "=".repeat(RULE_WIDTH)));
    }

    out
}

pub fn render_answer(answer: &QaAnswer) -> String {
    let mut out = String::new();

    out.push_str(&format!("\nQuestion: {}\n", answer.question.bold()));
    out.push_str(&format!("Document: {}\n", answer.document_source));

    match &answer.answer {
        Some(text) => {
            if let Some(model) = &answer.model {
                out.push_str(&format!("Model: {}\n", model));
            }
            out.push_str(&format!("\n{}\n", text.green()));
        }
        None => {
            out.push_str(&format!(
                "\n{}\n",
                "No API key configured - showing retrieved context only.".yellow()
            ));
        }
    }

    if !answer.sources.is_empty() {
        out.push_str(&format!("\n{}\n", "Sources".bold()));
        out.push_str(&format!("{}\n", "-".repeat(RULE_WIDTH)));
        for source in &answer.sources {
            out.push_str(&format!(
                "chunk {} {}\n",
                source.chunk_index,
                format!("(score {:.4})", source.score).cyan()
            ));
            for line in source.text.lines().take(4) {
                out.push_str(&format!("  {}\n", line));
            }
        }
    }

    out
}

pub fn render_corpus(documents: &[String]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Corpus: {} document(s)\n\n", documents.len()));
    for (i, doc) in documents.iter().enumerate() {
        let preview: String = doc.chars().take(100).collect();
        let suffix = if doc.chars().count() > 100 { "..." } else { "" };
        out.push_str(&format!("[{}] {}{}\n", i, preview, suffix));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnswerSource;

    fn no_color() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_render_search_shows_best_match() {
        no_color();
        let matches = vec![
            RankedMatch::new(1, "Deep learning is a type of machine learning.".to_string(), 0.48),
            RankedMatch::new(0, "Machine learning is a subset of AI.".to_string(), 0.20),
        ];
        let rendered = render_search("What is deep learning?", &matches);

        assert!(rendered.contains("User Query: What is deep learning?"));
        assert!(rendered.contains("Most Relevant Document: Deep learning is a type of machine learning."));
        assert!(rendered.contains("(score 0.4800)"));
    }

    #[test]
    fn test_render_search_empty() {
        no_color();
        let rendered = render_search("anything", &[]);
        assert!(rendered.contains("No matching documents found."));
    }

    #[test]
    fn test_render_extractive_answer_warns_about_missing_key() {
        no_color();
        let answer = QaAnswer::extractive(
            "What is Diagon Alley?".to_string(),
            vec![AnswerSource {
                chunk_index: 3,
                score: 0.91,
                text: "Diagon Alley is a wizarding street.".to_string(),
            }],
            "book.pdf".to_string(),
        );
        let rendered = render_answer(&answer);

        assert!(rendered.contains("No API key configured"));
        assert!(rendered.contains("chunk 3"));
        assert!(rendered.contains("Diagon Alley is a wizarding street."));
    }

    #[test]
    fn test_render_corpus_lists_documents() {
        no_color();
        let docs = vec!["first".to_string(), "second".to_string()];
        let rendered = render_corpus(&docs);
        assert!(rendered.contains("2 document(s)"));
        assert!(rendered.contains("[0] first"));
        assert!(rendered.contains("[1] second"));
    }
}
