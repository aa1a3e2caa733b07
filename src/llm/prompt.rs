// file: src/llm/prompt.rs
// description: prompt assembly for retrieval-augmented answering
// reference: stuffed-context question answering

use crate::store::ScoredChunk;

/// Build the QA prompt by stuffing the retrieved chunks, in retrieval
/// order, above the question.
pub fn build_qa_prompt(question: &str, context: &[ScoredChunk]) -> String {
    let mut prompt = String::from(
        "Use the following context to answer the question. \
         If the answer is not contained in the context, say you don't know.\n\n",
    );

    for (i, scored) in context.iter().enumerate() {
        prompt.push_str(&format!("Context {}:\n{}\n\n", i + 1, scored.chunk.text.trim()));
    }

    prompt.push_str(&format!("Question: {}\nAnswer:", question));
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Chunk;

    fn scored(index: usize, text: &str) -> ScoredChunk {
        ScoredChunk {
            chunk: Chunk::new(index, 0, text.len(), text.to_string()),
            score: 0.9,
        }
    }

    #[test]
    fn test_prompt_contains_context_and_question() {
        let context = vec![scored(0, "Diagon Alley is a wizarding street."), scored(1, "It is hidden in London.")];
        let prompt = build_qa_prompt("What is Diagon Alley?", &context);

        assert!(prompt.contains("Context 1:\nDiagon Alley is a wizarding street."));
        assert!(prompt.contains("Context 2:\nIt is hidden in London."));
        assert!(prompt.ends_with("Question: What is Diagon Alley?\nAnswer:"));
    }

    #[test]
    fn test_prompt_with_no_context_still_asks() {
        let prompt = build_qa_prompt("What is Diagon Alley?", &[]);
        assert!(prompt.contains("Question: What is Diagon Alley?"));
        assert!(!prompt.contains("Context 1:"));
    }
}
