// file: src/llm/chat.rs
// description: Groq chat completions client for answer generation
// reference: https://console.groq.com/docs/text-chat

use crate::error::{Result, RetrieverError};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

const CHAT_COMPLETIONS_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

pub struct GroqChatClient {
    client: Client,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl GroqChatClient {
    pub fn new(api_key: String, model: String, max_tokens: u32, temperature: f32) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
            max_tokens,
            temperature,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a single user prompt and return the first completion choice.
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        self.complete_with_limit(prompt, self.max_tokens).await
    }

    pub async fn complete_with_limit(&self, prompt: &str, max_tokens: u32) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            max_tokens,
            temperature: self.temperature,
        };

        debug!(
            model = %self.model,
            prompt_chars = prompt.len(),
            max_tokens,
            "Requesting chat completion"
        );

        let response = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                RetrieverError::Completion(format!("failed to send Groq API request: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(RetrieverError::Completion(format!(
                "Groq API request failed with status {}: {}",
                status, error_text
            )));
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            RetrieverError::Completion(format!("failed to parse Groq API response: {}", e))
        })?;

        let choice = parsed.choices.into_iter().next().ok_or_else(|| {
            RetrieverError::Completion("no completion choices returned".to_string())
        })?;

        Ok(choice.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_serialization() {
        let request = ChatRequest {
            model: "llama-3.3-70b-versatile".to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: "Once upon a time".to_string(),
            }],
            max_tokens: 50,
            temperature: 0.0,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama-3.3-70b-versatile");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["max_tokens"], 50);
    }

    #[test]
    fn test_chat_response_deserialization() {
        let raw = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "a generated story"}}
            ]
        }"#;

        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content, "a generated story");
    }

    #[test]
    fn test_client_exposes_model_name() {
        let client = GroqChatClient::new("key".to_string(), "gpt2-like".to_string(), 50, 0.7);
        assert_eq!(client.model(), "gpt2-like");
    }
}
