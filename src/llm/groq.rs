//! Groq chat completions client.
//!
//! Groq exposes the OpenAI chat completions protocol, so the request
//! and response shapes here are the standard `/chat/completions` ones.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ChatMessage, LlmClient};

const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

/// LLM client backed by the Groq API.
pub struct GroqClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl GroqClient {
    /// Create a client using the default Groq endpoint.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, GROQ_API_BASE.to_string())
    }

    /// Create a client against a custom base URL (useful for testing).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<&'a [Value]>,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[async_trait]
impl LlmClient for GroqClient {
    async fn chat_completion(
        &self,
        model: &str,
        messages: &[ChatMessage],
        tools: Option<&[Value]>,
    ) -> anyhow::Result<ChatMessage> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let body = CompletionRequest {
            model,
            messages,
            tools,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(anyhow::anyhow!("LLM API error (HTTP {}): {}", status, text));
        }

        let data: CompletionResponse = response.json().await?;

        let choice = data
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("No choices in LLM response"))?;

        Ok(choice.message)
    }
}
