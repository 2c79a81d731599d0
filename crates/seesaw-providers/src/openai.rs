//! OpenAI-compatible chat-completions backend.
//!
//! Works against api.openai.com and any server speaking the same protocol
//! (OpenRouter, vLLM, llama.cpp server). HTTP failures are mapped onto the
//! `ServiceError` taxonomy so the orchestrator's skip/abandon policies see a
//! uniform contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use seesaw_core::{GenerationCapability, ServiceError};

const SYSTEM_PROMPT: &str = "You are a code generator.";

/// Client for OpenAI-compatible `/chat/completions` endpoints.
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleClient {
    name: String,
    api_key: Option<String>,
    base_url: String,
    model: String,
    temperature: f64,
    max_tokens: u32,
    http_client: reqwest::Client,
}

impl OpenAiCompatibleClient {
    pub fn new(
        name: impl Into<String>,
        api_key: Option<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            temperature: 0.3,
            max_tokens: 2048,
            http_client: reqwest::Client::new(),
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Map an HTTP status onto the capability failure taxonomy.
pub(crate) fn status_error(status: u16, message: String) -> ServiceError {
    match status {
        401 | 403 => ServiceError::Auth(message),
        429 => ServiceError::RateLimit(message),
        _ => ServiceError::Backend { status, message },
    }
}

#[async_trait]
impl GenerationCapability for OpenAiCompatibleClient {
    async fn generate(&self, prompt: &str) -> Result<String, ServiceError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            max_tokens: Some(self.max_tokens),
            temperature: Some(self.temperature),
        };

        let mut builder = self
            .http_client
            .post(self.endpoint())
            .header("Content-Type", "application/json");

        if let Some(api_key) = &self.api_key {
            builder = builder.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = builder
            .json(&request)
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), error_text));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::InvalidResponse(e.to_string()))?;

        let content = completion
            .choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .unwrap_or_default();

        Ok(content)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let client = OpenAiCompatibleClient::new(
            "openai",
            Some("sk-test".to_string()),
            "https://api.openai.com/v1/",
            "gpt-4o",
        );
        assert_eq!(client.endpoint(), "https://api.openai.com/v1/chat/completions");
    }

    #[test]
    fn test_status_mapping_covers_auth_and_rate_limit() {
        assert!(matches!(status_error(401, String::new()), ServiceError::Auth(_)));
        assert!(matches!(status_error(403, String::new()), ServiceError::Auth(_)));
        assert!(matches!(
            status_error(429, String::new()),
            ServiceError::RateLimit(_)
        ));
        assert!(matches!(
            status_error(500, String::new()),
            ServiceError::Backend { status: 500, .. }
        ));
    }

    #[test]
    fn test_builder_overrides() {
        let client = OpenAiCompatibleClient::new("x", None, "http://localhost:8080/v1", "local")
            .with_temperature(0.0)
            .with_max_tokens(512);
        assert_eq!(client.temperature, 0.0);
        assert_eq!(client.max_tokens, 512);
        assert_eq!(client.model(), "local");
    }
}
