//! Hugging Face Inference API backend.
//!
//! Text-generation endpoint: POST the prompt as `inputs` with generation
//! parameters, receive `[{"generated_text": ...}]`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use seesaw_core::{GenerationCapability, ServiceError};

use crate::openai::status_error;

const DEFAULT_ENDPOINT: &str = "https://api-inference.huggingface.co/models";

/// Default code model, matching the project's historical baseline.
pub const DEFAULT_MODEL: &str = "codellama/CodeLlama-34b-Instruct-hf";

/// Client for the Hugging Face Inference API.
#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    api_key: String,
    model: String,
    endpoint_base: String,
    max_new_tokens: u32,
    http_client: reqwest::Client,
}

impl HuggingFaceClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            endpoint_base: DEFAULT_ENDPOINT.to_string(),
            max_new_tokens: 512,
            http_client: reqwest::Client::new(),
        }
    }

    pub fn with_max_new_tokens(mut self, max_new_tokens: u32) -> Self {
        self.max_new_tokens = max_new_tokens;
        self
    }

    /// Point at a different inference server (e.g. a TGI deployment).
    pub fn with_endpoint_base(mut self, endpoint_base: impl Into<String>) -> Self {
        self.endpoint_base = endpoint_base.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/{}", self.endpoint_base, self.model)
    }
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
}

#[derive(Debug, Serialize)]
struct InferenceParameters {
    max_new_tokens: u32,
    return_full_text: bool,
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    generated_text: Option<String>,
}

#[async_trait]
impl GenerationCapability for HuggingFaceClient {
    async fn generate(&self, prompt: &str) -> Result<String, ServiceError> {
        let request = InferenceRequest {
            inputs: prompt,
            parameters: InferenceParameters {
                max_new_tokens: self.max_new_tokens,
                return_full_text: false,
            },
        };

        let response = self
            .http_client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), error_text));
        }

        let outputs: Vec<GeneratedText> = response
            .json()
            .await
            .map_err(|e| ServiceError::InvalidResponse(e.to_string()))?;

        let content = outputs
            .first()
            .and_then(|o| o.generated_text.as_deref())
            .unwrap_or_default()
            .trim()
            .to_string();

        Ok(content)
    }

    fn name(&self) -> &str {
        "huggingface"
    }
}
