//! OpenAI completion provider implementation.
//!
//! Implements text generation against the OpenAI legacy completions API.

use super::{CompletionOutcome, CompletionParams, CompletionProvider, ProviderError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// OpenAI API base URL.
const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// OpenAI completion provider.
pub struct OpenAiProvider {
    api_key: String,
    model: String,
    client: Client,
}

impl OpenAiProvider {
    pub fn new(api_key: String, model: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_key,
            model,
            client,
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(
        &self,
        prompt: &str,
        params: &CompletionParams,
    ) -> Result<CompletionOutcome, ProviderError> {
        let request = CompletionRequest {
            model: &self.model,
            prompt,
            temperature: params.temperature,
        };

        let url = format!("{}/completions", OPENAI_API_BASE);

        tracing::debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            "Sending request to OpenAI completions API"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response.text().await.unwrap_or_default();

            // Only a decodable JSON body can be relayed verbatim.
            return match serde_json::from_str::<Value>(&error_text) {
                Ok(body) => Err(ProviderError::Upstream { status, body }),
                Err(_) => Err(ProviderError::InvalidResponse(format!(
                    "OpenAI API error {} with non-JSON body: {}",
                    status, error_text
                ))),
            };
        }

        let api_response: CompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        Ok(CompletionOutcome {
            candidates: api_response.choices.into_iter().map(|c| c.text).collect(),
        })
    }
}

// ============================================================================
// OpenAI API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    text: String,
}
