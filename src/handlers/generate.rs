use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::services::prompt::build_prompt;
use crate::services::providers::{CompletionParams, ProviderError};
use crate::startup::AppState;

/// Sampling temperature for every completion request.
const TEMPERATURE: f32 = 0.6;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub animal: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub result: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    if !state.config.has_api_key() {
        tracing::error!("OpenAI API key not configured");
        return Err(ApiError::MissingApiKey);
    }

    if request.animal.trim().is_empty() {
        tracing::warn!("Rejected request with empty animal name");
        return Err(ApiError::InvalidAnimal);
    }

    // The raw value goes into the prompt; trimming above is only the
    // emptiness check.
    let prompt = build_prompt(&request.animal);
    let params = CompletionParams {
        temperature: TEMPERATURE,
    };

    match state.provider.complete(&prompt, &params).await {
        Ok(outcome) => {
            let result = outcome.candidates.into_iter().next().ok_or_else(|| {
                tracing::error!("Completion service returned no candidates");
                ApiError::Internal
            })?;
            Ok(Json(GenerateResponse { result }))
        }
        Err(ProviderError::Upstream { status, body }) => {
            tracing::error!(status, body = %body, "Completion service returned an error");
            Err(ApiError::Upstream { status, body })
        }
        Err(e) => {
            tracing::error!("Error with completion request: {}", e);
            Err(ApiError::Internal)
        }
    }
}
