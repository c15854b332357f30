use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Message returned when the API key is absent.
pub const MISSING_KEY_MESSAGE: &str =
    "OpenAI API key not configured, please follow instructions in README.md";

/// Message returned when the animal name is empty after trimming.
pub const INVALID_ANIMAL_MESSAGE: &str = "Please enter a valid animal";

/// Message returned for failures with no structured upstream shape.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred during your request.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("OpenAI API key not configured")]
    MissingApiKey,

    #[error("Invalid animal name")]
    InvalidAnimal,

    /// The completion service answered with a non-success status and a JSON
    /// body; both are relayed to the caller unchanged.
    #[error("Completion service error: status {status}")]
    Upstream { status: u16, body: Value },

    #[error("Completion request failed")]
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorBody {
            error: ErrorMessage,
        }

        #[derive(Serialize)]
        struct ErrorMessage {
            message: &'static str,
        }

        let (status, message) = match self {
            ApiError::Upstream { status, body } => {
                let status =
                    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                return (status, Json(body)).into_response();
            }
            ApiError::MissingApiKey => (StatusCode::INTERNAL_SERVER_ERROR, MISSING_KEY_MESSAGE),
            ApiError::InvalidAnimal => (StatusCode::BAD_REQUEST, INVALID_ANIMAL_MESSAGE),
            ApiError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE_MESSAGE),
        };

        (
            status,
            Json(ErrorBody {
                error: ErrorMessage { message },
            }),
        )
            .into_response()
    }
}
