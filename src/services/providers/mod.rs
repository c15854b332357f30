//! Completion provider abstraction and implementations.
//!
//! This module provides a trait-based seam over the text-generation backend,
//! allowing the real OpenAI client to be swapped for a mock in tests.

pub mod mock;
pub mod openai;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// The service answered with a non-success status and a JSON body.
    /// The handler relays both to the caller verbatim.
    #[error("Completion service returned status {status}")]
    Upstream { status: u16, body: Value },

    #[error("Network error: {0}")]
    Network(String),

    /// A response that could not be decoded, including non-JSON error
    /// bodies (nothing structured to relay).
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Generation parameters for completion requests.
#[derive(Debug, Clone)]
pub struct CompletionParams {
    pub temperature: f32,
}

/// Result of a completion call.
#[derive(Debug, Clone)]
pub struct CompletionOutcome {
    /// Candidate texts in the order the service returned them.
    pub candidates: Vec<String>,
}

/// Trait for text completion providers (e.g. OpenAI).
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Issue a single completion request for the given prompt.
    async fn complete(
        &self,
        prompt: &str,
        params: &CompletionParams,
    ) -> Result<CompletionOutcome, ProviderError>;
}
