//! Mock provider implementation for testing.

use super::{CompletionOutcome, CompletionParams, CompletionProvider, ProviderError};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock completion provider returning a scripted outcome on every call.
pub struct MockCompletionProvider {
    outcome: Result<Vec<String>, ProviderError>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl MockCompletionProvider {
    pub fn returning(candidates: Vec<String>) -> Self {
        Self {
            outcome: Ok(candidates),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn failing(error: ProviderError) -> Self {
        Self {
            outcome: Err(error),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// Number of times `complete` was invoked.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The prompt passed to the most recent `complete` call.
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().expect("prompt lock poisoned").clone()
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(
        &self,
        prompt: &str,
        _params: &CompletionParams,
    ) -> Result<CompletionOutcome, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().expect("prompt lock poisoned") = Some(prompt.to_string());

        self.outcome
            .clone()
            .map(|candidates| CompletionOutcome { candidates })
    }
}
