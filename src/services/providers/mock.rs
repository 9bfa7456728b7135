//! Mock provider implementation for testing.

use super::{FinishReason, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

type FailureFactory = Box<dyn Fn() -> ProviderError + Send + Sync>;

/// Mock text provider for testing.
///
/// Records every call and the exact prompt it received, and can be scripted
/// to return a canned text, per-call distinct text, or a chosen failure.
pub struct MockTextProvider {
    enabled: bool,
    canned: Option<String>,
    failure: Option<FailureFactory>,
    calls: AtomicU64,
    prompts: Mutex<Vec<String>>,
}

impl MockTextProvider {
    /// A provider that succeeds with "Mock contract text #N", N counting up
    /// per call. Disabled providers fail every call with `NotConfigured`.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            canned: None,
            failure: None,
            calls: AtomicU64::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A provider that succeeds with the same `text` on every call.
    pub fn with_canned_response(text: impl Into<String>) -> Self {
        Self {
            canned: Some(text.into()),
            ..Self::new(true)
        }
    }

    /// A provider that fails every call with the error built by `failure`.
    pub fn failing<F>(failure: F) -> Self
    where
        F: Fn() -> ProviderError + Send + Sync + 'static,
    {
        Self {
            failure: Some(Box::new(failure)),
            ..Self::new(true)
        }
    }

    /// Number of generation calls received so far.
    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    /// The prompts received so far, in call order.
    pub fn received_prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompt log poisoned").clone()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            ));
        }

        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.prompts
            .lock()
            .expect("prompt log poisoned")
            .push(prompt.to_string());

        if let Some(failure) = &self.failure {
            return Err(failure());
        }

        let text = match &self.canned {
            Some(canned) => canned.clone(),
            None => format!("Mock contract text #{}", call),
        };

        Ok(ProviderResponse {
            text,
            input_tokens: prompt.len() as i32 / 4,
            output_tokens: 10,
            finish_reason: FinishReason::Complete,
        })
    }
}
