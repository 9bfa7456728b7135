//! AI provider abstraction and implementations.
//!
//! The generation route talks to the remote model through the `TextProvider`
//! trait, so tests can substitute a recording mock for the real Gemini
//! client.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered")]
    ContentFiltered,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Completed generation returned by a provider.
#[derive(Debug)]
pub struct ProviderResponse {
    /// The generated document text.
    pub text: String,

    /// Input tokens consumed.
    pub input_tokens: i32,

    /// Output tokens generated.
    pub output_tokens: i32,

    /// Why the model stopped.
    pub finish_reason: FinishReason,
}

/// Reason why generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Complete,
    Length,
}

/// Trait for text generation providers (e.g. Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Send `prompt` as a single, complete generation request and wait for
    /// its terminal outcome.
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError>;
}
