// src/llm/provider/mod.rs
// Provider trait and error type for multi-provider debate support

use async_trait::async_trait;
use thiserror::Error;

pub mod claude;
pub mod openai_compat;

pub use claude::ClaudeProvider;
pub use openai_compat::OpenAiCompatProvider;

/// Shared debate instruction sent as the system message to every provider.
pub const DEBATE_SYSTEM_PROMPT: &str = "You are participating in a brief debate \
with other AI models. Provide a concise, well-reasoned argument on the given \
topic in no more than two short paragraphs. Be direct and focused on your key points.";

/// A single provider call failed. The orchestrator recovers from this locally;
/// it never aborts a run.
#[derive(Debug, Clone, Error)]
#[error("{provider} API error: {message}")]
pub struct ProviderError {
    pub provider: String,
    pub message: String,
}

impl ProviderError {
    pub fn new(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            message: message.into(),
        }
    }
}

/// One externally hosted text-generation service.
///
/// Adapters make exactly one outbound call per invocation, no retries, and
/// must catch every transport/auth/malformed-response fault and re-signal it
/// as a `ProviderError` so nothing escapes this boundary.
#[async_trait]
pub trait DebateProvider: Send + Sync {
    /// Display name, unique within the configured roster.
    fn name(&self) -> &str;

    /// One chat completion against the assembled prompt. Returns the
    /// provider's raw text verbatim.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
