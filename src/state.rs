// src/state.rs

use std::sync::Arc;

use crate::config::ArenaConfig;
use crate::llm::provider::{ClaudeProvider, DebateProvider, OpenAiCompatProvider};

/// Shared application state: the fixed, ordered provider roster. Constructed
/// once at startup and passed by reference into every run; adapters keep
/// their own connection pools alive across requests.
#[derive(Clone)]
pub struct AppState {
    pub providers: Vec<Arc<dyn DebateProvider>>,
}

impl AppState {
    pub fn from_config(config: &ArenaConfig) -> Self {
        Self {
            providers: build_providers(config),
        }
    }
}

/// Assemble the debate roster in speaking order. Grok, ChatGPT and DeepSeek
/// all speak the OpenAI chat-completions dialect; Claude uses the Messages
/// API.
pub fn build_providers(config: &ArenaConfig) -> Vec<Arc<dyn DebateProvider>> {
    vec![
        Arc::new(OpenAiCompatProvider::new(
            "Grok (xAI)",
            config.grok_base_url.clone(),
            config.grok_api_key.clone(),
            config.grok_model.clone(),
            config.max_tokens_large,
        )),
        Arc::new(OpenAiCompatProvider::new(
            "ChatGPT (OpenAI)",
            config.openai_base_url.clone(),
            config.openai_api_key.clone(),
            config.openai_model.clone(),
            config.max_tokens_large,
        )),
        Arc::new(OpenAiCompatProvider::new(
            "DeepSeek",
            config.deepseek_base_url.clone(),
            config.deepseek_api_key.clone(),
            config.deepseek_model.clone(),
            config.max_tokens_small,
        )),
        Arc::new(ClaudeProvider::new(
            "Claude (Anthropic)",
            config.anthropic_api_key.clone(),
            config.anthropic_model.clone(),
            config.max_tokens_small,
        )),
    ]
}
