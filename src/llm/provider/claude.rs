// src/llm/provider/claude.rs
// Claude Messages API adapter

use super::{DEBATE_SYSTEM_PROMPT, DebateProvider, ProviderError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::debug;

pub struct ClaudeProvider {
    client: Client,
    name: String,
    api_key: String,
    model: String,
    max_tokens: usize,
}

impl ClaudeProvider {
    pub fn new(name: impl Into<String>, api_key: String, model: String, max_tokens: usize) -> Self {
        Self {
            client: Client::new(),
            name: name.into(),
            api_key,
            model,
            max_tokens,
        }
    }

    fn fault(&self, message: impl Into<String>) -> ProviderError {
        ProviderError::new(&self.name, message)
    }
}

#[async_trait]
impl DebateProvider for ClaudeProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let body = json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "system": DEBATE_SYSTEM_PROMPT,
            "messages": [
                { "role": "user", "content": prompt }
            ],
        });

        debug!("{} request: model={}", self.name, self.model);

        let response = self
            .client
            .post("https://api.anthropic.com/v1/messages")
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&body)
            .send()
            .await
            .map_err(|e| self.fault(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(self.fault(format!("HTTP {}: {}", status, error_text)));
        }

        let raw: Value = response
            .json()
            .await
            .map_err(|e| self.fault(e.to_string()))?;

        let content = raw["content"][0]["text"]
            .as_str()
            .ok_or_else(|| self.fault("no content in response"))?
            .to_string();

        Ok(content)
    }
}
