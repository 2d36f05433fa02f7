// src/llm/provider/openai_compat.rs
// Chat Completions adapter for OpenAI-compatible APIs (Grok, OpenAI, DeepSeek)

use super::{DEBATE_SYSTEM_PROMPT, DebateProvider, ProviderError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::debug;

pub struct OpenAiCompatProvider {
    client: Client,
    name: String,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: usize,
}

impl OpenAiCompatProvider {
    pub fn new(
        name: impl Into<String>,
        base_url: impl Into<String>,
        api_key: String,
        model: String,
        max_tokens: usize,
    ) -> Self {
        Self {
            client: Client::new(),
            name: name.into(),
            base_url: base_url.into(),
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
impl DebateProvider for OpenAiCompatProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": DEBATE_SYSTEM_PROMPT },
                { "role": "user", "content": prompt }
            ],
            "max_tokens": self.max_tokens,
        });

        debug!("{} request: model={}", self.name, self.model);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
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

        let content = raw["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| self.fault("no content in response"))?
            .to_string();

        Ok(content)
    }
}
