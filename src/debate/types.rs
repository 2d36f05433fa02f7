// src/debate/types.rs

use crate::llm::provider::ProviderError;
use serde::{Deserialize, Serialize};

/// One provider's recorded contribution, appended in call order and never
/// mutated afterwards. A failed call still produces a Turn whose response
/// text documents the failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Turn {
    pub model: String,
    pub response: String,
}

/// The unit returned to the caller. Grows by exactly one Turn per configured
/// provider; nothing outlives the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebateTranscript {
    pub topic: String,
    pub responses: Vec<Turn>,
}

impl DebateTranscript {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            responses: Vec::new(),
        }
    }
}

/// Tagged result of one stage. The prompt-accumulation rule reads this tag
/// rather than sniffing an "Error:" prefix out of the turn text.
#[derive(Debug, Clone)]
pub enum StageOutcome {
    Success(String),
    Failure(ProviderError),
}
