// src/debate/events.rs
// SSE event types for debate progress streaming

use super::types::DebateTranscript;
use serde::{Deserialize, Serialize};

/// Progress events pushed to a streaming subscriber. Emitted in order, at
/// most once per stage; `Error` and `Complete` are terminal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DebateEvent {
    /// Stream is open.
    Connected,
    /// The orchestrator reached the named provider's stage.
    ModelStatus { model: String, message: String },
    /// The run failed outright; no `Complete` follows.
    Error { message: String },
    /// The run finished; carries the full transcript.
    Complete { results: DebateTranscript },
}

impl DebateEvent {
    pub fn model_status(model: &str) -> Self {
        Self::ModelStatus {
            model: model.to_string(),
            message: format!("Getting response from {model}..."),
        }
    }

    /// Terminal events close the stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Error { .. } | Self::Complete { .. })
    }
}
