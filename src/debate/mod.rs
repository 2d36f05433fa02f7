// src/debate/mod.rs
// Sequential debate orchestrator: one ordered pass over the provider roster,
// accumulating a running prompt and tolerating per-provider failure.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::llm::provider::DebateProvider;

pub mod events;
pub mod prompt;
pub mod types;

pub use events::DebateEvent;
pub use types::{DebateTranscript, StageOutcome, Turn};

#[derive(Debug, Error)]
pub enum DebateError {
    #[error("Topic is required")]
    EmptyTopic,
}

/// Run one debate: call every provider in roster order, feeding each one a
/// prompt derived from the topic and the previous provider's outcome.
///
/// A failed provider never aborts the run; its failure becomes a visible Turn
/// and the next provider receives a generic continuation prompt. The only
/// run-aborting failure is an empty topic, rejected before any provider is
/// contacted.
///
/// When `progress` is given, a `ModelStatus` event is emitted as each stage
/// actually starts. Sends are best-effort: a dropped subscriber does not stop
/// the run.
pub async fn run_debate(
    providers: &[Arc<dyn DebateProvider>],
    topic: &str,
    progress: Option<&mpsc::Sender<DebateEvent>>,
) -> Result<DebateTranscript, DebateError> {
    if topic.trim().is_empty() {
        return Err(DebateError::EmptyTopic);
    }

    info!("Starting debate on topic: {topic}");

    let mut transcript = DebateTranscript::new(topic);
    let mut current_prompt = prompt::opening_prompt(topic);

    for provider in providers {
        let name = provider.name();
        info!("Getting response from {name}...");

        if let Some(tx) = progress {
            let _ = tx.send(DebateEvent::model_status(name)).await;
        }

        let outcome = match provider.generate(&current_prompt).await {
            Ok(text) => StageOutcome::Success(text),
            Err(e) => {
                warn!("Provider {name} failed: {}", e.message);
                StageOutcome::Failure(e)
            }
        };

        transcript.responses.push(match &outcome {
            StageOutcome::Success(text) => Turn {
                model: name.to_string(),
                response: text.clone(),
            },
            StageOutcome::Failure(e) => Turn {
                model: name.to_string(),
                response: format!(
                    "Error: Unable to generate response from {name}. {}",
                    e.message
                ),
            },
        });

        current_prompt = prompt::next_prompt(topic, name, &outcome);
    }

    info!(
        "Debate complete: {} turns recorded",
        transcript.responses.len()
    );
    Ok(transcript)
}
