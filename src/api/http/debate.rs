// src/api/http/debate.rs
// Debate endpoints: one-shot REST run and SSE progress stream

use axum::{
    Json,
    extract::{Query, State},
    response::{
        IntoResponse,
        sse::{Event, KeepAlive, Sse},
    },
};
use futures::stream::Stream;
use serde::Deserialize;
use std::convert::Infallible;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::debate::{DebateError, DebateEvent, run_debate};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DebateRequest {
    #[serde(default)]
    pub topic: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StreamQuery {
    pub topic: Option<String>,
}

/// POST /api/debate — run a full debate and return the transcript.
pub async fn start_debate(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<DebateRequest>,
) -> impl IntoResponse {
    let result: ApiResult<_> = async {
        let topic = request.topic.unwrap_or_default();
        if topic.trim().is_empty() {
            return Err(ApiError::bad_request("Topic is required"));
        }

        info!("REST debate request: topic={topic}");

        // The run is spawned so a panic inside it surfaces as a 500 instead
        // of tearing down the connection.
        let providers = app_state.providers.clone();
        let handle = tokio::spawn(async move { run_debate(&providers, &topic, None).await });

        match handle.await {
            Ok(Ok(transcript)) => Ok(Json(transcript)),
            Ok(Err(DebateError::EmptyTopic)) => Err(ApiError::bad_request("Topic is required")),
            Err(join_error) => Err(ApiError::internal(
                "Failed to generate debate",
                join_error.to_string(),
            )),
        }
    }
    .await;

    match result {
        Ok(response) => response.into_response(),
        Err(error) => error.into_response(),
    }
}

/// GET /api/debate/stream?topic=... — SSE stream of debate progress.
///
/// Emits `connected`, then one `model_status` per stage as the orchestrator
/// reaches it, then a terminal `complete` (with the transcript) or `error`.
/// A missing topic is rejected up front with a plain 400, not a stream.
pub async fn debate_stream(
    State(app_state): State<Arc<AppState>>,
    Query(params): Query<StreamQuery>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ApiError> {
    let topic = params.topic.unwrap_or_default();
    if topic.trim().is_empty() {
        return Err(ApiError::bad_request("Topic is required"));
    }

    info!("Streaming debate request: topic={topic}");

    let (tx, rx) = mpsc::channel::<DebateEvent>(32);

    // The run owns the sender; if the subscriber disconnects, sends are
    // silently discarded and the in-flight run completes on its own.
    let providers = app_state.providers.clone();
    tokio::spawn(async move {
        let _ = tx.send(DebateEvent::Connected).await;
        match run_debate(&providers, &topic, Some(&tx)).await {
            Ok(transcript) => {
                let _ = tx
                    .send(DebateEvent::Complete {
                        results: transcript,
                    })
                    .await;
            }
            Err(e) => {
                let _ = tx
                    .send(DebateEvent::Error {
                        message: e.to_string(),
                    })
                    .await;
            }
        }
    });

    let stream = async_stream::stream! {
        let mut rx = rx;
        while let Some(event) = rx.recv().await {
            let terminal = event.is_terminal();
            let data = serde_json::to_string(&event).unwrap_or_default();
            yield Ok(Event::default().data(data));
            if terminal {
                break;
            }
        }
    };

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}
