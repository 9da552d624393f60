//! Voice agent endpoint: one spoken turn of a session-scoped conversation.

use axum::Json;
use axum::extract::{Path, State};

use parley_types::api::AgentChatResponse;

use crate::http::error::AppError;
use crate::http::extractors::audio::AudioUpload;
use crate::state::AppState;

/// POST /agent/chat/{session_id} - Run one conversation turn.
///
/// Stage failures never fail the request; they surface as fallback values
/// in the body. Only a missing recording is rejected.
pub async fn chat(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    AudioUpload(clip): AudioUpload,
) -> Result<Json<AgentChatResponse>, AppError> {
    let clip = clip.ok_or_else(|| AppError::Validation("No audio provided".to_string()))?;

    let outcome = state.orchestrator.handle_turn(&session_id, clip).await;
    Ok(Json(AgentChatResponse::from(outcome)))
}
