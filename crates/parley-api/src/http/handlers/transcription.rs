//! Stateless transcription endpoint.

use axum::Json;
use axum::extract::State;

use parley_core::gateway::provider::Transcriber;
use parley_types::api::TranscriptResponse;

use crate::http::error::AppError;
use crate::http::extractors::audio::AudioUpload;
use crate::state::AppState;

/// POST /tts/echo - Transcribe an uploaded recording and return the text.
pub async fn echo(
    State(state): State<AppState>,
    AudioUpload(clip): AudioUpload,
) -> Result<Json<TranscriptResponse>, AppError> {
    let clip = clip.ok_or_else(|| AppError::Validation("No file provided".to_string()))?;

    let result = state.transcriber.transcribe(&clip).await;
    drop(clip);

    Ok(Json(TranscriptResponse { transcript: result? }))
}
