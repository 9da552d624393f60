//! Stateless speech synthesis endpoint.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use parley_core::gateway::provider::SpeechSynthesizer;
use parley_types::api::{SynthesizeRequest, SynthesizeResponse};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /generate-murf-from-transcript - Speak `transcript` with the
/// configured voice and return where the audio can be fetched.
pub async fn generate_from_transcript(
    State(state): State<AppState>,
    payload: Result<Json<SynthesizeRequest>, JsonRejection>,
) -> Result<Json<SynthesizeResponse>, AppError> {
    let Json(request) = payload?;
    if request.transcript.trim().is_empty() {
        return Err(AppError::Validation("transcript must not be empty".to_string()));
    }

    let audio = state
        .synthesizer
        .synthesize(&request.transcript, &state.voice, None)
        .await?;
    Ok(Json(SynthesizeResponse {
        audio_url: audio.into_string(),
    }))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::http::test_support::{MockOptions, spawn_app};

    #[tokio::test]
    async fn returns_audio_reference() {
        let app = spawn_app(MockOptions::default()).await;

        let response = app
            .client
            .post(app.url("/generate-murf-from-transcript"))
            .json(&json!({"transcript": "good morning"}))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, json!({"audio_url": "R1"}));
    }

    #[tokio::test]
    async fn missing_transcript_field_is_bad_request() {
        let app = spawn_app(MockOptions::default()).await;

        let response = app
            .client
            .post(app.url("/generate-murf-from-transcript"))
            .json(&json!({"text": "wrong field"}))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 400);
    }

    #[tokio::test]
    async fn synthesis_failure_is_server_error() {
        let app = spawn_app(MockOptions {
            synthesizer_fails: true,
            ..MockOptions::default()
        })
        .await;

        let response = app
            .client
            .post(app.url("/generate-murf-from-transcript"))
            .json(&json!({"transcript": "good morning"}))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 500);
    }
}
