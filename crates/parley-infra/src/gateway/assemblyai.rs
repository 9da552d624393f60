//! AssemblyAiTranscriber -- [`Transcriber`] backed by the AssemblyAI v2 API.
//!
//! Transcription is a three-step exchange:
//! 1. `POST /v2/upload` with the raw audio bytes, yielding an `upload_url`
//! 2. `POST /v2/transcript` with that URL, yielding a transcript `id`
//! 3. `GET /v2/transcript/{id}` polled until `status` is `completed` or `error`
//!
//! The poll loop is bounded by the configured timeout.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tokio::time::Instant;

use parley_core::gateway::provider::Transcriber;
use parley_types::audio::AudioClip;
use parley_types::config::TranscriptionConfig;
use parley_types::error::TranscriptionError;

use super::{failure_parts, join_url};

#[derive(Debug, Deserialize)]
struct UploadResponse {
    upload_url: String,
}

#[derive(Debug, Serialize)]
struct TranscriptRequest<'a> {
    audio_url: &'a str,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum TranscriptStatus {
    Queued,
    Processing,
    Completed,
    Error,
}

#[derive(Debug, Deserialize)]
struct TranscriptResponse {
    id: String,
    status: TranscriptStatus,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// AssemblyAI speech-to-text gateway.
pub struct AssemblyAiTranscriber {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    poll_interval: Duration,
    timeout: Duration,
}

impl AssemblyAiTranscriber {
    pub fn new(client: reqwest::Client, api_key: SecretString, config: &TranscriptionConfig) -> Self {
        Self {
            client,
            api_key,
            base_url: config.base_url.clone(),
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    async fn upload(&self, clip: &AudioClip) -> Result<String, TranscriptionError> {
        let response = self
            .client
            .post(join_url(&self.base_url, "/v2/upload"))
            .header("authorization", self.api_key.expose_secret())
            .header("content-type", "application/octet-stream")
            .body(clip.bytes.clone())
            .send()
            .await
            .map_err(|e| TranscriptionError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let (status, message) = failure_parts(response).await;
            return Err(TranscriptionError::Provider { status, message });
        }

        let upload: UploadResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::MalformedResponse(e.to_string()))?;
        Ok(upload.upload_url)
    }

    async fn submit(&self, audio_url: &str) -> Result<String, TranscriptionError> {
        let transcript = self
            .fetch_transcript(
                self.client
                    .post(join_url(&self.base_url, "/v2/transcript"))
                    .json(&TranscriptRequest { audio_url }),
            )
            .await?;
        Ok(transcript.id)
    }

    async fn poll(&self, id: &str) -> Result<String, TranscriptionError> {
        let deadline = Instant::now() + self.timeout;
        let url = join_url(&self.base_url, &format!("/v2/transcript/{id}"));

        loop {
            let transcript = self.fetch_transcript(self.client.get(&url)).await?;
            if let Some(text) = interpret(transcript)? {
                return Ok(text);
            }
            if Instant::now() + self.poll_interval > deadline {
                return Err(TranscriptionError::Timeout(self.timeout.as_secs()));
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    async fn fetch_transcript(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<TranscriptResponse, TranscriptionError> {
        let response = request
            .header("authorization", self.api_key.expose_secret())
            .send()
            .await
            .map_err(|e| TranscriptionError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let (status, message) = failure_parts(response).await;
            return Err(TranscriptionError::Provider { status, message });
        }

        response
            .json()
            .await
            .map_err(|e| TranscriptionError::MalformedResponse(e.to_string()))
    }
}

/// `Ok(None)` while the transcript is still pending.
fn interpret(transcript: TranscriptResponse) -> Result<Option<String>, TranscriptionError> {
    match transcript.status {
        TranscriptStatus::Queued | TranscriptStatus::Processing => Ok(None),
        TranscriptStatus::Completed => transcript.text.map(Some).ok_or_else(|| {
            TranscriptionError::MalformedResponse(format!(
                "transcript {} completed without text",
                transcript.id
            ))
        }),
        TranscriptStatus::Error => Err(TranscriptionError::Failed(
            transcript
                .error
                .unwrap_or_else(|| "unknown transcription error".to_string()),
        )),
    }
}

impl Transcriber for AssemblyAiTranscriber {
    fn name(&self) -> &str {
        "assemblyai"
    }

    async fn transcribe(&self, clip: &AudioClip) -> Result<String, TranscriptionError> {
        if clip.is_empty() {
            return Err(TranscriptionError::EmptyAudio);
        }

        tracing::debug!(bytes = clip.len(), format = %clip.format, "uploading audio for transcription");
        let upload_url = self.upload(clip).await?;
        let id = self.submit(&upload_url).await?;
        tracing::debug!(transcript_id = %id, "transcript submitted");

        let text = self.poll(&id).await?;
        tracing::debug!(transcript_id = %id, chars = text.len(), "transcript completed");
        Ok(text)
    }
}
