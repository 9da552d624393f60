//! Request and response bodies for the HTTP surface.
//!
//! Requests are deserialized once at the boundary; handlers only ever see
//! these typed structs.

use serde::{Deserialize, Serialize};

use crate::pipeline::TurnOutcome;

/// Response body for `POST /agent/chat/{session_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentChatResponse {
    pub session_id: String,
    pub transcript: String,
    pub response_text: String,
    pub audio_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<TurnOutcome> for AgentChatResponse {
    fn from(outcome: TurnOutcome) -> Self {
        Self {
            session_id: outcome.session_id,
            transcript: outcome.transcript,
            response_text: outcome.response_text,
            audio_url: outcome.audio_url.into_string(),
            error: None,
        }
    }
}

/// Request body for `POST /llm/query`.
#[derive(Debug, Clone, Deserialize)]
pub struct LlmQueryRequest {
    pub text: String,
}

/// Response body for `POST /llm/query`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmQueryResponse {
    pub response: String,
}

/// Request body for `POST /generate-murf-from-transcript`.
#[derive(Debug, Clone, Deserialize)]
pub struct SynthesizeRequest {
    pub transcript: String,
}

/// Response body for `POST /generate-murf-from-transcript`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesizeResponse {
    pub audio_url: String,
}

/// Response body for `POST /tts/echo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptResponse {
    pub transcript: String,
}

/// Body of every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
