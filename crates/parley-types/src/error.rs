//! Error types for the gateways and configuration loading.
//!
//! Gateway errors never reach a client directly from the voice pipeline:
//! they are absorbed by the fallback table and only logged.

use thiserror::Error;

/// Errors from a transcription gateway.
#[derive(Debug, Error)]
pub enum TranscriptionError {
    #[error("transcription request failed: {0}")]
    Http(String),

    #[error("transcription provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("transcription failed: {0}")]
    Failed(String),

    #[error("transcription did not finish within {0}s")]
    Timeout(u64),

    #[error("malformed transcription response: {0}")]
    MalformedResponse(String),

    #[error("empty audio payload")]
    EmptyAudio,
}

/// Errors from a response generator.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation request failed: {0}")]
    Http(String),

    #[error("generation provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("malformed generation response: {0}")]
    MalformedResponse(String),
}

/// Errors from a speech synthesis gateway.
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("synthesis request failed: {0}")]
    Http(String),

    #[error("synthesis provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("no audio reference in synthesis response")]
    MissingAudioReference,

    #[error("malformed synthesis response: {0}")]
    MalformedResponse(String),

    #[error("failed to store synthesized audio: {0}")]
    Storage(String),
}

/// Errors loading configuration or credentials.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingApiKeys(Vec<String>),

    #[error("failed to read config file {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse config file {path}: {message}")]
    Parse { path: String, message: String },
}
