//! Application error type mapping to HTTP status codes.
//!
//! Every failure body has the same shape: `{"error": "<message>"}`.

use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use parley_types::api::ErrorBody;
use parley_types::error::{GenerationError, SynthesisError, TranscriptionError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Transcription failed on a stateless endpoint.
    Transcription(TranscriptionError),
    /// Generation failed on a stateless endpoint.
    Generation(GenerationError),
    /// Synthesis failed on a stateless endpoint.
    Synthesis(SynthesisError),
    /// The request was rejected before any work started.
    Validation(String),
    /// The multipart body could not be read; carries axum's status.
    Upload(MultipartError),
    /// Anything else.
    Internal(String),
}

impl From<TranscriptionError> for AppError {
    fn from(e: TranscriptionError) -> Self {
        AppError::Transcription(e)
    }
}

impl From<GenerationError> for AppError {
    fn from(e: GenerationError) -> Self {
        AppError::Generation(e)
    }
}

impl From<SynthesisError> for AppError {
    fn from(e: SynthesisError) -> Self {
        AppError::Synthesis(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Upload(e) => (e.status(), format!("failed to read upload: {}", e.body_text())),
            AppError::Transcription(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::Generation(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::Synthesis(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %message, "request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %message, "request rejected");
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_is_bad_request() {
        let (status, message) = AppError::Validation("No audio provided".into()).status_and_message();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "No audio provided");
    }

    #[test]
    fn gateway_errors_are_server_errors() {
        let (status, message) =
            AppError::from(GenerationError::Http("connection refused".into())).status_and_message();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(message.contains("connection refused"));

        let (status, _) = AppError::from(SynthesisError::MissingAudioReference).status_and_message();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let (status, _) = AppError::from(TranscriptionError::Timeout(120)).status_and_message();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn response_carries_error_body() {
        let response = AppError::Internal("boom".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "application/json"
        );
    }
}
