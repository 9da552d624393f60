//! Multipart audio upload extractor.
//!
//! Reads the `audio` file part of a multipart body into an owned
//! [`AudioClip`]. Only a part with a non-empty filename counts: a plain text
//! field named `audio` is ignored. A request that is not multipart, or has
//! no such part, yields `AudioUpload(None)` so each handler can word its own
//! 400. A multipart stream that cannot be read keeps the status axum assigns
//! (413 for an oversized body, 400 for a malformed one).

use axum::extract::{FromRequest, Multipart, Request};

use parley_types::audio::{AudioClip, AudioFormat};

use crate::http::error::AppError;

/// Name of the multipart field carrying the recording.
pub const AUDIO_FIELD: &str = "audio";

/// The uploaded recording, if the request carried one.
pub struct AudioUpload(pub Option<AudioClip>);

impl<S> FromRequest<S> for AudioUpload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = match Multipart::from_request(req, state).await {
            Ok(multipart) => multipart,
            Err(rejection) => {
                tracing::debug!(%rejection, "request body is not multipart");
                return Ok(Self(None));
            }
        };

        while let Some(field) = multipart.next_field().await.map_err(AppError::Upload)? {
            let is_file = field.file_name().is_some_and(|name| !name.is_empty());
            if field.name() != Some(AUDIO_FIELD) || !is_file {
                continue;
            }

            let format = AudioFormat::detect(field.file_name(), field.content_type());
            let bytes = field.bytes().await.map_err(AppError::Upload)?;
            tracing::debug!(bytes = bytes.len(), %format, "received audio upload");
            return Ok(Self(Some(AudioClip::new(bytes.to_vec(), format))));
        }

        Ok(Self(None))
    }
}
