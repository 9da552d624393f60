//! MurfSynthesizer -- [`SpeechSynthesizer`] backed by the Murf speech API.
//!
//! Murf returns a short-lived `audioFile` URL. The audio is downloaded
//! right away and written into the static directory, so the reference handed
//! to clients (`/static/{file}`) stays valid for the life of the server.

use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use parley_core::gateway::provider::SpeechSynthesizer;
use parley_types::audio::{AudioRef, VoiceParams};
use parley_types::config::SynthesisConfig;
use parley_types::error::SynthesisError;

use super::{failure_parts, join_url};

/// URL prefix the static directory is mounted under.
pub const STATIC_URL_PREFIX: &str = "/static";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MurfRequest<'a> {
    text: &'a str,
    voice_id: &'a str,
    format: &'a str,
    sample_rate: u32,
    model_version: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MurfResponse {
    #[serde(default)]
    audio_file: Option<String>,
}

/// Murf text-to-speech gateway.
pub struct MurfSynthesizer {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    static_dir: PathBuf,
}

impl MurfSynthesizer {
    pub fn new(
        client: reqwest::Client,
        api_key: SecretString,
        config: &SynthesisConfig,
        static_dir: PathBuf,
    ) -> Self {
        Self {
            client,
            api_key,
            base_url: config.base_url.clone(),
            static_dir,
        }
    }

    async fn request_audio_file(&self, text: &str, voice: &VoiceParams) -> Result<String, SynthesisError> {
        let body = MurfRequest {
            text,
            voice_id: &voice.voice_id,
            format: &voice.format,
            sample_rate: voice.sample_rate,
            model_version: &voice.model_version,
        };

        let response = self
            .client
            .post(join_url(&self.base_url, "/v1/speech/generate"))
            .header("api-key", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| SynthesisError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let (status, message) = failure_parts(response).await;
            return Err(SynthesisError::Provider { status, message });
        }

        let parsed: MurfResponse = response
            .json()
            .await
            .map_err(|e| SynthesisError::MalformedResponse(e.to_string()))?;
        audio_file_url(parsed)
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, SynthesisError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SynthesisError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let (status, message) = failure_parts(response).await;
            return Err(SynthesisError::Provider { status, message });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::Http(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

fn audio_file_url(response: MurfResponse) -> Result<String, SynthesisError> {
    response
        .audio_file
        .filter(|url| !url.is_empty())
        .ok_or(SynthesisError::MissingAudioReference)
}

/// Longest tag kept in a file name.
const MAX_TAG_LEN: usize = 64;

/// Unique, filesystem-safe name for a synthesized clip:
/// `murf_{tag}_{millis}_{uuid8}.{ext}`, or without the tag segment when
/// there is none.
fn audio_file_name(format: &str, tag: Option<&str>) -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    let millis = chrono::Utc::now().timestamp_millis();
    let ext = format.to_ascii_lowercase();

    match tag.map(sanitize_tag).filter(|tag| !tag.is_empty()) {
        Some(tag) => format!("murf_{tag}_{millis}_{}.{ext}", &id[..8]),
        None => format!("murf_{millis}_{}.{ext}", &id[..8]),
    }
}

// Session ids arrive percent-decoded from the URL path, so they may hold
// separators or dots.
fn sanitize_tag(tag: &str) -> String {
    tag.chars()
        .take(MAX_TAG_LEN)
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect()
}

/// Write `audio` into `static_dir` and return its public reference.
async fn store_audio(static_dir: &Path, file_name: &str, audio: &[u8]) -> Result<AudioRef, SynthesisError> {
    tokio::fs::create_dir_all(static_dir)
        .await
        .map_err(|e| SynthesisError::Storage(e.to_string()))?;
    tokio::fs::write(static_dir.join(file_name), audio)
        .await
        .map_err(|e| SynthesisError::Storage(e.to_string()))?;
    Ok(AudioRef::new(format!("{STATIC_URL_PREFIX}/{file_name}")))
}

impl SpeechSynthesizer for MurfSynthesizer {
    fn name(&self) -> &str {
        "murf"
    }

    async fn synthesize(
        &self,
        text: &str,
        voice: &VoiceParams,
        tag: Option<&str>,
    ) -> Result<AudioRef, SynthesisError> {
        tracing::debug!(voice_id = %voice.voice_id, chars = text.len(), "requesting speech");

        let audio_url = self.request_audio_file(text, voice).await?;
        let audio = self.download(&audio_url).await?;
        let file_name = audio_file_name(&voice.format, tag);
        let reference = store_audio(&self.static_dir, &file_name, &audio).await?;

        tracing::debug!(reference = %reference, bytes = audio.len(), "stored synthesized audio");
        Ok(reference)
    }
}
