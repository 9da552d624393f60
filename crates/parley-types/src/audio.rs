//! Audio payload and voice types.
//!
//! [`AudioClip`] is an uploaded recording on its way to a transcription
//! gateway. [`AudioRef`] is what a synthesis gateway hands back: a path or
//! URL the client can fetch.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Container format of an uploaded recording, inferred from its file name
/// or content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    Webm,
    Wav,
    Mp3,
    Ogg,
    M4a,
    Unknown,
}

impl AudioFormat {
    /// Guess the format from a file name extension, falling back to a MIME
    /// type such as `audio/webm;codecs=opus`.
    pub fn detect(file_name: Option<&str>, content_type: Option<&str>) -> Self {
        let from_name = file_name
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| Self::from_token(ext))
            .unwrap_or(AudioFormat::Unknown);
        if from_name != AudioFormat::Unknown {
            return from_name;
        }

        content_type
            .and_then(|ct| ct.split(';').next())
            .and_then(|mime| mime.trim().rsplit_once('/'))
            .map(|(_, subtype)| Self::from_token(subtype))
            .unwrap_or(AudioFormat::Unknown)
    }

    fn from_token(token: &str) -> Self {
        match token.to_ascii_lowercase().as_str() {
            "webm" => AudioFormat::Webm,
            "wav" | "wave" | "x-wav" => AudioFormat::Wav,
            "mp3" | "mpeg" => AudioFormat::Mp3,
            "ogg" | "oga" | "opus" => AudioFormat::Ogg,
            "m4a" | "mp4" | "x-m4a" => AudioFormat::M4a,
            _ => AudioFormat::Unknown,
        }
    }

    /// File extension used when a recording has to be written to disk.
    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Webm | AudioFormat::Unknown => "webm",
            AudioFormat::Wav => "wav",
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Ogg => "ogg",
            AudioFormat::M4a => "m4a",
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioFormat::Unknown => write!(f, "unknown"),
            other => write!(f, "{}", other.extension()),
        }
    }
}

/// An uploaded recording: raw bytes plus declared format.
#[derive(Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub bytes: Vec<u8>,
    pub format: AudioFormat,
}

impl AudioClip {
    pub fn new(bytes: Vec<u8>, format: AudioFormat) -> Self {
        Self { bytes, format }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Audio payloads can be megabytes; keep them out of Debug output and logs.
impl fmt::Debug for AudioClip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioClip")
            .field("format", &self.format)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Voice settings forwarded to the speech synthesis provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceParams {
    pub voice_id: String,
    pub format: String,
    pub sample_rate: u32,
    pub model_version: String,
}

impl Default for VoiceParams {
    fn default() -> Self {
        Self {
            voice_id: "en-US-natalie".to_string(),
            format: "MP3".to_string(),
            sample_rate: 24_000,
            model_version: "GEN2".to_string(),
        }
    }
}

/// A retrievable reference to synthesized audio (e.g. `/static/murf_1.mp3`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AudioRef(String);

impl AudioRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for AudioRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for AudioRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_from_file_name() {
        assert_eq!(AudioFormat::detect(Some("recording.webm"), None), AudioFormat::Webm);
        assert_eq!(AudioFormat::detect(Some("clip.WAV"), None), AudioFormat::Wav);
        assert_eq!(AudioFormat::detect(Some("a.b.mp3"), None), AudioFormat::Mp3);
    }

    #[test]
    fn test_detect_falls_back_to_content_type() {
        assert_eq!(
            AudioFormat::detect(Some("blob"), Some("audio/webm;codecs=opus")),
            AudioFormat::Webm
        );
        assert_eq!(AudioFormat::detect(None, Some("audio/mpeg")), AudioFormat::Mp3);
        assert_eq!(AudioFormat::detect(None, None), AudioFormat::Unknown);
    }

    #[test]
    fn test_unknown_format_spools_as_webm() {
        assert_eq!(AudioFormat::Unknown.extension(), "webm");
        assert_eq!(AudioFormat::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_audio_clip_debug_hides_bytes() {
        let clip = AudioClip::new(vec![1, 2, 3], AudioFormat::Wav);
        let debug = format!("{clip:?}");
        assert!(debug.contains("len: 3"));
        assert!(!debug.contains("[1, 2, 3]"));
    }

    #[test]
    fn test_audio_ref_serializes_as_plain_string() {
        let json = serde_json::to_string(&AudioRef::from("/static/x.mp3")).unwrap();
        assert_eq!(json, "\"/static/x.mp3\"");
    }

    #[test]
    fn test_voice_params_defaults() {
        let voice = VoiceParams::default();
        assert_eq!(voice.voice_id, "en-US-natalie");
        assert_eq!(voice.sample_rate, 24_000);
    }
}
