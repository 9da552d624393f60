//! Configuration types for Parley.
//!
//! `ParleyConfig` mirrors `parley.toml`. Every section and field has a
//! default, so an empty or missing file yields a working configuration.
//! API keys are deliberately absent: they are read from the environment.

use serde::{Deserialize, Serialize};

use crate::audio::VoiceParams;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParleyConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub transcription: TranscriptionConfig,
    pub generation: GenerationConfig,
    pub synthesis: SynthesisConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5001,
        }
    }
}

/// Where static assets, including synthesized audio, are served from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub static_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            static_dir: "static".to_string(),
        }
    }
}

/// AssemblyAI transcription settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptionConfig {
    pub base_url: String,
    /// Delay between transcript status polls.
    pub poll_interval_ms: u64,
    /// Give up on a transcript that has not completed after this long.
    pub timeout_secs: u64,
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.assemblyai.com".to_string(),
            poll_interval_ms: 1_000,
            timeout_secs: 120,
        }
    }
}

/// Gemini response generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub base_url: String,
    pub model: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.5-flash".to_string(),
        }
    }
}

/// Murf speech synthesis settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    pub base_url: String,
    pub voice_id: String,
    pub format: String,
    pub sample_rate: u32,
    pub model_version: String,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        let voice = VoiceParams::default();
        Self {
            base_url: "https://api.murf.ai".to_string(),
            voice_id: voice.voice_id,
            format: voice.format,
            sample_rate: voice.sample_rate,
            model_version: voice.model_version,
        }
    }
}

impl SynthesisConfig {
    /// Voice parameters passed with every synthesis call.
    pub fn voice_params(&self) -> VoiceParams {
        VoiceParams {
            voice_id: self.voice_id.clone(),
            format: self.format.clone(),
            sample_rate: self.sample_rate,
            model_version: self.model_version.clone(),
        }
    }
}
