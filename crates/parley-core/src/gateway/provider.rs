//! Gateway trait definitions.
//!
//! Uses RPITIT for the async operations. Implementations live in
//! parley-infra (AssemblyAI, Gemini, Murf) and in tests (scripted mocks).

use std::future::Future;

use parley_types::audio::{AudioClip, AudioRef, VoiceParams};
use parley_types::error::{GenerationError, SynthesisError, TranscriptionError};

/// Converts recorded audio to text.
pub trait Transcriber: Send + Sync {
    /// Human-readable provider name (e.g., "assemblyai").
    fn name(&self) -> &str;

    /// Transcribe a recording. Any provider-side failure is a
    /// [`TranscriptionError`].
    fn transcribe(
        &self,
        clip: &AudioClip,
    ) -> impl Future<Output = Result<String, TranscriptionError>> + Send;
}

/// Converts a prompt string to reply text.
pub trait ResponseGenerator: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Generate a reply for `prompt`. The prompt is the only context the
    /// generator receives.
    fn generate(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, GenerationError>> + Send;
}

/// Converts text to a retrievable audio resource.
pub trait SpeechSynthesizer: Send + Sync {
    /// Human-readable provider name (e.g., "murf").
    fn name(&self) -> &str;

    /// Synthesize `text` with the given voice and return where the audio
    /// can be fetched. `tag` names the conversation the audio belongs to,
    /// when there is one.
    fn synthesize(
        &self,
        text: &str,
        voice: &VoiceParams,
        tag: Option<&str>,
    ) -> impl Future<Output = Result<AudioRef, SynthesisError>> + Send;
}
