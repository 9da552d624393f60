//! Object-safe dynamic dispatch wrappers for the gateway traits.
//!
//! Same blanket-impl pattern for each gateway:
//! 1. An object-safe `*Dyn` trait with boxed futures
//! 2. Blanket impl of `*Dyn` for every implementor of the RPITIT trait
//! 3. A `Box*` struct wrapping `Box<dyn *Dyn>` that itself implements the
//!    RPITIT trait, so generic code accepts either form

use std::future::Future;
use std::pin::Pin;

use parley_types::audio::{AudioClip, AudioRef, VoiceParams};
use parley_types::error::{GenerationError, SynthesisError, TranscriptionError};

use super::provider::{ResponseGenerator, SpeechSynthesizer, Transcriber};

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

// ---------------------------------------------------------------------------
// Transcriber
// ---------------------------------------------------------------------------

/// Object-safe version of [`Transcriber`].
pub trait TranscriberDyn: Send + Sync {
    fn name(&self) -> &str;

    fn transcribe_boxed<'a>(
        &'a self,
        clip: &'a AudioClip,
    ) -> BoxFuture<'a, Result<String, TranscriptionError>>;
}

impl<T: Transcriber> TranscriberDyn for T {
    fn name(&self) -> &str {
        Transcriber::name(self)
    }

    fn transcribe_boxed<'a>(
        &'a self,
        clip: &'a AudioClip,
    ) -> BoxFuture<'a, Result<String, TranscriptionError>> {
        Box::pin(self.transcribe(clip))
    }
}

/// Type-erased transcriber for runtime provider selection.
pub struct BoxTranscriber {
    inner: Box<dyn TranscriberDyn>,
}

impl BoxTranscriber {
    pub fn new<T: Transcriber + 'static>(transcriber: T) -> Self {
        Self {
            inner: Box::new(transcriber),
        }
    }
}

impl Transcriber for BoxTranscriber {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn transcribe(&self, clip: &AudioClip) -> Result<String, TranscriptionError> {
        self.inner.transcribe_boxed(clip).await
    }
}

// ---------------------------------------------------------------------------
// ResponseGenerator
// ---------------------------------------------------------------------------

/// Object-safe version of [`ResponseGenerator`].
pub trait ResponseGeneratorDyn: Send + Sync {
    fn name(&self) -> &str;

    fn generate_boxed<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, GenerationError>>;
}

impl<T: ResponseGenerator> ResponseGeneratorDyn for T {
    fn name(&self) -> &str {
        ResponseGenerator::name(self)
    }

    fn generate_boxed<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, GenerationError>> {
        Box::pin(self.generate(prompt))
    }
}

/// Type-erased response generator.
pub struct BoxResponseGenerator {
    inner: Box<dyn ResponseGeneratorDyn>,
}

impl BoxResponseGenerator {
    pub fn new<T: ResponseGenerator + 'static>(generator: T) -> Self {
        Self {
            inner: Box::new(generator),
        }
    }
}

impl ResponseGenerator for BoxResponseGenerator {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.inner.generate_boxed(prompt).await
    }
}

// ---------------------------------------------------------------------------
// SpeechSynthesizer
// ---------------------------------------------------------------------------

/// Object-safe version of [`SpeechSynthesizer`].
pub trait SpeechSynthesizerDyn: Send + Sync {
    fn name(&self) -> &str;

    fn synthesize_boxed<'a>(
        &'a self,
        text: &'a str,
        voice: &'a VoiceParams,
        tag: Option<&'a str>,
    ) -> BoxFuture<'a, Result<AudioRef, SynthesisError>>;
}

impl<T: SpeechSynthesizer> SpeechSynthesizerDyn for T {
    fn name(&self) -> &str {
        SpeechSynthesizer::name(self)
    }

    fn synthesize_boxed<'a>(
        &'a self,
        text: &'a str,
        voice: &'a VoiceParams,
        tag: Option<&'a str>,
    ) -> BoxFuture<'a, Result<AudioRef, SynthesisError>> {
        Box::pin(self.synthesize(text, voice, tag))
    }
}

/// Type-erased speech synthesizer.
pub struct BoxSpeechSynthesizer {
    inner: Box<dyn SpeechSynthesizerDyn>,
}

impl BoxSpeechSynthesizer {
    pub fn new<T: SpeechSynthesizer + 'static>(synthesizer: T) -> Self {
        Self {
            inner: Box::new(synthesizer),
        }
    }
}

impl SpeechSynthesizer for BoxSpeechSynthesizer {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn synthesize(
        &self,
        text: &str,
        voice: &VoiceParams,
        tag: Option<&str>,
    ) -> Result<AudioRef, SynthesisError> {
        self.inner.synthesize_boxed(text, voice, tag).await
    }
}
