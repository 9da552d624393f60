//! ConversationOrchestrator -- drives one audio turn through the pipeline.
//!
//! For each call: transcribe, record the user turn, build the prompt from
//! the full history, generate, record the assistant turn, synthesize. Each
//! gateway result goes through [`fallback::resolve`], so a turn always
//! completes and always appends exactly one user and one assistant turn.
//!
//! Turns on the same session are serialized: the session's turn lock is held
//! from transcription through synthesis. Different sessions run in parallel.

use std::sync::Arc;

use tracing::{Instrument, debug, info, info_span};

use parley_types::audio::{AudioClip, AudioRef, VoiceParams};
use parley_types::conversation::Turn;
use parley_types::pipeline::{Stage, TurnOutcome};

use crate::gateway::provider::{ResponseGenerator, SpeechSynthesizer, Transcriber};
use crate::session::store::SessionStore;

use super::fallback::{self, Resolved};
use super::prompt::build_prompt;

/// Sequences transcription, generation, and synthesis for one session turn.
pub struct ConversationOrchestrator<T, G, S> {
    sessions: Arc<SessionStore>,
    transcriber: Arc<T>,
    generator: Arc<G>,
    synthesizer: Arc<S>,
    voice: VoiceParams,
}

impl<T, G, S> ConversationOrchestrator<T, G, S>
where
    T: Transcriber,
    G: ResponseGenerator,
    S: SpeechSynthesizer,
{
    pub fn new(
        sessions: Arc<SessionStore>,
        transcriber: Arc<T>,
        generator: Arc<G>,
        synthesizer: Arc<S>,
        voice: VoiceParams,
    ) -> Self {
        Self {
            sessions,
            transcriber,
            generator,
            synthesizer,
            voice,
        }
    }

    /// The store this orchestrator records turns into.
    pub fn sessions(&self) -> &Arc<SessionStore> {
        &self.sessions
    }

    /// Run one conversation turn for `session_id`.
    ///
    /// Infallible by construction: gateway failures degrade to fallback
    /// values, listed in [`TurnOutcome::degraded`]. The audio clip is
    /// consumed and dropped once transcription finishes, whatever its result.
    pub async fn handle_turn(&self, session_id: &str, clip: AudioClip) -> TurnOutcome {
        let span = info_span!(
            "conversation.turn",
            parley.session_id = %session_id,
            parley.audio.format = %clip.format,
            parley.audio.bytes = clip.len(),
        );
        self.run_turn(session_id, clip).instrument(span).await
    }

    async fn run_turn(&self, session_id: &str, clip: AudioClip) -> TurnOutcome {
        let session = self.sessions.get_or_create(session_id);
        let _turn_guard = session.lock_turn().await;
        let mut degraded = Vec::new();

        let transcript = self.transcribe(clip).await;
        note(&mut degraded, Stage::Transcribe, &transcript);
        let transcript = transcript.value;

        self.sessions.append(session_id, Turn::user(transcript.clone()));

        let prompt = build_prompt(&session.turns());
        debug!(prompt_len = prompt.len(), turns = session.len(), "built prompt");

        let reply = self.generate(&prompt).await;
        note(&mut degraded, Stage::Generate, &reply);
        let response_text = reply.value;

        self.sessions
            .append(session_id, Turn::assistant(response_text.clone()));

        let audio = self.synthesize(&response_text, session.id()).await;
        note(&mut degraded, Stage::Synthesize, &audio);

        let outcome = TurnOutcome {
            session_id: session_id.to_string(),
            transcript,
            response_text,
            audio_url: audio.value,
            degraded,
        };

        if outcome.is_degraded() {
            info!(
                turns = session.len(),
                degraded = ?outcome.degraded,
                "conversation turn complete with fallbacks"
            );
        } else {
            info!(turns = session.len(), "conversation turn complete");
        }
        outcome
    }

    async fn transcribe(&self, clip: AudioClip) -> Resolved<String> {
        let span = info_span!(
            "parley.transcribe",
            parley.stage = %Stage::Transcribe,
            parley.gateway = self.transcriber.name(),
        );
        let result = self.transcriber.transcribe(&clip).instrument(span).await;
        drop(clip);
        fallback::resolve(Stage::Transcribe, result)
    }

    async fn generate(&self, prompt: &str) -> Resolved<String> {
        let span = info_span!(
            "parley.generate",
            parley.stage = %Stage::Generate,
            parley.gateway = self.generator.name(),
            parley.prompt_len = prompt.len(),
        );
        let result = self.generator.generate(prompt).instrument(span).await;
        fallback::resolve(Stage::Generate, result)
    }

    async fn synthesize(&self, text: &str, session_id: &str) -> Resolved<AudioRef> {
        let span = info_span!(
            "parley.synthesize",
            parley.stage = %Stage::Synthesize,
            parley.gateway = self.synthesizer.name(),
            parley.voice_id = %self.voice.voice_id,
        );
        let result = self
            .synthesizer
            .synthesize(text, &self.voice, Some(session_id))
            .instrument(span)
            .await;
        fallback::resolve(Stage::Synthesize, result)
    }
}

fn note<V>(degraded: &mut Vec<Stage>, stage: Stage, resolved: &Resolved<V>) {
    if resolved.degraded {
        degraded.push(stage);
    }
}
