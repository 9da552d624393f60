//! Application state wiring the gateways, session store, and orchestrator.
//!
//! The orchestrator is generic over its gateways; AppState pins it to the
//! boxed gateway types so providers are chosen at runtime.

use std::path::PathBuf;
use std::sync::Arc;

use parley_core::conversation::orchestrator::ConversationOrchestrator;
use parley_core::gateway::boxed::{BoxResponseGenerator, BoxSpeechSynthesizer, BoxTranscriber};
use parley_core::session::store::SessionStore;
use parley_infra::credentials::ApiKeys;
use parley_infra::gateway::{Gateways, build_gateways};
use parley_types::audio::VoiceParams;
use parley_types::config::ParleyConfig;

/// Orchestrator pinned to the type-erased gateways.
pub type ConcreteOrchestrator =
    ConversationOrchestrator<BoxTranscriber, BoxResponseGenerator, BoxSpeechSynthesizer>;

/// Shared state for every HTTP handler.
///
/// The peer endpoints call the gateways directly, so AppState keeps its own
/// handles next to the orchestrator's.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<ConcreteOrchestrator>,
    pub transcriber: Arc<BoxTranscriber>,
    pub generator: Arc<BoxResponseGenerator>,
    pub synthesizer: Arc<BoxSpeechSynthesizer>,
    pub voice: VoiceParams,
    pub static_dir: PathBuf,
}

impl AppState {
    /// Build the concrete provider gateways and wire them up.
    pub fn init(config: &ParleyConfig, keys: ApiKeys) -> anyhow::Result<Self> {
        let gateways = build_gateways(config, keys)?;
        Ok(Self::from_gateways(gateways, config))
    }

    /// Wire already-constructed gateways.
    pub fn from_gateways(gateways: Gateways, config: &ParleyConfig) -> Self {
        let transcriber = Arc::new(gateways.transcriber);
        let generator = Arc::new(gateways.generator);
        let synthesizer = Arc::new(gateways.synthesizer);
        let voice = config.synthesis.voice_params();

        let orchestrator = ConversationOrchestrator::new(
            Arc::new(SessionStore::new()),
            Arc::clone(&transcriber),
            Arc::clone(&generator),
            Arc::clone(&synthesizer),
            voice.clone(),
        );

        Self {
            orchestrator: Arc::new(orchestrator),
            transcriber,
            generator,
            synthesizer,
            voice,
            static_dir: PathBuf::from(&config.storage.static_dir),
        }
    }
}
