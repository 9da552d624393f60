//! Mock gateways and a real-socket test server for handler tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use parley_core::gateway::boxed::{BoxResponseGenerator, BoxSpeechSynthesizer, BoxTranscriber};
use parley_core::gateway::provider::{ResponseGenerator, SpeechSynthesizer, Transcriber};
use parley_infra::gateway::Gateways;
use parley_types::audio::{AudioClip, AudioRef, VoiceParams};
use parley_types::config::ParleyConfig;
use parley_types::error::{GenerationError, SynthesisError, TranscriptionError};

use crate::http::router::build_router;
use crate::state::AppState;

/// Audio payload that makes [`MockTranscriber`] fail.
pub const FAILING_AUDIO: &[u8] = b"FAIL";

/// Transcribes the audio bytes as UTF-8 text.
struct MockTranscriber;

impl Transcriber for MockTranscriber {
    fn name(&self) -> &str {
        "mock-stt"
    }

    async fn transcribe(&self, clip: &AudioClip) -> Result<String, TranscriptionError> {
        if clip.bytes == FAILING_AUDIO {
            return Err(TranscriptionError::Failed("scripted failure".into()));
        }
        Ok(String::from_utf8_lossy(&clip.bytes).into_owned())
    }
}

/// Replies with a fixed text and records every prompt.
struct MockGenerator {
    reply: Option<String>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ResponseGenerator for MockGenerator {
    fn name(&self) -> &str {
        "mock-llm"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().ok_or_else(|| GenerationError::Provider {
            status: 503,
            message: "overloaded".into(),
        })
    }
}

/// Returns `R1`, `R2`, ... or fails every call.
struct MockSynthesizer {
    fail: bool,
    calls: AtomicUsize,
}

impl SpeechSynthesizer for MockSynthesizer {
    fn name(&self) -> &str {
        "mock-tts"
    }

    async fn synthesize(
        &self,
        _text: &str,
        _voice: &VoiceParams,
        _tag: Option<&str>,
    ) -> Result<AudioRef, SynthesisError> {
        if self.fail {
            return Err(SynthesisError::MissingAudioReference);
        }
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(AudioRef::new(format!("R{n}")))
    }
}

#[derive(Default)]
pub struct MockOptions {
    pub generator_fails: bool,
    pub synthesizer_fails: bool,
}

pub struct TestApp {
    pub base_url: String,
    pub state: AppState,
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub static_dir: TempDir,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Serve the real router on an ephemeral port backed by mock gateways.
pub async fn spawn_app(options: MockOptions) -> TestApp {
    let static_dir = TempDir::new().unwrap();
    let prompts = Arc::new(Mutex::new(Vec::new()));

    let mut config = ParleyConfig::default();
    config.storage.static_dir = static_dir.path().display().to_string();

    let gateways = Gateways {
        transcriber: BoxTranscriber::new(MockTranscriber),
        generator: BoxResponseGenerator::new(MockGenerator {
            reply: (!options.generator_fails).then(|| "hi there".to_string()),
            prompts: Arc::clone(&prompts),
        }),
        synthesizer: BoxSpeechSynthesizer::new(MockSynthesizer {
            fail: options.synthesizer_fails,
            calls: AtomicUsize::new(0),
        }),
    };
    let state = AppState::from_gateways(gateways, &config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = build_router(state.clone());
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    TestApp {
        base_url: format!("http://{addr}"),
        state,
        prompts,
        static_dir,
        client: reqwest::Client::new(),
    }
}

/// Multipart form with one `audio` file field.
pub fn audio_form(bytes: &[u8]) -> reqwest::multipart::Form {
    let part = reqwest::multipart::Part::bytes(bytes.to_vec())
        .file_name("recording.webm")
        .mime_str("audio/webm")
        .unwrap();
    reqwest::multipart::Form::new().part("audio", part)
}
