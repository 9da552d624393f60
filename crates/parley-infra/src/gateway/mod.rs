//! Gateway implementations.
//!
//! Concrete implementations of the gateway traits defined in `parley-core`:
//! [`AssemblyAiTranscriber`], [`GeminiGenerator`], and [`MurfSynthesizer`].
//! [`build_gateways`] wires all three from configuration and API keys,
//! sharing one HTTP client.

pub mod assemblyai;
pub mod gemini;
pub mod murf;

use std::path::PathBuf;
use std::time::Duration;

use parley_core::gateway::boxed::{BoxResponseGenerator, BoxSpeechSynthesizer, BoxTranscriber};
use parley_types::config::ParleyConfig;

use crate::credentials::ApiKeys;

pub use self::assemblyai::AssemblyAiTranscriber;
pub use self::gemini::GeminiGenerator;
pub use self::murf::MurfSynthesizer;

/// Overall timeout for a single provider HTTP request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// The three gateways, type-erased for runtime wiring.
pub struct Gateways {
    pub transcriber: BoxTranscriber,
    pub generator: BoxResponseGenerator,
    pub synthesizer: BoxSpeechSynthesizer,
}

/// Build the shared HTTP client used by every gateway.
pub fn build_http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()
}

/// Construct all gateways from configuration and resolved API keys.
pub fn build_gateways(config: &ParleyConfig, keys: ApiKeys) -> Result<Gateways, reqwest::Error> {
    let client = build_http_client()?;

    let transcriber =
        AssemblyAiTranscriber::new(client.clone(), keys.assemblyai, &config.transcription);
    let generator = GeminiGenerator::new(client.clone(), keys.gemini, &config.generation);
    let synthesizer = MurfSynthesizer::new(
        client,
        keys.murf,
        &config.synthesis,
        PathBuf::from(&config.storage.static_dir),
    );

    Ok(Gateways {
        transcriber: BoxTranscriber::new(transcriber),
        generator: BoxResponseGenerator::new(generator),
        synthesizer: BoxSpeechSynthesizer::new(synthesizer),
    })
}

/// Drain a non-success response into `(status, body)` for error reporting.
pub(crate) async fn failure_parts(response: reqwest::Response) -> (u16, String) {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    (status, body)
}

/// Join a base URL and a path without doubling the slash.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
