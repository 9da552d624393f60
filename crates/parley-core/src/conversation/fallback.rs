//! Degrade-and-continue policy for the gateway stages.
//!
//! Every gateway call returns a tagged `Result`. [`resolve`] maps it through
//! the fixed fallback table so the pipeline always has a value to carry into
//! the next stage:
//!
//! | Stage        | Fallback                                      |
//! |--------------|-----------------------------------------------|
//! | `Transcribe` | [`TRANSCRIPT_PLACEHOLDER`]                    |
//! | `Generate`   | [`FALLBACK_REPLY`]                            |
//! | `Synthesize` | [`FALLBACK_AUDIO_URL`]                        |
//!
//! Fallback values are recorded into session history exactly like genuine
//! gateway output.

use std::fmt::Display;

use parley_types::pipeline::Stage;

/// Recorded as the user turn when transcription fails.
pub const TRANSCRIPT_PLACEHOLDER: &str = "[STT failed]";

/// Recorded as the assistant turn when generation fails.
pub const FALLBACK_REPLY: &str = "I'm having trouble connecting right now.";

/// Returned as the audio reference when synthesis fails.
pub const FALLBACK_AUDIO_URL: &str = "/static/fallback.mp3";

/// The substitute value for a failed stage.
pub fn fallback_value(stage: Stage) -> &'static str {
    match stage {
        Stage::Transcribe => TRANSCRIPT_PLACEHOLDER,
        Stage::Generate => FALLBACK_REPLY,
        Stage::Synthesize => FALLBACK_AUDIO_URL,
    }
}

/// A stage value after the fallback table has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    pub value: T,
    /// True when `value` came from the fallback table.
    pub degraded: bool,
}

/// Apply the fallback table to one stage result.
///
/// Never fails. On error, logs the cause and substitutes the stage's
/// fallback value.
pub fn resolve<T, E>(stage: Stage, result: Result<T, E>) -> Resolved<T>
where
    T: From<&'static str>,
    E: Display,
{
    match result {
        Ok(value) => Resolved {
            value,
            degraded: false,
        },
        Err(err) => {
            let fallback = fallback_value(stage);
            tracing::warn!(
                stage = %stage,
                error = %err,
                fallback,
                "stage failed, continuing with fallback"
            );
            Resolved {
                value: T::from(fallback),
                degraded: true,
            }
        }
    }
}
