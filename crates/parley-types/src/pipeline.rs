//! Conversation pipeline stage and outcome types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::audio::AudioRef;

/// A fallible gateway stage of the conversation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Transcribe,
    Generate,
    Synthesize,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Transcribe => write!(f, "transcribe"),
            Stage::Generate => write!(f, "generate"),
            Stage::Synthesize => write!(f, "synthesize"),
        }
    }
}

/// Result of one completed conversation turn.
///
/// Always produced, even when stages fell back. `degraded` lists the stages
/// whose value is a fallback, in pipeline order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub session_id: String,
    pub transcript: String,
    pub response_text: String,
    pub audio_url: AudioRef,
    pub degraded: Vec<Stage>,
}

impl TurnOutcome {
    pub fn is_degraded(&self) -> bool {
        !self.degraded.is_empty()
    }
}
