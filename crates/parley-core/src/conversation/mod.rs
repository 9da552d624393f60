//! The per-session conversation pipeline.
//!
//! One audio turn flows through
//! `Received → Transcribed → UserTurnRecorded → PromptBuilt → Generated →
//! AssistantTurnRecorded → Synthesized → Responded`, always reaching
//! `Responded`: stage failures are replaced by the values in [`fallback`].

pub mod fallback;
pub mod orchestrator;
pub mod prompt;
