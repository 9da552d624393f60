//! HTTP request handlers.

pub mod agent;
pub mod llm;
pub mod synthesis;
pub mod transcription;
pub mod ws;
