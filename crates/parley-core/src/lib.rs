//! Conversation pipeline and gateway trait definitions for Parley.
//!
//! This crate defines the "ports" (gateway traits) that the infrastructure
//! layer implements, the in-process session store, and the orchestrator that
//! drives one audio turn through transcription, generation, and synthesis.
//! It depends only on `parley-types` -- never on `parley-infra` or any
//! network crate.

pub mod conversation;
pub mod gateway;
pub mod session;
