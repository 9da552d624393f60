//! Infrastructure layer for Parley.
//!
//! Contains the concrete gateway implementations of the traits defined in
//! `parley-core` (AssemblyAI transcription, Gemini generation, Murf
//! synthesis), configuration file loading, and API key resolution.

pub mod config;
pub mod credentials;
pub mod gateway;
