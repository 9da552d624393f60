//! Gateway abstractions for the three external conversions.
//!
//! Each gateway performs one fallible conversion: audio to text
//! ([`provider::Transcriber`]), prompt to reply ([`provider::ResponseGenerator`]),
//! and text to audio ([`provider::SpeechSynthesizer`]). The `boxed` module
//! provides type-erased wrappers for runtime selection.

pub mod boxed;
pub mod provider;
