//! HTTP layer for Parley.
//!
//! Axum router with the voice agent endpoint, the stateless peer endpoints,
//! a WebSocket echo, and static file serving for synthesized audio.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;

#[cfg(test)]
pub(crate) mod test_support;
