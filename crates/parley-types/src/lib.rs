//! Shared domain types for Parley.
//!
//! This crate contains the types passed between the conversation pipeline,
//! the gateway implementations, and the HTTP layer: turns, audio payloads,
//! turn outcomes, configuration, and the per-stage error enums.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod api;
pub mod audio;
pub mod config;
pub mod conversation;
pub mod error;
pub mod pipeline;
