//! Custom axum extractors.

pub mod audio;
