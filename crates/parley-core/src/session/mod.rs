//! In-process conversation session state.
//!
//! Sessions live for the lifetime of the [`store::SessionStore`] that owns
//! them. There is no persistence and no eviction.

pub mod store;
