//! Pieces shared by every warden crate.
//!
//! At the moment this is only logging: the subscriber set-up in [`logging`]
//! and the span-scoped logging macros. `tracing` is re-exported so the macros
//! resolve no matter which crate expands them.

pub mod logging;

pub use tracing;
