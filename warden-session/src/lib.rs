//! Bounded-retry authentication sessions
//!
//! This crate provides:
//! - The [`Authenticator`] capability every identity backend implements
//! - Per-domain [`RetryPolicy`] values and the [`PolicyStore`] that resolves them
//! - [`UserSession`], which binds a backend to a resolved policy and retries
//!   verification up to the policy's limit

mod authenticator;
mod error;
pub mod policy;
mod session;

pub use authenticator::Authenticator;
pub use error::ValidationError;
pub use policy::{PolicyStore, RetryPolicy};
pub use session::{AuthOutcome, UserSession, UserSessionBuilder};
