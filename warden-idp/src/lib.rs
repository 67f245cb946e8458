//! Identity backends implementing [`warden_session::Authenticator`]
//!
//! - [`AlwaysAccept`] / [`AlwaysReject`]: deterministic backends
//! - [`Probabilistic`]: accepts each call independently with a fixed
//!   probability, optionally from a reproducible seed
//! - [`Counting`]: wraps another backend and records how often it was called
//! - [`AuthenticatorConfig`]: picks one of the above from configuration

mod config;
mod counting;
mod error;
mod fixed;
mod probabilistic;

pub use config::AuthenticatorConfig;
pub use counting::Counting;
pub use error::IdpError;
pub use fixed::{AlwaysAccept, AlwaysReject};
pub use probabilistic::Probabilistic;
