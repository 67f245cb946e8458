//! Backend selection from configuration.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use warden_common::internal;
use warden_session::Authenticator;

use crate::{AlwaysAccept, AlwaysReject, IdpError, Probabilistic};

/// Which identity backend to construct.
///
/// # Examples
///
/// In RON config:
/// ```ron
/// authenticator: AlwaysReject,
/// ```
///
/// A probabilistic backend, reproducible from a seed:
/// ```ron
/// authenticator: Probabilistic(
///     probability: 0.5,
///     seed: Some(42),
/// ),
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AuthenticatorConfig {
    /// Accept every credential pair
    AlwaysAccept,
    /// Reject every credential pair
    AlwaysReject,
    /// Accept each call with `probability`
    Probabilistic {
        probability: f64,
        /// Seed for reproducible answers; omit to seed from the OS
        #[serde(default)]
        seed: Option<u64>,
    },
}

impl AuthenticatorConfig {
    /// Construct the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`IdpError::InvalidProbability`] for a probabilistic backend
    /// whose probability is outside `0.0..=1.0`.
    pub fn build(&self) -> Result<Arc<dyn Authenticator + Send + Sync>, IdpError> {
        internal!(level = DEBUG, "Building authenticator {:?}", self);

        let backend: Arc<dyn Authenticator + Send + Sync> = match *self {
            Self::AlwaysAccept => Arc::new(AlwaysAccept),
            Self::AlwaysReject => Arc::new(AlwaysReject),
            Self::Probabilistic {
                probability,
                seed: Some(seed),
            } => Arc::new(Probabilistic::seeded(probability, seed)?),
            Self::Probabilistic {
                probability,
                seed: None,
            } => Arc::new(Probabilistic::new(probability)?),
        };

        Ok(backend)
    }
}
