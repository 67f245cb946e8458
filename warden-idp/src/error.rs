use thiserror::Error;

/// Errors raised while constructing an identity backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IdpError {
    /// A success probability outside `0.0..=1.0` (or NaN) was requested.
    #[error("Invalid probability {0}: must be within 0.0..=1.0")]
    InvalidProbability(f64),
}
