//! Errors raised while building a [`UserSession`](crate::UserSession).

use thiserror::Error;

/// A session could not be constructed from the supplied dependencies.
///
/// This is the only failure mode of the crate. Authentication itself never
/// errors; every unsuccessful outcome is reported as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No identity backend was supplied.
    #[error("authenticator is nil")]
    MissingAuthenticator,

    /// No policy store was supplied to resolve the domain against.
    #[error("policy store is nil")]
    MissingPolicyStore,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::MissingAuthenticator.to_string(),
            "authenticator is nil"
        );
        assert_eq!(
            ValidationError::MissingPolicyStore.to_string(),
            "policy store is nil"
        );
    }
}
