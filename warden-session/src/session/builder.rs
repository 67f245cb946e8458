//! Validating construction of [`UserSession`]s.

use std::{fmt, sync::Arc};

use warden_common::internal;

use super::UserSession;
use crate::{Authenticator, PolicyStore, ValidationError};

/// Builder for [`UserSession`].
///
/// Both the backend and the policy store are required; [`build`](Self::build)
/// reports whichever is missing first (backend, then store). The domain
/// defaults to the empty string, which resolves like any other unknown domain.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use warden_session::{Authenticator, PolicyStore, RetryPolicy, UserSession};
///
/// struct Accept;
///
/// impl Authenticator for Accept {
///     fn authenticate(&self, _username: &str, _password: &str) -> bool {
///         true
///     }
/// }
///
/// let mut policies = PolicyStore::new();
/// policies.set("svc.high", RetryPolicy::new(10));
///
/// let session = UserSession::builder()
///     .authenticator(Arc::new(Accept))
///     .policies(&policies)
///     .domain("svc.high")
///     .build()
///     .expect("backend and store were supplied");
///
/// assert_eq!(session.policy().max_attempts(), 10);
/// assert!(session.authenticate("user1", "pass1"));
/// ```
pub struct UserSessionBuilder<'a, A: ?Sized = dyn Authenticator> {
    authenticator: Option<Arc<A>>,
    policies: Option<&'a PolicyStore>,
    domain: String,
}

impl<A: ?Sized> Default for UserSessionBuilder<'_, A> {
    fn default() -> Self {
        Self {
            authenticator: None,
            policies: None,
            domain: String::new(),
        }
    }
}

impl<'a, A: Authenticator + ?Sized> UserSessionBuilder<'a, A> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identity backend the session will call.
    #[must_use]
    pub fn authenticator(mut self, authenticator: Arc<A>) -> Self {
        self.authenticator = Some(authenticator);
        self
    }

    /// Sets the store the domain's policy is resolved from.
    #[must_use]
    pub const fn policies(mut self, policies: &'a PolicyStore) -> Self {
        self.policies = Some(policies);
        self
    }

    /// Sets the domain whose policy applies.
    #[must_use]
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Builds the session, resolving the domain's policy now.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingAuthenticator`] if no backend was set
    /// - [`ValidationError::MissingPolicyStore`] if no policy store was set
    pub fn build(self) -> Result<UserSession<A>, ValidationError> {
        let authenticator = self
            .authenticator
            .ok_or(ValidationError::MissingAuthenticator)?;
        let policies = self.policies.ok_or(ValidationError::MissingPolicyStore)?;

        let session = UserSession::new(authenticator, policies, self.domain);
        internal!(
            level = DEBUG,
            "Session for {:?} allows {} attempt(s)",
            session.domain(),
            session.policy().max_attempts()
        );

        Ok(session)
    }
}

impl<A: ?Sized> fmt::Debug for UserSessionBuilder<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserSessionBuilder")
            .field("authenticator", &self.authenticator.is_some())
            .field("policies", &self.policies)
            .field("domain", &self.domain)
            .finish()
    }
}
