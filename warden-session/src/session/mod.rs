//! User sessions: one identity backend bound to one resolved retry policy.
//!
//! # Authentication
//!
//! Every call to [`UserSession::authenticate`] starts from zero attempts:
//!
//! ```text
//! Start ──> Attempting(k) ──accepted──> Authenticated
//!               │   ^
//!     rejected, │   │ k + 1 < max_attempts
//!               └───┘
//!               │
//!               └── k + 1 >= max_attempts ──> Exhausted
//! ```
//!
//! A budget of zero (or less) never leaves `Start`, and the session reports
//! failure without calling the backend at all. Attempts run back to back on
//! the caller's thread with no delay between them.

mod builder;

use std::{fmt, sync::Arc};

use warden_common::verify;

pub use self::builder::UserSessionBuilder;
use crate::{Authenticator, PolicyStore, RetryPolicy};

/// How a single authentication call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The backend accepted the credentials on attempt number `attempts`.
    Authenticated { attempts: u32 },
    /// The backend rejected every one of the `attempts` calls the policy allowed.
    Exhausted { attempts: u32 },
    /// The policy allowed no attempts, so the backend was never called.
    NotAttempted,
}

impl AuthOutcome {
    /// Returns `true` if the credentials were accepted.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Number of backend calls made.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        match self {
            Self::Authenticated { attempts } | Self::Exhausted { attempts } => *attempts,
            Self::NotAttempted => 0,
        }
    }
}

impl fmt::Display for AuthOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authenticated { attempts } => write!(f, "authenticated after {attempts} attempt(s)"),
            Self::Exhausted { attempts } => write!(f, "rejected after {attempts} attempt(s)"),
            Self::NotAttempted => f.write_str("not attempted"),
        }
    }
}

/// A backend bound to the retry policy of one domain.
///
/// The policy is copied out of the [`PolicyStore`] when the session is built;
/// changing the store afterwards has no effect on existing sessions.
///
/// The backend is held behind an [`Arc`], so sessions for several domains can
/// share one backend. A session is `Send`/`Sync` exactly when its backend is.
pub struct UserSession<A: ?Sized = dyn Authenticator> {
    authenticator: Arc<A>,
    policy: RetryPolicy,
    domain: String,
}

impl<A: Authenticator + ?Sized> UserSession<A> {
    /// Start building a session. See [`UserSessionBuilder`].
    #[must_use]
    pub fn builder<'a>() -> UserSessionBuilder<'a, A> {
        UserSessionBuilder::new()
    }

    /// Bind `authenticator` to the policy `policies` holds for `domain`.
    ///
    /// Any domain is accepted; domains without a stored policy get
    /// [`RetryPolicy::default`].
    #[must_use]
    pub fn new(authenticator: Arc<A>, policies: &PolicyStore, domain: impl Into<String>) -> Self {
        let domain = domain.into();
        let policy = policies.get(&domain);

        Self {
            authenticator,
            policy,
            domain,
        }
    }

    /// Verify `username`/`password`, retrying up to the policy's budget.
    ///
    /// Returns `true` as soon as one backend call succeeds. A rejected
    /// password, an exhausted budget and a zero budget all look the same
    /// here; use [`attempt`](Self::attempt) to tell them apart.
    #[must_use]
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        self.attempt(username, password).is_authenticated()
    }

    /// Like [`authenticate`](Self::authenticate), but reports how the call ended.
    #[must_use]
    #[tracing::instrument(level = "debug", skip(self, password), fields(domain = %self.domain), ret)]
    pub fn attempt(&self, username: &str, password: &str) -> AuthOutcome {
        let mut attempts = 0;

        while self.policy.should_attempt(attempts) {
            attempts += 1;

            if self.authenticator.authenticate(username, password) {
                verify!(
                    level = DEBUG,
                    "Attempt {} of {} accepted",
                    attempts,
                    self.policy.max_attempts()
                );
                return AuthOutcome::Authenticated { attempts };
            }

            verify!(
                "Attempt {} of {} rejected",
                attempts,
                self.policy.max_attempts()
            );
        }

        if attempts == 0 {
            AuthOutcome::NotAttempted
        } else {
            AuthOutcome::Exhausted { attempts }
        }
    }

    /// The policy resolved at construction.
    #[must_use]
    pub const fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// The domain the policy was resolved for.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The bound backend.
    #[must_use]
    pub const fn authenticator(&self) -> &Arc<A> {
        &self.authenticator
    }
}

impl<A: ?Sized> Clone for UserSession<A> {
    fn clone(&self) -> Self {
        Self {
            authenticator: Arc::clone(&self.authenticator),
            policy: self.policy,
            domain: self.domain.clone(),
        }
    }
}

impl<A: ?Sized> fmt::Debug for UserSession<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserSession")
            .field("domain", &self.domain)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
