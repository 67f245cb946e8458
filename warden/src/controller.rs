use std::{path::Path, str::FromStr};

use ron::extensions::Extensions;
use serde::Deserialize;
use warden_common::internal;
use warden_idp::AuthenticatorConfig;
use warden_session::{AuthOutcome, Authenticator, PolicyStore, UserSession};

use crate::WardenError;

/// A session shared across threads, as built from configuration.
pub type SharedSession = UserSession<dyn Authenticator + Send + Sync>;

/// Everything needed to run one authentication: which backend to use, the
/// retry policies to seed, and the domain to resolve.
///
/// ```ron
/// Warden (
///     domain: "svc.low",
///     authenticator: Probabilistic(probability: 0.5, seed: 7),
///     policies: {
///         "svc.low": (max_attempts: 2),
///         "svc.high": (max_attempts: 10),
///     },
/// )
/// ```
///
/// Optional values may be written without `Some(..)`.
#[derive(Debug, Clone, Deserialize)]
pub struct Warden {
    #[serde(default)]
    domain: String,
    authenticator: AuthenticatorConfig,
    #[serde(alias = "policy", default)]
    policies: PolicyStore,
}

impl Warden {
    #[must_use]
    pub fn new(
        authenticator: AuthenticatorConfig,
        policies: PolicyStore,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            authenticator,
            policies,
        }
    }

    /// Read and parse the configuration at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`WardenError::ConfigRead`] if the file cannot be read, or
    /// [`WardenError::ConfigParse`] if it is not a valid configuration.
    pub fn load(path: &Path) -> Result<Self, WardenError> {
        let content = std::fs::read_to_string(path).map_err(|source| WardenError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let warden = content.parse::<Self>()?;
        internal!(
            level = DEBUG,
            "Loaded configuration from {} with {} domain policies",
            path.display(),
            warden.policies.len()
        );

        Ok(warden)
    }

    /// Resolve a different domain than the configured one.
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    #[must_use]
    pub const fn policies(&self) -> &PolicyStore {
        &self.policies
    }

    #[must_use]
    pub const fn authenticator(&self) -> &AuthenticatorConfig {
        &self.authenticator
    }

    /// Build the configured backend and bind it to the domain's policy.
    ///
    /// # Errors
    ///
    /// Returns [`WardenError::Backend`] if the backend configuration is invalid.
    pub fn session(&self) -> Result<SharedSession, WardenError> {
        let backend = self.authenticator.build()?;

        let session = UserSession::builder()
            .authenticator(backend)
            .policies(&self.policies)
            .domain(self.domain.as_str())
            .build()?;

        Ok(session)
    }

    /// Authenticate `username` once against the configured domain and log the
    /// result.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be built. A rejected
    /// authentication is an `Ok` outcome, not an error.
    #[tracing::instrument(level = "trace", skip_all, err)]
    pub fn run(&self, username: &str, password: &str) -> Result<AuthOutcome, WardenError> {
        let session = self.session()?;
        internal!(
            "Authenticating against {:?} with up to {} attempt(s)",
            session.domain(),
            session.policy().max_attempts()
        );

        let outcome = session.attempt(username, password);
        tracing::info!(
            "Authenticate {} against {:?}: {}",
            username,
            session.domain(),
            outcome
        );

        Ok(outcome)
    }
}

impl FromStr for Warden {
    type Err = WardenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(s)?)
    }
}
