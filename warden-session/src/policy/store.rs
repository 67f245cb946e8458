//! Domain to retry policy mapping.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use super::RetryPolicy;

/// Registry of per-domain retry policies.
///
/// Domains are matched exactly and case-sensitively. Looking up a domain that
/// was never [`set`](Self::set) yields [`RetryPolicy::default`] (a single
/// attempt) without recording anything.
///
/// The store does no locking of its own. Callers sharing one store between
/// threads must serialise `get`/`set` themselves.
///
/// Deserialises from a plain map:
/// ```ron
/// {
///     "svc.low": (max_attempts: 2),
///     "svc.high": (max_attempts: 10),
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyStore {
    policies: AHashMap<String, RetryPolicy>,
}

impl PolicyStore {
    /// Create a new empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            policies: AHashMap::new(),
        }
    }

    /// Resolve the policy for `domain`.
    ///
    /// Never fails: unknown domains get [`RetryPolicy::default`].
    #[must_use]
    pub fn get(&self, domain: &str) -> RetryPolicy {
        self.policies.get(domain).copied().unwrap_or_else(|| {
            tracing::trace!("No retry policy for {domain:?}, using default");
            RetryPolicy::default()
        })
    }

    /// Add or replace the policy for `domain`.
    ///
    /// The value is not validated; non-positive budgets are stored as given.
    pub fn set(&mut self, domain: impl Into<String>, policy: RetryPolicy) {
        let domain = domain.into();
        tracing::trace!(
            "Setting retry policy for {domain:?} to {} attempts",
            policy.max_attempts()
        );
        self.policies.insert(domain, policy);
    }

    /// Check if `domain` has an explicitly stored policy
    #[must_use]
    pub fn contains(&self, domain: &str) -> bool {
        self.policies.contains_key(domain)
    }

    /// Number of domains with a stored policy
    #[must_use]
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    /// Check if no policy has been stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// Iterate over stored `(domain, policy)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, RetryPolicy)> {
        self.policies
            .iter()
            .map(|(domain, policy)| (domain.as_str(), *policy))
    }
}

impl<K: Into<String>> Extend<(K, RetryPolicy)> for PolicyStore {
    fn extend<T: IntoIterator<Item = (K, RetryPolicy)>>(&mut self, iter: T) {
        for (domain, policy) in iter {
            self.set(domain, policy);
        }
    }
}

impl<K: Into<String>> FromIterator<(K, RetryPolicy)> for PolicyStore {
    fn from_iter<T: IntoIterator<Item = (K, RetryPolicy)>>(iter: T) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}
