use std::sync::atomic::{AtomicU64, Ordering};

use warden_session::Authenticator;

/// Wraps a backend and counts the calls made to it.
///
/// Sessions never report how many attempts `authenticate` took; wrapping the
/// backend is how a caller observes it.
#[derive(Debug, Default)]
pub struct Counting<A> {
    inner: A,
    calls: AtomicU64,
    accepted: AtomicU64,
}

impl<A> Counting<A> {
    /// Wrap `inner` with zeroed counters.
    #[must_use]
    pub const fn new(inner: A) -> Self {
        Self {
            inner,
            calls: AtomicU64::new(0),
            accepted: AtomicU64::new(0),
        }
    }

    /// Total number of calls forwarded to the inner backend.
    #[must_use]
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    /// Number of those calls the inner backend accepted.
    #[must_use]
    pub fn accepted(&self) -> u64 {
        self.accepted.load(Ordering::Relaxed)
    }

    /// Zero both counters.
    pub fn reset(&self) {
        self.calls.store(0, Ordering::Relaxed);
        self.accepted.store(0, Ordering::Relaxed);
    }

    /// The wrapped backend.
    #[must_use]
    pub const fn inner(&self) -> &A {
        &self.inner
    }
}

impl<A: Authenticator> Authenticator for Counting<A> {
    fn authenticate(&self, username: &str, password: &str) -> bool {
        self.calls.fetch_add(1, Ordering::Relaxed);

        let accepted = self.inner.authenticate(username, password);
        if accepted {
            self.accepted.fetch_add(1, Ordering::Relaxed);
        }

        accepted
    }
}
