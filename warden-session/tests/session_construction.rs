#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::{
    Arc,
    atomic::{AtomicU32, Ordering},
};

use warden_session::{
    Authenticator, PolicyStore, RetryPolicy, UserSession, UserSessionBuilder, ValidationError,
};

/// Thread-safe counting double so sessions over it are `Send + Sync`.
#[derive(Default)]
struct Counted {
    accept: bool,
    calls: AtomicU32,
}

impl Authenticator for Counted {
    fn authenticate(&self, _username: &str, _password: &str) -> bool {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.accept
    }
}

fn tiered() -> PolicyStore {
    let mut store = PolicyStore::new();
    store.set("svc.low", RetryPolicy::new(2));
    store.set("svc.high", RetryPolicy::new(10));
    store
}

#[test]
fn test_low_trust_domain_with_failing_backend() {
    let store = tiered();
    let backend = Arc::new(Counted::default());

    let session = UserSession::builder()
        .authenticator(Arc::clone(&backend))
        .policies(&store)
        .domain("svc.low")
        .build()
        .unwrap();

    assert!(!session.authenticate("u", "p"));
    assert_eq!(backend.calls.load(Ordering::Relaxed), 2);
}

#[test]
fn test_unseeded_domain_with_succeeding_backend() {
    let store = tiered();
    let backend = Arc::new(Counted {
        accept: true,
        ..Counted::default()
    });

    let session = UserSession::builder()
        .authenticator(Arc::clone(&backend))
        .policies(&store)
        .domain("svc.unset")
        .build()
        .unwrap();

    assert!(session.authenticate("u", "p"));
    assert_eq!(backend.calls.load(Ordering::Relaxed), 1);
}

#[test]
fn test_missing_authenticator_yields_no_session() {
    let store = tiered();
    let err = UserSessionBuilder::<dyn Authenticator>::new()
        .policies(&store)
        .domain("svc.high")
        .build()
        .unwrap_err();

    assert_eq!(err, ValidationError::MissingAuthenticator);
    assert_eq!(err.to_string(), "authenticator is nil");
}

#[test]
fn test_missing_store_yields_no_session() {
    let err = UserSession::builder()
        .authenticator(Arc::new(Counted::default()))
        .domain("svc.high")
        .build()
        .unwrap_err();

    assert_eq!(err, ValidationError::MissingPolicyStore);
    assert_eq!(err.to_string(), "policy store is nil");
}

#[test]
fn test_sessions_share_one_backend() {
    let store = tiered();
    let backend: Arc<dyn Authenticator + Send + Sync> = Arc::new(Counted::default());

    let low = UserSession::new(Arc::clone(&backend), &store, "svc.low");
    let high = UserSession::new(Arc::clone(&backend), &store, "svc.high");

    assert_eq!(low.policy().max_attempts(), 2);
    assert_eq!(high.policy().max_attempts(), 10);
    assert_eq!(Arc::strong_count(&backend), 3);
}

#[test]
fn test_session_moves_across_threads_with_sync_backend() {
    let store = tiered();
    let backend = Arc::new(Counted::default());
    let session = UserSession::new(Arc::clone(&backend), &store, "svc.high");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let session = session.clone();
            std::thread::spawn(move || session.authenticate("u", "p"))
        })
        .collect();

    for handle in handles {
        assert!(!handle.join().unwrap());
    }
    assert_eq!(backend.calls.load(Ordering::Relaxed), 40);
}
