//! Backends with a fixed answer.

use warden_session::Authenticator;

/// Accepts every credential pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlwaysAccept;

impl Authenticator for AlwaysAccept {
    fn authenticate(&self, _username: &str, _password: &str) -> bool {
        true
    }
}

/// Rejects every credential pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlwaysReject;

impl Authenticator for AlwaysReject {
    fn authenticate(&self, _username: &str, _password: &str) -> bool {
        false
    }
}
