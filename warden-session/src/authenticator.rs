//! The identity-verification capability.

use std::{rc::Rc, sync::Arc};

/// A backend able to verify a username/password pair.
///
/// Implementations answer a single yes/no question per call. A session never
/// inspects why a call failed, so backends must not panic on odd input such
/// as empty strings; they should simply return `false`.
///
/// The trait has no `Send`/`Sync` bound. A backend that is safe to share
/// across threads should say so on its own type, and sessions built over it
/// inherit that.
pub trait Authenticator {
    /// Returns `true` if the credentials were accepted.
    fn authenticate(&self, username: &str, password: &str) -> bool;
}

impl<A: Authenticator + ?Sized> Authenticator for &A {
    fn authenticate(&self, username: &str, password: &str) -> bool {
        (**self).authenticate(username, password)
    }
}

impl<A: Authenticator + ?Sized> Authenticator for Box<A> {
    fn authenticate(&self, username: &str, password: &str) -> bool {
        (**self).authenticate(username, password)
    }
}

impl<A: Authenticator + ?Sized> Authenticator for Rc<A> {
    fn authenticate(&self, username: &str, password: &str) -> bool {
        (**self).authenticate(username, password)
    }
}

impl<A: Authenticator + ?Sized> Authenticator for Arc<A> {
    fn authenticate(&self, username: &str, password: &str) -> bool {
        (**self).authenticate(username, password)
    }
}
