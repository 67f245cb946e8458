//! Per-domain retry policies.
//!
//! - [`RetryPolicy`]: how many verification attempts a domain allows
//! - [`PolicyStore`]: resolves a domain to its policy, falling back to
//!   [`RetryPolicy::default`] for domains it has never seen

pub mod retry;
pub mod store;

pub use retry::RetryPolicy;
pub use store::PolicyStore;
