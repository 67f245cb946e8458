//! A backend that accepts at random.
//!
//! Useful for exercising high retry budgets: with per-call probability `p`
//! and a budget of `N` attempts, a session succeeds with probability
//! `1 - (1 - p)^N` (see [`RetryPolicy::success_probability`]).
//!
//! [`RetryPolicy::success_probability`]: warden_session::RetryPolicy::success_probability

use std::fmt;

use parking_lot::Mutex;
use rand::{Rng, SeedableRng, rngs::StdRng};
use warden_session::Authenticator;

use crate::IdpError;

/// Accepts each call independently with a fixed probability.
///
/// The random source sits behind a mutex, so one instance can back sessions on
/// several threads. Calls from different threads draw from the same stream, so
/// a seeded instance is only reproducible when called from one thread.
pub struct Probabilistic {
    probability: f64,
    rng: Mutex<StdRng>,
}

impl Probabilistic {
    /// Create a backend seeded from the operating system.
    ///
    /// # Errors
    ///
    /// Returns [`IdpError::InvalidProbability`] if `probability` is NaN or
    /// outside `0.0..=1.0`.
    pub fn new(probability: f64) -> Result<Self, IdpError> {
        Self::with_rng(probability, StdRng::from_os_rng())
    }

    /// Create a backend whose answers are fully determined by `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`IdpError::InvalidProbability`] if `probability` is NaN or
    /// outside `0.0..=1.0`.
    pub fn seeded(probability: f64, seed: u64) -> Result<Self, IdpError> {
        Self::with_rng(probability, StdRng::seed_from_u64(seed))
    }

    fn with_rng(probability: f64, rng: StdRng) -> Result<Self, IdpError> {
        // NaN fails the range check as well
        if !(0.0..=1.0).contains(&probability) {
            return Err(IdpError::InvalidProbability(probability));
        }

        Ok(Self {
            probability,
            rng: Mutex::new(rng),
        })
    }

    /// Per-call probability of accepting.
    #[must_use]
    pub const fn probability(&self) -> f64 {
        self.probability
    }
}

impl Authenticator for Probabilistic {
    fn authenticate(&self, _username: &str, _password: &str) -> bool {
        self.rng.lock().random_bool(self.probability)
    }
}

impl fmt::Debug for Probabilistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Probabilistic")
            .field("probability", &self.probability)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn draws(backend: &Probabilistic, count: usize) -> Vec<bool> {
        (0..count)
            .map(|_| backend.authenticate("user1", "pass1"))
            .collect()
    }

    #[test]
    fn test_rejects_out_of_range_probability() {
        for probability in [-0.1, 1.0001, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(
                matches!(
                    Probabilistic::seeded(probability, 1),
                    Err(IdpError::InvalidProbability(p)) if p.to_bits() == probability.to_bits()
                ),
                "probability {probability} should be rejected"
            );
        }

        assert!(matches!(
            Probabilistic::new(f64::NAN),
            Err(IdpError::InvalidProbability(p)) if p.is_nan()
        ));
    }

    #[test]
    fn test_bounds_are_deterministic() {
        let never = Probabilistic::seeded(0.0, 7).map(|b| draws(&b, 200));
        let always = Probabilistic::seeded(1.0, 7).map(|b| draws(&b, 200));

        assert_eq!(never, Ok(vec![false; 200]));
        assert_eq!(always, Ok(vec![true; 200]));
    }

    #[test]
    fn test_same_seed_same_answers() {
        let first = Probabilistic::seeded(0.5, 42).map(|b| draws(&b, 256));
        let second = Probabilistic::seeded(0.5, 42).map(|b| draws(&b, 256));

        assert!(first.is_ok());
        assert_eq!(first, second);
    }

    #[test]
    fn test_acceptance_rate_tracks_probability() {
        let Ok(backend) = Probabilistic::seeded(0.3, 2024) else {
            panic!("0.3 is a valid probability");
        };

        let trials = 10_000;
        let accepted = draws(&backend, trials).into_iter().filter(|ok| *ok).count();

        #[allow(clippy::cast_precision_loss)]
        let rate = accepted as f64 / trials as f64;
        assert!((rate - 0.3).abs() < 0.05, "acceptance rate {rate}");
    }

    #[test]
    fn test_os_seeded_constructs() {
        let backend = Probabilistic::new(0.5);
        assert!(matches!(backend, Ok(ref b) if (b.probability() - 0.5).abs() < f64::EPSILON));
    }

    #[test]
    fn test_debug_hides_rng_state() {
        let Ok(backend) = Probabilistic::seeded(0.25, 1) else {
            panic!("0.25 is a valid probability");
        };
        assert_eq!(format!("{backend:?}"), "Probabilistic { probability: 0.25, .. }");
    }
}
