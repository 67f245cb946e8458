//! Retry policy for authentication attempts.
//!
//! A policy is nothing more than an attempt budget. It carries no delay or
//! backoff: attempts made under it are issued back to back.

use serde::{Deserialize, Serialize};

/// Maximum number of verification attempts permitted for a domain.
///
/// The value is fixed at construction. `max_attempts` is signed so that any
/// value a caller stores round-trips as data, but zero and negative budgets
/// behave identically: no attempt is ever made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Maximum number of calls made to the identity backend.
    ///
    /// Default: 1 attempt
    #[serde(default = "defaults::max_attempts")]
    max_attempts: i32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: defaults::max_attempts(),
        }
    }
}

impl RetryPolicy {
    /// Create a policy allowing `max_attempts` backend calls.
    #[must_use]
    pub const fn new(max_attempts: i32) -> Self {
        Self { max_attempts }
    }

    /// The configured attempt budget, exactly as stored.
    #[must_use]
    pub const fn max_attempts(&self) -> i32 {
        self.max_attempts
    }

    /// Check if another attempt may be made after `attempts_made` attempts.
    ///
    /// Returns `true` if `attempts_made` is less than `max_attempts`.
    #[must_use]
    #[allow(clippy::cast_lossless)]
    pub const fn should_attempt(&self, attempts_made: u32) -> bool {
        (attempts_made as i64) < self.max_attempts as i64
    }

    /// Get the number of attempts left after `attempts_made` attempts.
    ///
    /// Returns `0` once the budget is spent, and always for non-positive budgets.
    #[must_use]
    pub fn remaining_attempts(&self, attempts_made: u32) -> u32 {
        u32::try_from(self.max_attempts)
            .unwrap_or(0)
            .saturating_sub(attempts_made)
    }

    /// Check if the attempt following `attempts_made` would be the last one
    /// the budget allows (or the budget is already spent).
    #[must_use]
    #[allow(clippy::cast_lossless)]
    pub const fn is_final_attempt(&self, attempts_made: u32) -> bool {
        attempts_made as i64 + 1 >= self.max_attempts as i64
    }

    /// Probability that a session under this policy authenticates, given a
    /// backend that succeeds independently with probability `per_attempt`.
    ///
    /// Computed as `1 - (1 - p)^N`. `p` is clamped to `[0, 1]` and NaN counts
    /// as `0`.
    #[must_use]
    pub fn success_probability(&self, per_attempt: f64) -> f64 {
        if per_attempt.is_nan() {
            return 0.0;
        }

        let p = per_attempt.clamp(0.0, 1.0);
        1.0 - (1.0 - p).powi(self.max_attempts.max(0))
    }
}

mod defaults {
    pub const fn max_attempts() -> i32 {
        1
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_retry_policy_default() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts(), 1);
        assert_eq!(policy, RetryPolicy::new(1));
    }

    #[test]
    fn test_should_attempt() {
        let policy = RetryPolicy::new(3);

        assert!(policy.should_attempt(0));
        assert!(policy.should_attempt(2));
        assert!(!policy.should_attempt(3));
        assert!(!policy.should_attempt(100));
    }

    #[test]
    fn test_budget_extremes_do_not_overflow() {
        let widest = RetryPolicy::new(i32::MAX);
        assert!(widest.should_attempt(2_147_483_646));
        assert!(!widest.should_attempt(2_147_483_647));
        assert!(!widest.is_final_attempt(0));
        assert!(widest.is_final_attempt(u32::MAX));

        let narrowest = RetryPolicy::new(i32::MIN);
        assert!(!narrowest.should_attempt(0));
        assert!(narrowest.is_final_attempt(0));
    }

    #[test]
    fn test_non_positive_budget_never_attempts() {
        for max in [0, -1, i32::MIN] {
            let policy = RetryPolicy::new(max);
            assert!(!policy.should_attempt(0), "max_attempts = {max}");
            assert_eq!(policy.remaining_attempts(0), 0);
        }
    }

    #[test]
    fn test_remaining_attempts() {
        let policy = RetryPolicy::new(10);

        assert_eq!(policy.remaining_attempts(0), 10);
        assert_eq!(policy.remaining_attempts(4), 6);
        assert_eq!(policy.remaining_attempts(10), 0);
        assert_eq!(policy.remaining_attempts(15), 0); // Saturating
    }

    #[test]
    fn test_is_final_attempt() {
        let policy = RetryPolicy::new(2);

        assert!(!policy.is_final_attempt(0));
        assert!(policy.is_final_attempt(1));
        assert!(policy.is_final_attempt(2));
        assert!(RetryPolicy::new(0).is_final_attempt(0));
    }

    #[test]
    fn test_success_probability() {
        let policy = RetryPolicy::new(10);
        let expected = 1.0 - 0.5_f64.powi(10);
        assert!((policy.success_probability(0.5) - expected).abs() < f64::EPSILON);

        assert!((RetryPolicy::new(1).success_probability(0.3) - 0.3).abs() < 1e-12);
        assert!(RetryPolicy::new(0).success_probability(1.0).abs() < f64::EPSILON);
        assert!(RetryPolicy::new(-4).success_probability(0.9).abs() < f64::EPSILON);
        assert!(policy.success_probability(0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_success_probability_clamps_input() {
        let policy = RetryPolicy::new(3);
        assert!((policy.success_probability(7.0) - 1.0).abs() < f64::EPSILON);
        assert!(policy.success_probability(-0.5).abs() < f64::EPSILON);
        assert!(policy.success_probability(f64::NAN).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deserialize_defaults_missing_field() {
        let policy: RetryPolicy = ron::from_str("()").unwrap();
        assert_eq!(policy, RetryPolicy::default());

        let policy: RetryPolicy = ron::from_str("(max_attempts: -3)").unwrap();
        assert_eq!(policy.max_attempts(), -3);
    }
}
