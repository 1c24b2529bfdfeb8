//! Search Bound Estimation
//!
//! Derives an inclusive upper limit for the candidate range from the requested
//! rank n, using the asymptotic approximation `p_n ~ n (ln n + ln ln n)` padded
//! by a safety multiplier. The estimate is heuristic: when it falls short the
//! aggregator reports insufficiency instead of retrying with a larger bound.

/// Safety multiplier applied on top of the asymptotic estimate.
pub const DEFAULT_MULTIPLIER: f64 = 1.2;

/// The smallest bound ever handed to the workers.
///
/// The distributed scan starts at 11 (the first prime past the hardcoded
/// {2, 3, 5, 7}), so a bound below that would leave every slice empty.
pub const MIN_BOUND: u64 = 11;

/// Estimates an inclusive upper bound for the n-th prime.
///
/// Only meaningful for `n >= 5`; smaller ranks are answered from
/// [`crate::primes::FIRST_PRIMES`] before the estimator is ever reached.
pub fn estimate_bound(n: usize) -> u64 {
    estimate_bound_with(n, DEFAULT_MULTIPLIER)
}

/// Estimator with an explicit multiplier.
///
/// The distributed run always uses [`DEFAULT_MULTIPLIER`]; tests shrink the
/// multiplier to force the under-estimation path without needing a huge n.
/// The float result is truncated (not rounded) and clamped to [`MIN_BOUND`].
pub fn estimate_bound_with(n: usize, multiplier: f64) -> u64 {
    debug_assert!(n >= 5, "ranks below 5 never reach the estimator");

    let x = n as f64;
    let estimate = x * (x.ln() + x.ln().ln()) * multiplier;

    (estimate as u64).max(MIN_BOUND)
}
