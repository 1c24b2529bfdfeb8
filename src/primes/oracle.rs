//! Trial-Division Primality Oracle
//!
//! A pure, deterministic predicate with no failure modes. Workers call it on
//! every candidate in their slice, so it stays allocation-free.

/// Decides whether `candidate` is prime.
///
/// Everything below 2 is composite by convention, 2 is the only even prime,
/// and odd candidates are tested against every odd divisor up to the integer
/// square root. `divisor * divisor <= candidate` is the overflow-safe way to
/// express `divisor <= floor(sqrt(candidate))`.
pub fn is_prime(candidate: u64) -> bool {
    if candidate < 2 {
        return false;
    }
    if candidate % 2 == 0 {
        return candidate == 2;
    }

    let mut divisor = 3;
    while divisor * divisor <= candidate {
        if candidate % divisor == 0 {
            return false;
        }
        divisor += 2;
    }

    true
}
