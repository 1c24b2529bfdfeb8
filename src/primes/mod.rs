//! Number-Theoretic Primitives
//!
//! The pure leaves of the system: deciding primality and estimating how far the
//! search has to go to contain the n-th prime.
//!
//! ## Core Concepts
//! - **Oracle**: stateless trial-division primality test, used by every worker
//!   on every candidate in its slice.
//! - **Bounds**: the asymptotic prime-counting approximation with a safety
//!   multiplier. It is a heuristic over-estimate, not a guarantee; the rest of
//!   the system reports insufficiency when it falls short.

pub mod bounds;
pub mod oracle;

/// The four primes below the distributed search floor.
///
/// Ranks 1..=4 are answered from this table directly, and the coordinator
/// prepends it to every combined buffer so the merged list starts at 2.
pub const FIRST_PRIMES: [u64; 4] = [2, 3, 5, 7];
