//! Local Prime Accumulation
//!
//! The per-worker scan loop: walk the assigned progression, query the oracle,
//! and append hits to a growable buffer. This is the only work a worker does
//! during the parallel phase, and it touches no shared state.

use anyhow::{anyhow, Result};

use crate::primes::oracle;
use crate::worker::partition::WorkerAssignment;

/// The primes one worker found in its slice, in the order they were visited.
///
/// Candidates are visited in increasing order within a progression, so the
/// list is strictly increasing. Lists from different ranks interleave; the
/// coordinator's final sort restores global order.
pub type LocalPrimeList = Vec<u64>;

/// Scans `assignment`'s candidates up to `bound` inclusive and collects the
/// primes among them.
///
/// Buffer growth goes through `try_reserve` so that allocation exhaustion
/// surfaces as an error instead of aborting the process. One worker failing
/// to grow its buffer invalidates the whole run; there is no truncated or
/// partial success mode.
pub fn scan_assignment(assignment: &WorkerAssignment, bound: u64) -> Result<LocalPrimeList> {
    let mut primes = LocalPrimeList::new();

    for candidate in assignment.candidates(bound) {
        if oracle::is_prime(candidate) {
            primes
                .try_reserve(1)
                .map_err(|e| anyhow!("local prime buffer allocation failed: {}", e))?;
            primes.push(candidate);
        }
    }

    Ok(primes)
}
