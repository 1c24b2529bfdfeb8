//! Combined-Buffer Merge and Selection
//!
//! Runs once per computation, on the coordinator only, after both collective
//! exchanges have completed. Consumes the gathered counts and per-rank prime
//! batches and produces the run's outcome.

use anyhow::{ensure, Result};
use tracing::debug;

use super::types::{CountsAndOffsets, Outcome};
use crate::primes::FIRST_PRIMES;

/// The coordinator's merge logic for one run.
///
/// Constructed only on the rank-0 path, which is what keeps the combined
/// buffer and the counts/offsets arrays owned by a single role.
pub struct Aggregator {
    n: usize,
    bound: u64,
}

impl Aggregator {
    pub fn new(n: usize, bound: u64) -> Self {
        Self { n, bound }
    }

    /// Merges the gathered batches and selects the n-th prime.
    pub fn resolve(&self, counts: &[u64], batches: Vec<Vec<u64>>) -> Result<Outcome> {
        let combined = self.merge(counts, batches)?;

        if self.n > combined.len() {
            debug!(
                n = self.n,
                bound = self.bound,
                found = combined.len(),
                "estimated bound held too few primes"
            );
            return Ok(Outcome::InsufficientBound { bound: self.bound });
        }

        Ok(Outcome::Answer(combined[self.n - 1]))
    }

    /// Assembles and sorts the combined buffer.
    ///
    /// Layout before sorting: positions 0..4 hold {2, 3, 5, 7}, and worker
    /// r's batch occupies positions `4 + offset[r] ..`. Batches arrive in
    /// rank order, so sequential extension lands each one exactly at its
    /// offset; the debug assertion pins that placement down. Each batch
    /// length is validated against the count its rank reported earlier.
    fn merge(&self, counts: &[u64], batches: Vec<Vec<u64>>) -> Result<Vec<u64>> {
        ensure!(
            counts.len() == batches.len(),
            "gathered {} counts but {} prime batches",
            counts.len(),
            batches.len()
        );

        let placement = CountsAndOffsets::from_counts(counts);

        let mut combined: Vec<u64> = Vec::new();
        combined
            .try_reserve_exact(placement.total() + FIRST_PRIMES.len())
            .map_err(|e| anyhow::anyhow!("combined prime buffer allocation failed: {}", e))?;

        combined.extend_from_slice(&FIRST_PRIMES);

        for (rank, batch) in batches.into_iter().enumerate() {
            ensure!(
                batch.len() == placement.count(rank),
                "worker {} reported {} primes but sent {}",
                rank,
                placement.count(rank),
                batch.len()
            );
            debug_assert_eq!(combined.len(), FIRST_PRIMES.len() + placement.offset(rank));
            combined.extend_from_slice(&batch);
        }

        combined.sort_unstable();

        debug!(
            total = combined.len(),
            bound = self.bound,
            "combined buffer merged and sorted"
        );

        Ok(combined)
    }
}

#[cfg(test)]
impl Aggregator {
    /// Test-only access to the merged buffer, for invariant checks.
    pub fn merge_for_test(&self, counts: &[u64], batches: Vec<Vec<u64>>) -> Result<Vec<u64>> {
        self.merge(counts, batches)
    }
}
