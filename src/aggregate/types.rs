//! Aggregation Data Types
//!
//! The coordinator-only bookkeeping structures: placement offsets derived from
//! gathered counts, and the final outcome of a run.

use serde::{Deserialize, Serialize};

/// Per-worker counts and the cumulative prefix offsets derived from them.
///
/// `offsets[0] == 0` and `offsets[i] == offsets[i-1] + counts[i-1]`, so
/// worker r's primes occupy `[offsets[r], offsets[r] + counts[r])` within the
/// local portion of the combined buffer.
#[derive(Debug, Clone)]
pub struct CountsAndOffsets {
    counts: Vec<usize>,
    offsets: Vec<usize>,
    total: usize,
}

impl CountsAndOffsets {
    /// Builds offsets from counts gathered in rank order.
    pub fn from_counts(counts: &[u64]) -> Self {
        let counts: Vec<usize> = counts.iter().map(|&c| c as usize).collect();

        let mut offsets = Vec::with_capacity(counts.len());
        let mut running = 0usize;
        for &count in &counts {
            offsets.push(running);
            running += count;
        }

        Self {
            counts,
            offsets,
            total: running,
        }
    }

    /// Number of workers the counts were gathered from.
    pub fn worker_count(&self) -> usize {
        self.counts.len()
    }

    /// Count reported by `rank`.
    pub fn count(&self, rank: usize) -> usize {
        self.counts[rank]
    }

    /// Placement offset of `rank` within the local portion of the buffer.
    pub fn offset(&self, rank: usize) -> usize {
        self.offsets[rank]
    }

    /// Total number of locally found primes across all workers.
    pub fn total(&self) -> usize {
        self.total
    }
}

/// Final result of a run, determined by the coordinator alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The n-th prime was found within the estimated bound.
    Answer(u64),
    /// The estimated bound contained fewer than n primes. Deliberately not
    /// retried with a larger bound; the run terminates normally with a
    /// diagnostic naming the attempted bound.
    InsufficientBound { bound: u64 },
}
