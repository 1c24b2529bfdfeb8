//! Candidate Range Partitioner
//!
//! Deterministically assigns each worker a disjoint arithmetic-progression
//! subsequence of the odd candidates. The assignment is a pure function of
//! (rank, world size), so every worker computes its own slice independently
//! with no communication.

/// First candidate of the distributed scan: the smallest prime past the
/// hardcoded {2, 3, 5, 7}.
pub const SEARCH_START: u64 = 11;

/// One worker's slice of the candidate range.
///
/// Worker r of W owns `start = 11 + 2r` and `stride = 2W`. The stride skips
/// even numbers entirely, and across ranks the progressions partition all odd
/// integers >= 11: no candidate is tested twice, none is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerAssignment {
    pub start: u64,
    pub stride: u64,
}

impl WorkerAssignment {
    /// Computes the assignment for `rank` in a group of `world_size` workers.
    pub fn for_rank(rank: usize, world_size: usize) -> Self {
        debug_assert!(world_size >= 1);
        debug_assert!(rank < world_size);

        Self {
            start: SEARCH_START + 2 * rank as u64,
            stride: 2 * world_size as u64,
        }
    }

    /// Iterates this worker's candidates up to `bound` inclusive, in
    /// increasing order. Empty when `start > bound`.
    pub fn candidates(&self, bound: u64) -> impl Iterator<Item = u64> + '_ {
        (self.start..=bound).step_by(self.stride as usize)
    }
}
