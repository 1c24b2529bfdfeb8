//! Worker Module Tests
//!
//! Validates the partition invariant and the local scan mechanics.
//!
//! ## Test Scopes
//! - **Partitioner**: Completeness and disjointness of the per-rank
//!   progressions over the full candidate range, for a spread of group sizes.
//! - **Scan**: The accumulated list matches an independent sieve, stays
//!   strictly increasing, and degenerates gracefully for empty slices.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::primes::oracle::is_prime;
    use crate::worker::partition::{WorkerAssignment, SEARCH_START};
    use crate::worker::scan::scan_assignment;

    // ============================================================
    // PARTITIONER TESTS
    // ============================================================

    #[test]
    fn test_partition_covers_every_odd_candidate_exactly_once() {
        let bound = 501u64;
        let expected: HashSet<u64> = (SEARCH_START..=bound).step_by(2).collect();

        for world_size in [1usize, 2, 3, 4, 7, 16] {
            let mut seen: HashSet<u64> = HashSet::new();
            let mut visited = 0usize;

            for rank in 0..world_size {
                let assignment = WorkerAssignment::for_rank(rank, world_size);
                for candidate in assignment.candidates(bound) {
                    assert!(
                        seen.insert(candidate),
                        "candidate {} visited by two workers (W={})",
                        candidate,
                        world_size
                    );
                    visited += 1;
                }
            }

            assert_eq!(
                seen, expected,
                "union of slices must equal the odd integers in range (W={})",
                world_size
            );
            assert_eq!(visited, expected.len());
        }
    }

    #[test]
    fn test_partition_slices_are_pairwise_disjoint() {
        let bound = 1_000u64;
        let world_size = 5;

        let slices: Vec<HashSet<u64>> = (0..world_size)
            .map(|rank| {
                WorkerAssignment::for_rank(rank, world_size)
                    .candidates(bound)
                    .collect()
            })
            .collect();

        for a in 0..world_size {
            for b in (a + 1)..world_size {
                assert!(
                    slices[a].is_disjoint(&slices[b]),
                    "slices of ranks {} and {} overlap",
                    a,
                    b
                );
            }
        }
    }

    // ============================================================
    // SCAN TESTS
    // ============================================================

    #[test]
    fn test_scan_matches_oracle_filter() {
        let bound = 500u64;
        let assignment = WorkerAssignment::for_rank(1, 3);

        let found = scan_assignment(&assignment, bound).unwrap();
        let expected: Vec<u64> = assignment
            .candidates(bound)
            .filter(|&c| is_prime(c))
            .collect();

        assert_eq!(found, expected);
    }

    #[test]
    fn test_scan_result_is_strictly_increasing() {
        let assignment = WorkerAssignment::for_rank(0, 2);
        let found = scan_assignment(&assignment, 2_000).unwrap();

        assert!(!found.is_empty());
        assert!(
            found.windows(2).all(|pair| pair[0] < pair[1]),
            "local list must be strictly increasing"
        );
    }

    #[test]
    fn test_scan_empty_slice_yields_empty_list() {
        // With 64 workers and a tiny bound, high ranks start past the bound.
        let assignment = WorkerAssignment::for_rank(60, 64);
        let found = scan_assignment(&assignment, 12).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_scan_union_across_ranks_finds_all_primes_in_range() {
        let bound = 300u64;
        let world_size = 4;

        let mut union: Vec<u64> = Vec::new();
        for rank in 0..world_size {
            let assignment = WorkerAssignment::for_rank(rank, world_size);
            union.extend(scan_assignment(&assignment, bound).unwrap());
        }
        union.sort_unstable();

        let expected: Vec<u64> = (SEARCH_START..=bound).filter(|&k| is_prime(k)).collect();
        assert_eq!(union, expected);
    }
}
