//! Aggregate Module Tests
//!
//! Validates the coordinator-only placement and merge logic in isolation,
//! with hand-built batches standing in for gathered worker results.
//!
//! ## Test Scopes
//! - **CountsAndOffsets**: The prefix-offset invariant.
//! - **Merge**: Prefixing, placement, sort-as-permutation, and the
//!   count/batch consistency check.
//! - **Selection**: Answer extraction and the insufficiency path.

#[cfg(test)]
mod tests {
    use crate::aggregate::aggregator::Aggregator;
    use crate::aggregate::types::{CountsAndOffsets, Outcome};

    // ============================================================
    // COUNTS AND OFFSETS
    // ============================================================

    #[test]
    fn test_offsets_are_prefix_sums_of_counts() {
        let placement = CountsAndOffsets::from_counts(&[3, 0, 5, 2]);

        assert_eq!(placement.worker_count(), 4);
        assert_eq!(placement.offset(0), 0);
        assert_eq!(placement.offset(1), 3);
        assert_eq!(placement.offset(2), 3);
        assert_eq!(placement.offset(3), 8);
        assert_eq!(placement.total(), 10);
    }

    #[test]
    fn test_offsets_for_empty_group_portion() {
        let placement = CountsAndOffsets::from_counts(&[0, 0]);
        assert_eq!(placement.total(), 0);
        assert_eq!(placement.offset(1), 0);
    }

    // ============================================================
    // MERGE
    // ============================================================

    #[test]
    fn test_merge_prefixes_first_primes_and_sorts() {
        // Batches interleave across ranks, exactly as stride partitioning
        // produces them.
        let batches = vec![vec![11, 17, 23], vec![13, 19], vec![]];
        let counts = [3u64, 2, 0];

        let aggregator = Aggregator::new(5, 23);
        let combined = aggregator.merge_for_test(&counts, batches).unwrap();

        assert_eq!(combined, vec![2, 3, 5, 7, 11, 13, 17, 19, 23]);
    }

    #[test]
    fn test_merge_is_a_permutation_of_its_inputs() {
        let batches = vec![vec![29, 11], vec![13, 41, 19]];
        let counts = [2u64, 3];

        let mut expected: Vec<u64> = vec![2, 3, 5, 7];
        for batch in &batches {
            expected.extend(batch);
        }
        expected.sort_unstable();

        let aggregator = Aggregator::new(1, 41);
        let combined = aggregator.merge_for_test(&counts, batches).unwrap();

        assert_eq!(combined.len(), 4 + 5);
        assert_eq!(combined, expected);
        assert!(combined.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_merge_rejects_count_batch_mismatch() {
        let aggregator = Aggregator::new(5, 100);

        let result = aggregator.merge_for_test(&[2], vec![vec![11]]);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("reported 2 primes but sent 1"));
    }

    #[test]
    fn test_merge_rejects_missing_batches() {
        let aggregator = Aggregator::new(5, 100);

        let result = aggregator.merge_for_test(&[1, 1], vec![vec![11]]);
        assert!(result.is_err());
    }

    // ============================================================
    // SELECTION
    // ============================================================

    #[test]
    fn test_resolve_selects_one_indexed_answer() {
        let aggregator = Aggregator::new(5, 12);
        let outcome = aggregator.resolve(&[1], vec![vec![11]]).unwrap();
        assert_eq!(outcome, Outcome::Answer(11));
    }

    #[test]
    fn test_resolve_reports_insufficient_bound() {
        // 4 prefix primes + 1 local prime = 5 total, but rank 10 is wanted.
        let aggregator = Aggregator::new(10, 12);
        let outcome = aggregator.resolve(&[1], vec![vec![11]]).unwrap();
        assert_eq!(outcome, Outcome::InsufficientBound { bound: 12 });
    }

    #[test]
    fn test_resolve_boundary_exactly_enough_primes() {
        let aggregator = Aggregator::new(6, 13);
        let outcome = aggregator.resolve(&[2], vec![vec![11, 13]]).unwrap();
        assert_eq!(outcome, Outcome::Answer(13));
    }
}
