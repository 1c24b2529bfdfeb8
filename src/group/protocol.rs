//! Collective Exchange Message Definitions
//!
//! The Data Transfer Objects carried by the two all-to-one exchanges. Every
//! worker sends one `CountReport` and one `PrimeBatch` per run; only the
//! coordinator reads them.

use serde::{Deserialize, Serialize};

/// Fixed-size message of the first exchange: how many primes a worker found
/// in its slice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountReport {
    pub rank: usize,
    pub primes_found: u64,
}

/// Variable-length message of the second exchange: the primes themselves, in
/// the order the worker visited them (strictly increasing within a rank).
///
/// The batch length must match the count the same rank reported in the first
/// exchange; the aggregator rejects the run otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrimeBatch {
    pub rank: usize,
    pub primes: Vec<u64>,
}
