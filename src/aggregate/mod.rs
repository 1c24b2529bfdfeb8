//! Coordinator-Side Aggregation Module
//!
//! Implements the single-owner merge that turns per-worker prime lists into a
//! globally ordered answer.
//!
//! ## Core Concepts
//! - **Placement**: gathered counts become prefix offsets, so worker r's
//!   primes always land at a deterministic position in the combined buffer.
//! - **Merge**: the buffer is prefixed with {2, 3, 5, 7}, filled per-rank, and
//!   sorted once. Values are distinct, so sort stability is irrelevant.
//! - **Selection**: the answer is element n-1 of the sorted buffer, or an
//!   insufficiency report when the estimated bound held fewer than n primes.
//!
//! Only the coordinator ever constructs these structures; workers hold no
//! reference to them.

pub mod aggregator;
pub mod types;

#[cfg(test)]
mod tests;
