//! Distributed n-th Prime Finder Library
//!
//! This library crate defines the core modules that make up the distributed
//! computation. It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of four loosely coupled subsystems:
//!
//! - **`primes`**: The pure number-theoretic leaves. Contains the trial-division
//!   primality oracle and the asymptotic range estimator that derives an upper
//!   search bound for the n-th prime.
//! - **`worker`**: The per-worker scanning logic. Each worker derives its own
//!   disjoint arithmetic-progression slice of the candidate range and accumulates
//!   the primes it finds in a growable local buffer.
//! - **`group`**: The process-group runtime. Spawns a fixed set of symmetric
//!   workers, gives each a stable 0-indexed rank, and provides the two blocking
//!   collective exchanges (count gather, variable-length value gather) that
//!   synchronize the run.
//! - **`aggregate`**: The coordinator-only merge logic. Computes placement
//!   offsets from gathered counts, assembles the combined buffer prefixed with
//!   the four trivial primes, sorts it, and selects the n-th element (or reports
//!   that the estimated bound was insufficient).

pub mod aggregate;
pub mod group;
pub mod primes;
pub mod worker;
