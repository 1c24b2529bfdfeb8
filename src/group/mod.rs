//! Process-Group Runtime Module
//!
//! Implements the symmetric worker group and the synchronization primitives
//! that hold a run together.
//!
//! ## Architecture Overview
//! The runtime follows a **single synchronous round** model:
//! 1. **Launch**: `ProcessGroup` spawns W identical worker tasks, each with a
//!    stable 0-indexed rank known before any work begins. Rank 0 is the
//!    coordinator.
//! 2. **Scan**: every worker independently estimates the bound, derives its
//!    slice, and accumulates local primes with no shared state.
//! 3. **Collectives**: two blocking all-to-one exchanges follow — a
//!    fixed-size count gather, then a variable-length value gather sized by
//!    the now-known counts. Each is a full barrier: no participant proceeds
//!    until all have arrived.
//! 4. **Finalize**: only the coordinator merges, sorts, selects, and reports.
//!
//! ## Submodules
//! - **`types`**: rank, run identity, and run configuration/report types.
//! - **`protocol`**: the message DTOs carried by the collective exchanges.
//! - **`comm`**: the barrier-synchronized gather primitives.
//! - **`runtime`**: group launch, the worker body, and the public entry point.

pub mod comm;
pub mod protocol;
pub mod runtime;
pub mod types;

pub use runtime::{find_nth_prime, ProcessGroup};
