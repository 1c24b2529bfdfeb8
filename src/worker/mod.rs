//! Worker-Side Scanning Module
//!
//! Everything a single worker does on its own, with no communication:
//! deriving its slice of the candidate range and accumulating the primes it
//! finds there.
//!
//! ## Core Concepts
//! - **Partitioning**: each worker owns the arithmetic progression
//!   `start = 11 + 2r`, `stride = 2W`. Together the W progressions cover every
//!   odd integer >= 11 exactly once, which is what makes lock-free parallel
//!   scanning correct.
//! - **Accumulation**: primes are appended to a growable local buffer whose
//!   final size is unknown in advance. Growth failure is fatal for the whole
//!   run; results are never silently truncated.

pub mod partition;
pub mod scan;

#[cfg(test)]
mod tests;
