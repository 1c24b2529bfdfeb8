//! Blocking Collective Exchanges
//!
//! A gather-to-root primitive for a fixed group of in-process workers, built
//! from a shared barrier and per-rank mailboxes. Each exchange is a full
//! synchronization point: every participant deposits its message, then waits
//! at the barrier, and only once all have arrived does the root read the
//! mailboxes. Deposits therefore happen-before every read.
//!
//! There are no timeouts and no cancellation: if a participant never reaches
//! the barrier, the exchange blocks forever. That is the failure model of the
//! run, not a supported cancellation path.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use dashmap::DashMap;
use tokio::sync::Barrier;
use tracing::trace;

use super::protocol::{CountReport, PrimeBatch};
use super::types::COORDINATOR_RANK;

/// The shared state of one run's collective exchanges.
///
/// One `Collective` serves exactly one run: the count exchange, then the
/// value exchange, reusing the same barrier.
pub struct Collective {
    world_size: usize,
    barrier: Barrier,
    counts: DashMap<usize, CountReport>,
    batches: DashMap<usize, PrimeBatch>,
}

impl Collective {
    pub fn new(world_size: usize) -> Arc<Self> {
        Arc::new(Self {
            world_size,
            barrier: Barrier::new(world_size),
            counts: DashMap::new(),
            batches: DashMap::new(),
        })
    }

    pub fn world_size(&self) -> usize {
        self.world_size
    }

    /// First exchange: gathers every worker's local count to the root.
    ///
    /// All ranks call this exactly once. Returns the counts ordered by rank
    /// on the coordinator, `None` everywhere else.
    pub async fn gather_counts(&self, report: CountReport) -> Result<Option<Vec<u64>>> {
        let rank = report.rank;
        trace!(rank, primes_found = report.primes_found, "entering count gather");

        self.counts.insert(rank, report);
        self.barrier.wait().await;

        if rank != COORDINATOR_RANK {
            return Ok(None);
        }

        let mut ordered = Vec::with_capacity(self.world_size);
        for peer in 0..self.world_size {
            let entry = self
                .counts
                .get(&peer)
                .ok_or_else(|| anyhow!("count gather missing a report from rank {}", peer))?;
            ordered.push(entry.primes_found);
        }

        Ok(Some(ordered))
    }

    /// Second exchange: gathers every worker's prime list to the root.
    ///
    /// Variable-length counterpart of [`Self::gather_counts`]; the root
    /// receives the batches ordered by rank and takes ownership of them.
    pub async fn gather_batches(&self, batch: PrimeBatch) -> Result<Option<Vec<Vec<u64>>>> {
        let rank = batch.rank;
        trace!(rank, batch_len = batch.primes.len(), "entering value gather");

        self.batches.insert(rank, batch);
        self.barrier.wait().await;

        if rank != COORDINATOR_RANK {
            return Ok(None);
        }

        let mut ordered = Vec::with_capacity(self.world_size);
        for peer in 0..self.world_size {
            let (_, batch) = self
                .batches
                .remove(&peer)
                .ok_or_else(|| anyhow!("value gather missing a batch from rank {}", peer))?;
            ordered.push(batch.primes);
        }

        Ok(Some(ordered))
    }
}
