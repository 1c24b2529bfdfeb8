//! Group Launch and the Worker Body
//!
//! Spawns the fixed set of symmetric workers, runs the single synchronous
//! round (scan, count gather, value gather, coordinator merge), and surfaces
//! the coordinator's report.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{anyhow, ensure, Result};
use tracing::{debug, info};

use super::comm::Collective;
use super::protocol::{CountReport, PrimeBatch};
use super::types::{RunId, RunReport, RunSpec, WorkerRank};
use crate::aggregate::aggregator::Aggregator;
use crate::aggregate::types::Outcome;
use crate::primes::{bounds, FIRST_PRIMES};
use crate::worker::partition::WorkerAssignment;
use crate::worker::scan::scan_assignment;

/// A fixed-size group of symmetric workers.
///
/// The size is decided at construction and never changes; ranks 0..W are
/// assigned at spawn time, and rank 0 is the coordinator.
pub struct ProcessGroup {
    world_size: usize,
}

impl ProcessGroup {
    pub fn new(world_size: usize) -> Result<Self> {
        ensure!(world_size >= 1, "a group needs at least one worker");
        Ok(Self { world_size })
    }

    pub fn world_size(&self) -> usize {
        self.world_size
    }

    /// Runs one distributed computation and returns the coordinator's report.
    ///
    /// Every worker executes the same body; only rank 0 produces a report.
    /// A failure in any worker (allocation exhaustion, protocol violation,
    /// panic) fails the whole run — partial results are never used.
    pub async fn run(&self, spec: RunSpec) -> Result<RunReport> {
        ensure!(
            spec.n >= 5,
            "ranks 1..=4 are answered directly and never reach the group"
        );

        let run_id = RunId::new();
        info!(
            run_id = %run_id,
            n = spec.n,
            world_size = self.world_size,
            "launching process group"
        );

        let comm = Collective::new(self.world_size);

        let mut handles = Vec::with_capacity(self.world_size);
        for rank in 0..self.world_size {
            let comm = Arc::clone(&comm);
            let spec = spec.clone();
            let world_size = self.world_size;
            handles.push(tokio::spawn(async move {
                worker_main(WorkerRank(rank), world_size, spec, comm).await
            }));
        }

        let mut report = None;
        for (rank, handle) in handles.into_iter().enumerate() {
            let worker_result = handle
                .await
                .map_err(|e| anyhow!("worker {} aborted: {}", rank, e))??;
            if let Some(coordinator_report) = worker_result {
                report = Some(coordinator_report);
            }
        }

        report.ok_or_else(|| anyhow!("coordinator finished without producing a report"))
    }
}

/// The body every worker runs.
///
/// Symmetric up to the two gathers; after those, only the coordinator merges
/// and selects. The timer starts just before bound estimation and stops once
/// the outcome is determined, on the coordinator only.
async fn worker_main(
    rank: WorkerRank,
    world_size: usize,
    spec: RunSpec,
    comm: Arc<Collective>,
) -> Result<Option<RunReport>> {
    let started = Instant::now();

    let bound = bounds::estimate_bound_with(spec.n, spec.bound_multiplier);
    let assignment = WorkerAssignment::for_rank(rank.0, world_size);

    let local = scan_assignment(&assignment, bound)?;
    debug!(
        rank = rank.0,
        bound,
        start = assignment.start,
        stride = assignment.stride,
        found = local.len(),
        "local scan complete"
    );

    let counts = comm
        .gather_counts(CountReport {
            rank: rank.0,
            primes_found: local.len() as u64,
        })
        .await?;

    let batches = comm
        .gather_batches(PrimeBatch {
            rank: rank.0,
            primes: local,
        })
        .await?;

    if !rank.is_coordinator() {
        return Ok(None);
    }

    let counts = counts.ok_or_else(|| anyhow!("coordinator received no gathered counts"))?;
    let batches = batches.ok_or_else(|| anyhow!("coordinator received no gathered batches"))?;

    let aggregator = Aggregator::new(spec.n, bound);
    let outcome = aggregator.resolve(&counts, batches)?;
    let elapsed = started.elapsed();

    info!(n = spec.n, bound, ?outcome, "run resolved");

    Ok(Some(RunReport {
        n: spec.n,
        outcome,
        elapsed,
    }))
}

/// Public entry point: answers rank `n` with a group of `world_size` workers.
///
/// Ranks 1..=4 bypass the distributed core entirely and are answered from the
/// hardcoded table by the caller's task alone, with a zero elapsed duration.
pub async fn find_nth_prime(spec: RunSpec, world_size: usize) -> Result<RunReport> {
    ensure!(spec.n >= 1, "n must be a positive integer");

    if spec.n <= FIRST_PRIMES.len() {
        return Ok(RunReport {
            n: spec.n,
            outcome: Outcome::Answer(FIRST_PRIMES[spec.n - 1]),
            elapsed: Duration::ZERO,
        });
    }

    ProcessGroup::new(world_size)?.run(spec).await
}
