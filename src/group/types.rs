//! Group Identity and Run Configuration Types

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::aggregate::types::Outcome;
use crate::primes::bounds;

/// Unique identifier for one run of the group, used to tag its log lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RunId(pub String);

impl RunId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Stable 0-indexed identity of a worker within the group.
///
/// Every participant knows its own rank and the group size before any work
/// begins; the lowest rank doubles as the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkerRank(pub usize);

/// The rank that aggregates and reports.
pub const COORDINATOR_RANK: usize = 0;

impl WorkerRank {
    pub fn is_coordinator(&self) -> bool {
        self.0 == COORDINATOR_RANK
    }
}

/// Parameters of one run.
#[derive(Debug, Clone)]
pub struct RunSpec {
    /// 1-indexed rank of the wanted prime. Always >= 5 by the time a run
    /// reaches the distributed runtime.
    pub n: usize,
    /// Safety multiplier handed to the bound estimator. Tests shrink this to
    /// exercise the insufficiency path.
    pub bound_multiplier: f64,
}

impl RunSpec {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            bound_multiplier: bounds::DEFAULT_MULTIPLIER,
        }
    }

    pub fn with_multiplier(n: usize, bound_multiplier: f64) -> Self {
        Self { n, bound_multiplier }
    }
}

/// What the coordinator determined, plus how long the run took.
///
/// `elapsed` covers bound estimation through answer selection, measured on
/// the coordinator only. Fast-path answers (n <= 4) carry a zero duration
/// and are not reported with a timing line.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub n: usize,
    pub outcome: Outcome,
    pub elapsed: Duration,
}
