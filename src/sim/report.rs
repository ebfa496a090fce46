//! A single simulation run and its report.

use std::fmt;

use tracing::info;

use crate::cache::{AccessOutcome, FifoPageCache, StatsSnapshot};
use crate::common::PageId;

/// Everything observed while replaying one batch of requests.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub capacity: usize,
    /// Requests in the order they were replayed.
    pub requests: Vec<PageId>,
    /// One outcome per request, same order as `requests`.
    pub outcomes: Vec<AccessOutcome>,
    /// Resident pages after the last request, oldest first.
    pub final_state: Vec<PageId>,
    pub stats: StatsSnapshot,
}

impl SimulationReport {
    /// Requests paired with their outcomes.
    pub fn iter(&self) -> impl Iterator<Item = (PageId, AccessOutcome)> + '_ {
        self.requests
            .iter()
            .copied()
            .zip(self.outcomes.iter().copied())
    }
}

/// Replay `requests` against `cache` and report what happened.
///
/// The cache is reset before and after the run, so every batch starts
/// from an empty resident set.
pub fn run_batch(cache: &mut FifoPageCache, requests: &[PageId]) -> SimulationReport {
    if !cache.is_empty() {
        cache.reset();
    }

    let outcomes = requests.iter().map(|&page| cache.access(page)).collect();
    let report = SimulationReport {
        capacity: cache.capacity(),
        requests: requests.to_vec(),
        outcomes,
        final_state: cache.current_state(),
        stats: cache.stats_snapshot(),
    };
    info!(
        requests = report.requests.len(),
        hits = report.stats.hits,
        evictions = report.stats.evictions,
        "batch complete"
    );

    cache.reset();
    report
}

/// Writes pages the way a list literal reads: `[1, 2, 3]`.
struct PageList<'a>(&'a [PageId]);

impl fmt::Display for PageList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, page) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", page)?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Requested pages are the following: {}",
            PageList(&self.requests)
        )?;
        writeln!(f, "Starting cache is []")?;
        for outcome in &self.outcomes {
            writeln!(f, "{}", outcome)?;
        }
        write!(f, "Current cache state: {}", PageList(&self.final_state))
    }
}
