//! Page cache simulation.
//!
//! # Components
//! - [`FifoPageCache`] - Bounded resident set with first-in-first-out eviction
//! - [`SharedFifoCache`] - Mutex-guarded wrapper for sharing one cache across threads
//! - [`StatsSnapshot`] - Hit/miss/eviction counts

mod fifo;
mod shared;
mod stats;

pub use fifo::{AccessOutcome, FifoPageCache};
pub use shared::SharedFifoCache;
pub(crate) use stats::CacheStats;
pub use stats::StatsSnapshot;
