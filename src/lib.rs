//! pagesim - A FIFO page-cache simulator, with passport and word-count companions.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Simulation Driver (sim/)                    │   │
//! │  │   tokens → collect_batch → run_batch → SimulationReport  │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Page Cache (cache/)                         │   │
//! │  │   FifoPageCache + SharedFifoCache + StatsSnapshot        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  Companions:  passport (visit stamps)   wordcount (frequency)  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Error, config)
//! - [`cache`] - The FIFO page cache and its statistics
//! - [`sim`] - Batch collection, replay and reporting
//! - [`passport`] - Passport holder data with visit-stamp counters
//! - [`wordcount`] - Dictionary word counting over text
//!
//! # Quick Start
//! ```
//! use pagesim::{AccessOutcome, FifoPageCache, PageId};
//!
//! let mut cache = FifoPageCache::new(8).unwrap();
//! for id in 1..=9 {
//!     assert_eq!(cache.access(PageId::new(id)), AccessOutcome::Miss);
//! }
//! // Page 1 was evicted to make room for page 9
//! assert!(!cache.contains(PageId::new(1)));
//! ```

pub mod cache;
pub mod common;
pub mod passport;
pub mod sim;
pub mod wordcount;

// Re-export commonly used items at crate root for convenience
pub use common::config::DEFAULT_CAPACITY;
pub use common::{Error, PageId, Result};

pub use cache::{AccessOutcome, FifoPageCache, SharedFifoCache, StatsSnapshot};
pub use sim::{run_batch, SimulationReport, Simulator};
