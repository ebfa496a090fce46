//! FIFO (First-In-First-Out) page cache.

use std::collections::{HashSet, VecDeque};
use std::fmt;

use tracing::{debug, info};

use crate::cache::{CacheStats, StatsSnapshot};
use crate::common::{Error, PageId, Result};

/// Result of a single page access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessOutcome {
    /// The page was already resident.
    Hit,
    /// The page had to be loaded, possibly evicting the oldest page.
    Miss,
}

impl AccessOutcome {
    /// Returns true for [`AccessOutcome::Hit`].
    #[inline]
    pub fn is_hit(self) -> bool {
        self == AccessOutcome::Hit
    }
}

impl fmt::Display for AccessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessOutcome::Hit => write!(f, "hit"),
            AccessOutcome::Miss => write!(f, "miss"),
        }
    }
}

/// A bounded page cache that evicts in arrival order.
///
/// A hit does not move a page to the back of the queue: the victim is
/// always the page that was inserted earliest, however recently it was
/// requested. This is FIFO, not LRU.
///
/// # Example
/// ```
/// use pagesim::{AccessOutcome, FifoPageCache, PageId};
///
/// let mut cache = FifoPageCache::new(2).unwrap();
/// assert_eq!(cache.access(PageId::new(1)), AccessOutcome::Miss);
/// assert_eq!(cache.access(PageId::new(1)), AccessOutcome::Hit);
/// cache.access(PageId::new(2));
/// cache.access(PageId::new(3)); // evicts page 1
/// assert_eq!(cache.current_state(), vec![PageId::new(2), PageId::new(3)]);
/// ```
#[derive(Debug)]
pub struct FifoPageCache {
    /// Resident pages in insertion order (front = oldest).
    queue: VecDeque<PageId>,

    /// Set for O(1) membership check.
    resident: HashSet<PageId>,

    /// Maximum number of resident pages (immutable after construction).
    capacity: usize,

    stats: CacheStats,
}

impl FifoPageCache {
    /// Create an empty cache holding at most `capacity` pages.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self {
            queue: VecDeque::with_capacity(capacity),
            resident: HashSet::with_capacity(capacity),
            capacity,
            stats: CacheStats::new(),
        })
    }

    /// Request a page.
    ///
    /// On a miss the page is appended, after evicting the oldest resident
    /// page if the cache is full. A hit leaves the cache untouched.
    pub fn access(&mut self, page: PageId) -> AccessOutcome {
        if self.resident.contains(&page) {
            self.stats.record_hit();
            debug!(%page, "hit");
            return AccessOutcome::Hit;
        }

        self.stats.record_miss();
        if self.queue.len() >= self.capacity {
            if let Some(victim) = self.queue.pop_front() {
                self.resident.remove(&victim);
                self.stats.record_eviction();
                debug!(%page, %victim, "miss, evicted oldest page");
            }
        } else {
            debug!(%page, "miss");
        }
        self.queue.push_back(page);
        self.resident.insert(page);

        debug_assert!(self.queue.len() <= self.capacity);
        AccessOutcome::Miss
    }

    /// Snapshot of the resident pages, oldest first.
    pub fn current_state(&self) -> Vec<PageId> {
        self.queue.iter().copied().collect()
    }

    /// Empty the cache and zero its statistics.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.resident.clear();
        self.stats.reset();
        info!(capacity = self.capacity, "cache reset");
    }

    /// Whether `page` is currently resident.
    #[inline]
    pub fn contains(&self, page: PageId) -> bool {
        self.resident.contains(&page)
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of resident pages.
    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Point-in-time copy of the statistics.
    pub fn stats_snapshot(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(ids: &[u32]) -> Vec<PageId> {
        ids.iter().copied().map(PageId::new).collect()
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(matches!(
            FifoPageCache::new(0),
            Err(Error::InvalidCapacity(0))
        ));
    }

    #[test]
    fn test_fifo_basic() {
        let mut cache = FifoPageCache::new(3).unwrap();

        assert_eq!(cache.access(PageId::new(0)), AccessOutcome::Miss);
        assert_eq!(cache.access(PageId::new(1)), AccessOutcome::Miss);
        assert_eq!(cache.access(PageId::new(2)), AccessOutcome::Miss);
        assert_eq!(cache.len(), 3);

        // Full: next miss evicts page 0
        assert_eq!(cache.access(PageId::new(3)), AccessOutcome::Miss);
        assert_eq!(cache.current_state(), pages(&[1, 2, 3]));
        assert!(!cache.contains(PageId::new(0)));
    }

    #[test]
    fn test_fifo_reaccess_no_reorder() {
        let mut cache = FifoPageCache::new(2).unwrap();

        cache.access(PageId::new(0));
        cache.access(PageId::new(1));
        assert_eq!(cache.access(PageId::new(0)), AccessOutcome::Hit); // should NOT reorder

        // FIFO: page 0 was first, so it goes first even though it was just hit
        cache.access(PageId::new(2));
        assert_eq!(cache.current_state(), pages(&[1, 2]));
    }

    #[test]
    fn test_capacity_one() {
        let mut cache = FifoPageCache::new(1).unwrap();

        assert_eq!(cache.access(PageId::new(7)), AccessOutcome::Miss);
        assert_eq!(cache.access(PageId::new(7)), AccessOutcome::Hit);
        assert_eq!(cache.access(PageId::new(8)), AccessOutcome::Miss);
        assert_eq!(cache.current_state(), pages(&[8]));
    }

    #[test]
    fn test_stats_track_outcomes() {
        let mut cache = FifoPageCache::new(2).unwrap();
        for id in [1, 1, 2, 3, 3] {
            cache.access(PageId::new(id));
        }

        let snapshot = cache.stats_snapshot();
        assert_eq!(snapshot.hits, 2);
        assert_eq!(snapshot.misses, 3);
        assert_eq!(snapshot.evictions, 1);
    }

    #[test]
    fn test_stats_account_for_every_access() {
        let mut cache = FifoPageCache::new(3).unwrap();
        let ids = [1, 2, 1, 4, 5, 1, 6, 6, 2];
        for id in ids {
            cache.access(PageId::new(id));
        }

        let snapshot = cache.stats_snapshot();
        assert_eq!(snapshot.requests(), ids.len() as u64);
        assert_eq!(snapshot.misses, snapshot.evictions + cache.len() as u64);
    }

    #[test]
    fn test_reset_clears_pages_and_stats() {
        let mut cache = FifoPageCache::new(2).unwrap();
        cache.access(PageId::new(1));
        cache.access(PageId::new(1));

        cache.reset();

        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), 2);
        assert_eq!(cache.stats_snapshot(), StatsSnapshot::default());
        assert_eq!(cache.access(PageId::new(1)), AccessOutcome::Miss);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(AccessOutcome::Hit.to_string(), "hit");
        assert_eq!(AccessOutcome::Miss.to_string(), "miss");
        assert!(AccessOutcome::Hit.is_hit());
        assert!(!AccessOutcome::Miss.is_hit());
    }
}
