//! Thread-safe wrapper around [`FifoPageCache`].

use parking_lot::Mutex;

use crate::cache::{AccessOutcome, FifoPageCache, StatsSnapshot};
use crate::common::{PageId, Result};

/// A [`FifoPageCache`] behind a mutex.
///
/// Every operation takes the lock for its whole duration, so accesses from
/// different threads are applied one at a time in some serial order.
///
/// # Example
/// ```
/// use pagesim::{PageId, SharedFifoCache};
/// use std::sync::Arc;
///
/// let cache = Arc::new(SharedFifoCache::new(4).unwrap());
/// cache.access(PageId::new(1));
/// assert_eq!(cache.current_state(), vec![PageId::new(1)]);
/// ```
#[derive(Debug)]
pub struct SharedFifoCache {
    inner: Mutex<FifoPageCache>,
}

impl SharedFifoCache {
    /// Create an empty shared cache holding at most `capacity` pages.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self::from_cache(FifoPageCache::new(capacity)?))
    }

    /// Wrap an existing cache, keeping its resident pages.
    pub fn from_cache(cache: FifoPageCache) -> Self {
        Self {
            inner: Mutex::new(cache),
        }
    }

    pub fn access(&self, page: PageId) -> AccessOutcome {
        self.inner.lock().access(page)
    }

    pub fn current_state(&self) -> Vec<PageId> {
        self.inner.lock().current_state()
    }

    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn stats_snapshot(&self) -> StatsSnapshot {
        self.inner.lock().stats_snapshot()
    }

    /// Unwrap into the underlying cache.
    pub fn into_inner(self) -> FifoPageCache {
        self.inner.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_shared_basic() {
        let cache = SharedFifoCache::new(2).unwrap();

        assert_eq!(cache.access(PageId::new(1)), AccessOutcome::Miss);
        assert_eq!(cache.access(PageId::new(1)), AccessOutcome::Hit);
        assert_eq!(cache.capacity(), 2);

        cache.reset();
        assert!(cache.current_state().is_empty());
    }

    #[test]
    fn test_concurrent_access_keeps_bound() {
        let cache = Arc::new(SharedFifoCache::new(4).unwrap());
        let mut handles = vec![];

        for t in 0..4u32 {
            let cache = Arc::clone(&cache);
            handles.push(thread::spawn(move || {
                for i in 0..100u32 {
                    cache.access(PageId::new(t * 1000 + i % 10));
                    assert!(cache.current_state().len() <= 4);
                }
            }));
        }

        for h in handles {
            h.join().unwrap();
        }

        let cache = Arc::try_unwrap(cache).unwrap().into_inner();
        assert_eq!(cache.len(), 4);
        assert_eq!(cache.stats_snapshot().requests(), 400);
    }
}
