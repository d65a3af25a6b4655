//! LRU Cache Module
//!
//! Main cache engine: a key index and a recency list guarded by one lock.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::cache::{CacheMetrics, EntrySize, MetricsSnapshot, RecencyList};
use crate::error::{CacheError, ConfigError, Result};

/// Upper bound on slots reserved at construction; storage grows past it on demand.
const PREALLOCATED_ENTRIES: usize = 1024;

// == Put Outcome ==
/// What a successful `put` did to the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PutOutcome<K> {
    /// New key stored without displacing anything
    Inserted,
    /// Existing key had its value replaced
    Updated,
    /// New key stored after evicting the least recently used `key`
    Evicted { key: K },
}

// == Locked State ==
/// Index and list; only ever touched with the cache lock held.
struct State<K, V> {
    index: HashMap<K, usize>,
    list: RecencyList<K, V>,
}

// == LRU Cache ==
/// Fixed-capacity cache with least-recently-used eviction.
///
/// Every `get`, `put` and `clear` holds the same exclusive lock for its
/// whole duration, since a lookup reorders the recency list too. Counters
/// are atomics so `metrics` can be read without waiting on that lock.
pub struct LruCache<K, V> {
    state: Mutex<State<K, V>>,
    metrics: CacheMetrics,
    capacity: usize,
    max_entry_size_bytes: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone + fmt::Debug,
    V: Clone + EntrySize,
{
    // == Constructor ==
    /// Creates an empty cache.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of live entries
    /// * `max_entry_size_bytes` - Largest value `put` will accept
    pub fn new(capacity: usize, max_entry_size_bytes: usize) -> std::result::Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if max_entry_size_bytes == 0 {
            return Err(ConfigError::ZeroEntrySize);
        }

        let reserved = capacity.min(PREALLOCATED_ENTRIES);
        Ok(Self {
            state: Mutex::new(State {
                index: HashMap::with_capacity(reserved),
                list: RecencyList::with_capacity(reserved),
            }),
            metrics: CacheMetrics::new(),
            capacity,
            max_entry_size_bytes,
        })
    }

    // == Put ==
    /// Stores a key-value pair.
    ///
    /// If the key already exists its value is replaced and it becomes most
    /// recently used. Otherwise, when the cache is full, the least recently
    /// used entry is evicted first.
    ///
    /// Values larger than `max_entry_size_bytes` are rejected with
    /// `CacheError::EntryTooLarge`; nothing is written and no counter moves.
    pub fn put(&self, key: K, value: V) -> Result<PutOutcome<K>> {
        let size = value.entry_size();
        if size > self.max_entry_size_bytes {
            warn!(
                size,
                max = self.max_entry_size_bytes,
                "Rejected oversized cache entry"
            );
            return Err(CacheError::EntryTooLarge {
                size,
                max: self.max_entry_size_bytes,
            });
        }

        let mut state = self.state.lock();
        let State { index, list } = &mut *state;

        // Overwrite case
        if let Some(&idx) = index.get(&key) {
            if let Some(slot) = list.value_mut(idx) {
                *slot = value;
            }
            list.touch(idx);
            return Ok(PutOutcome::Updated);
        }

        let mut outcome = PutOutcome::Inserted;
        if index.len() >= self.capacity {
            if let Some((evicted_key, _)) = list.pop_back() {
                index.remove(&evicted_key);
                self.metrics.record_eviction();
                outcome = PutOutcome::Evicted { key: evicted_key };
            }
        }

        let idx = list.push_front(key.clone(), value);
        index.insert(key, idx);
        drop(state);

        if let PutOutcome::Evicted { key: evicted } = &outcome {
            debug!(key = ?evicted, "Evicted least recently used entry");
        }
        Ok(outcome)
    }

    // == Get ==
    /// Retrieves a clone of the value for `key`, marking it most recently used.
    ///
    /// Records a hit when present and a miss when absent.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut state = self.state.lock();
        let State { index, list } = &mut *state;

        match index.get(key) {
            Some(&idx) => {
                list.touch(idx);
                self.metrics.record_hit();
                list.value(idx).cloned()
            }
            None => {
                self.metrics.record_miss();
                None
            }
        }
    }

    // == Contains ==
    /// Checks whether `key` is live without touching recency or metrics.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.state.lock().index.contains_key(key)
    }

    // == Clear ==
    /// Removes every entry and resets all counters to zero.
    pub fn clear(&self) {
        let mut state = self.state.lock();
        let removed = state.index.len();
        state.index.clear();
        state.list.clear();
        self.metrics.reset();
        drop(state);

        info!(removed, "Cache cleared and metrics reset");
    }

    // == Metrics ==
    /// Returns a snapshot of hits, misses, evictions and hit ratio.
    ///
    /// Does not take the cache lock, so the snapshot may lag operations
    /// still in flight on other threads.
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Keys from most to least recently used.
    pub fn keys_by_recency(&self) -> Vec<K> {
        self.state.lock().list.keys().cloned().collect()
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.state.lock().index.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn max_entry_size_bytes(&self) -> usize {
        self.max_entry_size_bytes
    }
}

impl<K, V> fmt::Debug for LruCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.capacity)
            .field("max_entry_size_bytes", &self.max_entry_size_bytes)
            .field("metrics", &self.metrics.snapshot())
            .finish()
    }
}
