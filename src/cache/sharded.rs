//! Sharded Cache Module
//!
//! Splits the key space across independently locked `LruCache` shards.

use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use crate::cache::{EntrySize, LruCache, MetricsSnapshot, PutOutcome};
use crate::error::{ConfigError, Result};

// == Sharded LRU Cache ==
/// A set of `LruCache` shards selected by key hash.
///
/// Each shard owns its own lock, index, list and counters, so operations on
/// different shards never contend. Recency order is kept per shard: an entry
/// can be evicted from a full shard while another shard holds older ones.
/// With a single shard this behaves exactly like one `LruCache`.
#[derive(Debug)]
pub struct ShardedLruCache<K, V> {
    shards: Box<[LruCache<K, V>]>,
    hasher: RandomState,
    capacity: usize,
    max_entry_size_bytes: usize,
}

impl<K, V> ShardedLruCache<K, V>
where
    K: Hash + Eq + Clone + fmt::Debug,
    V: Clone + EntrySize,
{
    // == Constructor ==
    /// Creates a cache of `shard_count` shards sharing `capacity` entries.
    ///
    /// Shard `i` receives `capacity / shard_count` entries plus one more when
    /// `i < capacity % shard_count`, so the shard capacities add up to `capacity`.
    pub fn new(
        capacity: usize,
        max_entry_size_bytes: usize,
        shard_count: usize,
    ) -> std::result::Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if shard_count == 0 || shard_count > capacity {
            return Err(ConfigError::InvalidShards {
                shards: shard_count,
                capacity,
            });
        }

        let base = capacity / shard_count;
        let extra = capacity % shard_count;
        let shards = (0..shard_count)
            .map(|i| LruCache::new(base + usize::from(i < extra), max_entry_size_bytes))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            shards: shards.into_boxed_slice(),
            hasher: RandomState::new(),
            capacity,
            max_entry_size_bytes,
        })
    }

    fn shard<Q>(&self, key: &Q) -> &LruCache<K, V>
    where
        Q: Hash + ?Sized,
    {
        let idx = (self.hasher.hash_one(key) % self.shards.len() as u64) as usize;
        &self.shards[idx]
    }

    // == Operations ==
    /// Stores a key-value pair in the key's shard.
    pub fn put(&self, key: K, value: V) -> Result<PutOutcome<K>> {
        self.shard(&key).put(key, value)
    }

    /// Retrieves a value from the key's shard, marking it most recently used.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.shard(key).get(key)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.shard(key).contains(key)
    }

    /// Clears every shard and resets its counters.
    pub fn clear(&self) {
        for shard in self.shards.iter() {
            shard.clear();
        }
    }

    /// Sums the counters of every shard and recomputes the hit ratio.
    pub fn metrics(&self) -> MetricsSnapshot {
        self.shards.iter().map(LruCache::metrics).sum()
    }

    pub fn len(&self) -> usize {
        self.shards.iter().map(LruCache::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(LruCache::is_empty)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn max_entry_size_bytes(&self) -> usize {
        self.max_entry_size_bytes
    }

    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }
}
