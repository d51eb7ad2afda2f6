//! Memo Store Module
//!
//! Per-operation memo table mapping a cache key to the last fetched result.
//! Entries are created lazily, overwritten on refresh and never evicted.

use std::collections::HashMap;
use std::hash::Hash;

use crate::cache::{CacheEntry, CacheStats};

// == Memo Store ==
/// Memoized results of one operation, keyed by `K`.
#[derive(Debug)]
pub struct MemoStore<K, V> {
    /// Key-value storage
    entries: HashMap<K, CacheEntry<V>>,
    /// Lookup statistics
    stats: CacheStats,
}

impl<K, V> MemoStore<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
        }
    }

    // == Lookup ==
    /// Returns the memoized value for `key` if it is fresh in `epoch`.
    ///
    /// Records a hit for a fresh entry, a refresh for a stale one and a miss
    /// when no entry exists.
    pub fn lookup(&mut self, key: &K, epoch: u64) -> Option<V> {
        match self.entries.get(key) {
            Some(entry) if !entry.is_stale(epoch) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            Some(_) => {
                self.stats.record_refresh();
                None
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Insert ==
    /// Stores `value` under `key`, overwriting any previous entry.
    pub fn insert(&mut self, key: K, value: V, epoch: u64) {
        self.entries.insert(key, CacheEntry::new(value, epoch));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get Or Fetch ==
    /// Returns the fresh memoized value for `key`, calling `fetch` and
    /// storing its result otherwise.
    pub fn get_or_fetch<F>(&mut self, key: K, epoch: u64, fetch: F) -> V
    where
        F: FnOnce() -> V,
    {
        if let Some(value) = self.lookup(&key, epoch) {
            return value;
        }

        let value = fetch();
        self.insert(key, value.clone(), epoch);
        value
    }

    // == Peek ==
    /// Returns the entry for `key` without touching statistics.
    pub fn peek(&self, key: &K) -> Option<&CacheEntry<V>> {
        self.entries.get(key)
    }

    // == Stats ==
    /// Returns current lookup statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if nothing has been memoized yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> Default for MemoStore<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
