//! Cache Statistics Module
//!
//! Tracks memoization metrics including hits, misses, and forced refreshes.

use serde::Serialize;

// == Cache Stats ==
/// Tracks memoization metrics for one operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups with no cached entry
    pub misses: u64,
    /// Lookups that found an entry invalidated by a forced refresh
    pub refreshes: u64,
    /// Current number of memoized entries
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses + refreshes), or 0.0 if no lookups have
    /// been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.lookups();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Total number of lookups.
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses + self.refreshes
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Refresh ==
    /// Increments the refresh counter.
    pub fn record_refresh(&mut self) {
        self.refreshes += 1;
    }

    // == Update Entry Count ==
    /// Updates the total entries count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }

    // == Merge ==
    /// Adds another set of counters into this one.
    pub fn merge(&mut self, other: &CacheStats) {
        self.hits += other.hits;
        self.misses += other.misses;
        self.refreshes += other.refreshes;
        self.total_entries += other.total_entries;
    }
}
