//! Cache Entry Module
//!
//! Defines a memoized value together with the refresh epoch it was fetched in.

// == Cache Entry ==
/// A single memoized result.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The memoized value
    pub value: V,
    /// Refresh epoch current when the value was fetched
    pub epoch: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry stamped with `epoch`.
    pub fn new(value: V, epoch: u64) -> Self {
        Self { value, epoch }
    }

    // == Is Stale ==
    /// Checks whether a forced refresh happened after this entry was fetched.
    ///
    /// An entry is stale when its epoch is strictly older than the current
    /// refresh epoch. Entries never become stale through age alone.
    pub fn is_stale(&self, current_epoch: u64) -> bool {
        self.epoch < current_epoch
    }
}
