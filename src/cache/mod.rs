//! Cache Module
//!
//! Memoizing proxy in front of a video service, with forced refresh and
//! per-operation statistics.

mod entry;
mod policy;
mod proxy;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use policy::InfoCachePolicy;
pub use proxy::{CachingProxy, ProxyStats};
pub use stats::CacheStats;
pub use store::MemoStore;
