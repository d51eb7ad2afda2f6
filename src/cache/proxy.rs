//! Caching Proxy Module
//!
//! Wraps a [`VideoService`] and memoizes each operation so repeated
//! requests for the same key reach the wrapped service only once, until a
//! forced refresh.

use serde::Serialize;
use tracing::{debug, info};

use crate::cache::{CacheStats, InfoCachePolicy, MemoStore};
use crate::service::{DownloadedVideo, VideoId, VideoInfo, VideoService, VideoSummary};

// == Proxy Stats ==
/// Memoization statistics broken down by operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProxyStats {
    pub list: CacheStats,
    pub info: CacheStats,
    pub download: CacheStats,
}

impl ProxyStats {
    /// Counters summed over all operations.
    pub fn total(&self) -> CacheStats {
        let mut total = CacheStats::new();
        total.merge(&self.list);
        total.merge(&self.info);
        total.merge(&self.download);
        total
    }
}

// == Caching Proxy ==
/// Memoizing stand-in for a video service.
#[derive(Debug)]
pub struct CachingProxy<S> {
    /// Wrapped service, called on misses and stale entries
    service: S,
    /// Keying of the info cache
    policy: InfoCachePolicy,
    /// Bumped on every forced refresh
    epoch: u64,
    list_cache: MemoStore<(), Vec<VideoSummary>>,
    info_cache: MemoStore<Option<VideoId>, VideoInfo>,
    download_cache: MemoStore<VideoId, DownloadedVideo>,
}

impl<S: VideoService> CachingProxy<S> {
    // == Constructor ==
    /// Creates a proxy with the default [`InfoCachePolicy::PerId`] policy.
    pub fn new(service: S) -> Self {
        Self::with_policy(service, InfoCachePolicy::default())
    }

    /// Creates a proxy with an explicit info cache policy.
    pub fn with_policy(service: S, policy: InfoCachePolicy) -> Self {
        Self {
            service,
            policy,
            epoch: 0,
            list_cache: MemoStore::new(),
            info_cache: MemoStore::new(),
            download_cache: MemoStore::new(),
        }
    }

    // == Force Refresh ==
    /// Invalidates every cached result.
    ///
    /// The next lookup of each cache key goes to the wrapped service and
    /// replaces the stored value; later lookups are served from cache again.
    /// Returns the new refresh epoch.
    pub fn force_refresh(&mut self) -> u64 {
        self.epoch += 1;
        info!("forced refresh, cache epoch is now {}", self.epoch);
        self.epoch
    }

    /// Current refresh epoch; 0 until the first forced refresh.
    pub fn refresh_epoch(&self) -> u64 {
        self.epoch
    }

    pub fn policy(&self) -> InfoCachePolicy {
        self.policy
    }

    // == Stats ==
    /// Returns memoization statistics per operation.
    pub fn stats(&self) -> ProxyStats {
        ProxyStats {
            list: self.list_cache.stats(),
            info: self.info_cache.stats(),
            download: self.download_cache.stats(),
        }
    }

    /// Returns true if a fresh download for `id` is cached.
    pub fn is_download_cached(&self, id: VideoId) -> bool {
        self.download_cache
            .peek(&id)
            .is_some_and(|entry| !entry.is_stale(self.epoch))
    }

    /// Borrows the wrapped service.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Unwraps the proxy, discarding its caches.
    pub fn into_inner(self) -> S {
        self.service
    }
}

impl<S: VideoService> VideoService for CachingProxy<S> {
    fn list_videos(&mut self) -> Vec<VideoSummary> {
        let service = &mut self.service;
        let videos = self
            .list_cache
            .get_or_fetch((), self.epoch, || service.list_videos());
        debug!("video list served ({} videos)", videos.len());
        videos
    }

    fn video_info(&mut self, id: VideoId) -> VideoInfo {
        let key = self.policy.cache_key(id);
        let service = &mut self.service;
        let info = self
            .info_cache
            .get_or_fetch(key, self.epoch, || service.video_info(id));
        if info.id != id {
            debug!(
                "info for id={} served from single slot holding id={}",
                id, info.id
            );
        }
        info
    }

    fn download_video(&mut self, id: VideoId) -> DownloadedVideo {
        let service = &mut self.service;
        self.download_cache
            .get_or_fetch(id, self.epoch, || service.download_video(id))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::RemoteVideoService;

    fn proxy() -> CachingProxy<RemoteVideoService> {
        CachingProxy::new(RemoteVideoService::new())
    }

    #[test]
    fn test_download_fetched_once() {
        let mut proxy = proxy();

        let first = proxy.download_video(VideoId(2));
        let second = proxy.download_video(VideoId(2));
        let third = proxy.download_video(VideoId(2));

        assert_eq!(first, second);
        assert_eq!(second, third);
        assert_eq!(first.payload, "DownloadedVideo(2)");
        assert_eq!(proxy.service().stats().download_requests, 1);
    }

    #[test]
    fn test_download_keyed_by_id() {
        let mut proxy = proxy();

        assert_eq!(proxy.download_video(VideoId(1)).id, VideoId(1));
        assert_eq!(proxy.download_video(VideoId(2)).id, VideoId(2));
        assert_eq!(proxy.download_video(VideoId(1)).id, VideoId(1));

        assert_eq!(proxy.service().stats().download_requests, 2);
        assert!(proxy.is_download_cached(VideoId(1)));
        assert!(!proxy.is_download_cached(VideoId(3)));
    }

    #[test]
    fn test_list_fetched_once() {
        let mut proxy = proxy();

        let first = proxy.list_videos();
        for _ in 0..5 {
            assert_eq!(proxy.list_videos(), first);
        }

        assert_eq!(proxy.service().stats().list_requests, 1);
    }

    #[test]
    fn test_info_per_id() {
        let mut proxy = proxy();

        assert_eq!(proxy.video_info(VideoId(1)).description, "VideoInfo(1)");
        assert_eq!(proxy.video_info(VideoId(2)).description, "VideoInfo(2)");
        assert_eq!(proxy.video_info(VideoId(1)).description, "VideoInfo(1)");

        assert_eq!(proxy.service().stats().info_requests, 2);
    }

    #[test]
    fn test_info_single_slot() {
        let mut proxy =
            CachingProxy::with_policy(RemoteVideoService::new(), InfoCachePolicy::SingleSlot);

        assert_eq!(proxy.video_info(VideoId(1)).description, "VideoInfo(1)");
        assert_eq!(proxy.video_info(VideoId(2)).description, "VideoInfo(1)");

        assert_eq!(proxy.service().stats().info_requests, 1);
        assert_eq!(proxy.policy(), InfoCachePolicy::SingleSlot);
    }

    #[test]
    fn test_force_refresh_refetches_each_key_once() {
        let mut proxy = proxy();
        proxy.list_videos();
        proxy.video_info(VideoId(1));
        proxy.download_video(VideoId(1));

        assert_eq!(proxy.force_refresh(), 1);
        assert!(!proxy.is_download_cached(VideoId(1)));

        proxy.list_videos();
        proxy.video_info(VideoId(1));
        proxy.download_video(VideoId(1));
        proxy.list_videos();
        proxy.video_info(VideoId(1));
        proxy.download_video(VideoId(1));

        let remote = proxy.service().stats();
        assert_eq!(remote.list_requests, 2);
        assert_eq!(remote.info_requests, 2);
        assert_eq!(remote.download_requests, 2);
        assert!(proxy.is_download_cached(VideoId(1)));
    }

    #[test]
    fn test_single_slot_refresh_picks_up_new_id() {
        let mut proxy =
            CachingProxy::with_policy(RemoteVideoService::new(), InfoCachePolicy::SingleSlot);
        proxy.video_info(VideoId(1));
        proxy.force_refresh();

        assert_eq!(proxy.video_info(VideoId(2)).id, VideoId(2));
        assert_eq!(proxy.video_info(VideoId(1)).id, VideoId(2));
    }

    #[test]
    fn test_stats() {
        let mut proxy = proxy();
        proxy.download_video(VideoId(1)); // miss
        proxy.download_video(VideoId(1)); // hit
        proxy.list_videos(); // miss
        proxy.force_refresh();
        proxy.download_video(VideoId(1)); // refresh

        let stats = proxy.stats();
        assert_eq!(stats.download.hits, 1);
        assert_eq!(stats.download.misses, 1);
        assert_eq!(stats.download.refreshes, 1);
        assert_eq!(stats.download.total_entries, 1);
        assert_eq!(stats.list.misses, 1);
        assert_eq!(stats.info, CacheStats::new());

        let total = stats.total();
        assert_eq!(total.lookups(), 4);
        assert_eq!(total.total_entries, 2);
    }

    #[test]
    fn test_into_inner_returns_service() {
        let mut proxy = proxy();
        proxy.download_video(VideoId(5));

        let remote = proxy.into_inner();
        assert_eq!(remote.stats().download_requests, 1);
    }
}
