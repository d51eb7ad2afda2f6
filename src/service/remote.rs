//! Remote Video Service
//!
//! Stands in for an expensive third-party video provider. Each call logs a
//! line in place of a network round-trip and is counted.

use serde::Serialize;
use tracing::info;

use super::{DownloadedVideo, VideoId, VideoInfo, VideoService, VideoSummary};

/// Number of videos listed by a default service.
pub const DEFAULT_CATALOG_SIZE: u32 = 3;

// == Remote Stats ==
/// Count of requests that reached the remote provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RemoteStats {
    pub list_requests: u64,
    pub info_requests: u64,
    pub download_requests: u64,
}

impl RemoteStats {
    /// Total number of remote round-trips.
    pub fn total(&self) -> u64 {
        self.list_requests + self.info_requests + self.download_requests
    }
}

// == Remote Video Service ==
/// Simulated remote provider. Accepts any id; every call succeeds.
#[derive(Debug)]
pub struct RemoteVideoService {
    catalog_size: u32,
    stats: RemoteStats,
}

impl RemoteVideoService {
    /// Creates a service listing [`DEFAULT_CATALOG_SIZE`] videos.
    pub fn new() -> Self {
        Self::with_catalog_size(DEFAULT_CATALOG_SIZE)
    }

    /// Creates a service listing `catalog_size` videos, numbered from 1.
    pub fn with_catalog_size(catalog_size: u32) -> Self {
        Self {
            catalog_size,
            stats: RemoteStats::default(),
        }
    }

    /// Returns the requests made so far.
    pub fn stats(&self) -> RemoteStats {
        self.stats
    }
}

impl Default for RemoteVideoService {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoService for RemoteVideoService {
    fn list_videos(&mut self) -> Vec<VideoSummary> {
        self.stats.list_requests += 1;
        info!("sending API request for list of videos");
        (1..=self.catalog_size)
            .map(|id| VideoSummary::new(VideoId(id)))
            .collect()
    }

    fn video_info(&mut self, id: VideoId) -> VideoInfo {
        self.stats.info_requests += 1;
        info!("getting metadata for id={}", id);
        VideoInfo::new(id)
    }

    fn download_video(&mut self, id: VideoId) -> DownloadedVideo {
        self.stats.download_requests += 1;
        info!("downloading id={}", id);
        DownloadedVideo::new(id)
    }
}
