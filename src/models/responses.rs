//! Response DTOs for the video proxy API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::{InfoCachePolicy, ProxyStats};
use crate::service::{DownloadedVideo, RemoteStats, VideoInfo, VideoSummary};

/// Response body for GET /videos
#[derive(Debug, Clone, Serialize)]
pub struct VideoListResponse {
    /// Listed videos
    pub videos: Vec<VideoSummary>,
    /// Number of listed videos
    pub count: usize,
}

impl VideoListResponse {
    pub fn new(videos: Vec<VideoSummary>) -> Self {
        Self {
            count: videos.len(),
            videos,
        }
    }
}

/// Response body for GET /videos/:id
#[derive(Debug, Clone, Serialize)]
pub struct VideoInfoResponse {
    pub video: VideoInfo,
}

/// Response body for GET /videos/:id/download
#[derive(Debug, Clone, Serialize)]
pub struct DownloadResponse {
    pub video: DownloadedVideo,
}

/// Response body for POST /refresh
#[derive(Debug, Clone, Serialize)]
pub struct RefreshResponse {
    /// Success message
    pub message: String,
    /// Refresh epoch after the refresh
    pub epoch: u64,
}

impl RefreshResponse {
    /// Creates a new RefreshResponse
    pub fn new(epoch: u64) -> Self {
        Self {
            message: format!("Cache invalidated, now at epoch {}", epoch),
            epoch,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Per-operation memoization counters
    pub cache: ProxyStats,
    /// Requests that reached the remote service
    pub remote: RemoteStats,
    /// Hit rate over all operations
    pub hit_rate: f64,
    /// Current refresh epoch
    pub epoch: u64,
    /// Keying policy of the info cache
    pub info_cache_policy: InfoCachePolicy,
}

impl StatsResponse {
    /// Creates a new StatsResponse from proxy and remote statistics
    pub fn new(
        cache: ProxyStats,
        remote: RemoteStats,
        epoch: u64,
        info_cache_policy: InfoCachePolicy,
    ) -> Self {
        Self {
            hit_rate: cache.total().hit_rate(),
            cache,
            remote,
            epoch,
            info_cache_policy,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
