//! API Handlers
//!
//! HTTP request handlers for each video proxy endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::{CachingProxy, InfoCachePolicy};
use crate::error::Result;
use crate::models::{
    DownloadResponse, HealthResponse, RefreshResponse, StatsResponse, VideoInfoResponse,
    VideoListResponse, VideoPath,
};
use crate::service::{RemoteVideoService, VideoService};

/// Application state shared across all handlers.
///
/// Fetching handlers hold the write lock across lookup, remote call and
/// store, so each key reaches the remote service at most once even under
/// concurrent requests.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe caching proxy
    pub proxy: Arc<RwLock<CachingProxy<RemoteVideoService>>>,
}

impl AppState {
    /// Creates a new AppState with the given proxy.
    pub fn new(proxy: CachingProxy<RemoteVideoService>) -> Self {
        Self {
            proxy: Arc::new(RwLock::new(proxy)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the remote service and its proxy with parameters from the Config.
    pub fn from_config(config: &crate::config::Config) -> Self {
        let service = RemoteVideoService::with_catalog_size(config.catalog_size);
        Self::new(CachingProxy::with_policy(service, config.info_cache_policy))
    }

    /// Creates a state around a default remote service with `policy`.
    pub fn with_policy(policy: InfoCachePolicy) -> Self {
        Self::new(CachingProxy::with_policy(RemoteVideoService::new(), policy))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_policy(InfoCachePolicy::default())
    }
}

/// Handler for GET /videos
///
/// Lists the videos, served from cache after the first request.
pub async fn list_videos_handler(State(state): State<AppState>) -> Json<VideoListResponse> {
    let mut proxy = state.proxy.write().await;
    Json(VideoListResponse::new(proxy.list_videos()))
}

/// Handler for GET /videos/:id
///
/// Returns metadata about a video.
pub async fn video_info_handler(
    State(state): State<AppState>,
    Path(path): Path<VideoPath>,
) -> Result<Json<VideoInfoResponse>> {
    let id = path.video_id()?;

    let mut proxy = state.proxy.write().await;
    let video = proxy.video_info(id);

    Ok(Json(VideoInfoResponse { video }))
}

/// Handler for GET /videos/:id/download
///
/// Downloads a video, served from cache on repeat requests.
pub async fn download_handler(
    State(state): State<AppState>,
    Path(path): Path<VideoPath>,
) -> Result<Json<DownloadResponse>> {
    let id = path.video_id()?;

    let mut proxy = state.proxy.write().await;
    let video = proxy.download_video(id);

    Ok(Json(DownloadResponse { video }))
}

/// Handler for POST /refresh
///
/// Forces the next lookup of every cached key back to the remote service.
pub async fn refresh_handler(State(state): State<AppState>) -> Json<RefreshResponse> {
    let mut proxy = state.proxy.write().await;
    Json(RefreshResponse::new(proxy.force_refresh()))
}

/// Handler for GET /stats
///
/// Returns memoization and remote request statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    // Acquire read lock for stats
    let proxy = state.proxy.read().await;

    Json(StatsResponse::new(
        proxy.stats(),
        proxy.service().stats(),
        proxy.refresh_epoch(),
        proxy.policy(),
    ))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProxyError;
    use crate::service::VideoId;
    use tokio_test::{assert_err, assert_ok};

    fn video_path(id: &str) -> Path<VideoPath> {
        Path(VideoPath { id: id.to_string() })
    }

    #[tokio::test]
    async fn test_download_handler_caches() {
        let state = AppState::default();

        let first = assert_ok!(download_handler(State(state.clone()), video_path("2")).await);
        let second = assert_ok!(download_handler(State(state.clone()), video_path("2")).await);

        assert_eq!(first.video, second.video);
        assert_eq!(first.video.payload, "DownloadedVideo(2)");

        let proxy = state.proxy.read().await;
        assert_eq!(proxy.service().stats().download_requests, 1);
    }

    #[tokio::test]
    async fn test_video_info_handler() {
        let state = AppState::default();

        let response = assert_ok!(video_info_handler(State(state), video_path("7")).await);
        assert_eq!(response.video.id, VideoId(7));
    }

    #[tokio::test]
    async fn test_invalid_id_rejected() {
        let state = AppState::default();

        let result = download_handler(State(state.clone()), video_path("seven")).await;
        let err = assert_err!(result);
        assert!(matches!(err, ProxyError::InvalidRequest(_)));

        let proxy = state.proxy.read().await;
        assert_eq!(proxy.service().stats().total(), 0);
    }

    #[tokio::test]
    async fn test_list_and_refresh_handlers() {
        let state = AppState::default();

        let listed = list_videos_handler(State(state.clone())).await;
        assert_eq!(listed.count, 3);
        list_videos_handler(State(state.clone())).await;

        let refreshed = refresh_handler(State(state.clone())).await;
        assert_eq!(refreshed.epoch, 1);
        list_videos_handler(State(state.clone())).await;

        let proxy = state.proxy.read().await;
        assert_eq!(proxy.service().stats().list_requests, 2);
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = AppState::with_policy(InfoCachePolicy::SingleSlot);
        video_info_handler(State(state.clone()), video_path("1"))
            .await
            .unwrap();
        video_info_handler(State(state.clone()), video_path("2"))
            .await
            .unwrap();

        let response = stats_handler(State(state)).await;
        assert_eq!(response.cache.info.hits, 1);
        assert_eq!(response.cache.info.misses, 1);
        assert_eq!(response.remote.info_requests, 1);
        assert_eq!(response.info_cache_policy, InfoCachePolicy::SingleSlot);
        assert!((response.hit_rate - 0.5).abs() < 0.001);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
