//! Video Proxy - A caching proxy in front of a simulated remote video service
//!
//! Memoizes video listings, metadata and downloads per cache key until a
//! forced refresh, and serves them over a small REST API.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod manager;
pub mod models;
pub mod service;

pub use api::AppState;
pub use cache::{CachingProxy, InfoCachePolicy};
pub use config::Config;
pub use manager::VideoManager;
pub use service::{RemoteVideoService, VideoId, VideoService};
