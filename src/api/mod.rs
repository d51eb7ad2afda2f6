//! API Module
//!
//! HTTP handlers and routing exposing the caching proxy as a REST API.
//!
//! # Endpoints
//! - `GET /videos` - List videos
//! - `GET /videos/:id` - Video metadata
//! - `GET /videos/:id/download` - Download a video
//! - `POST /refresh` - Force a cache refresh
//! - `GET /stats` - Cache and remote statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
