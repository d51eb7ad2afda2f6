//! Request DTOs for the video proxy API
//!
//! Defines the structure of incoming path parameters.

use serde::Deserialize;

use crate::error::Result;
use crate::service::VideoId;

/// Path parameters of the `/videos/:id` routes
///
/// # Fields
/// - `id`: The raw video id segment, validated by [`VideoPath::video_id`]
#[derive(Debug, Clone, Deserialize)]
pub struct VideoPath {
    /// The raw id segment
    pub id: String,
}

impl VideoPath {
    /// Validates and parses the id segment.
    pub fn video_id(&self) -> Result<VideoId> {
        self.id.parse()
    }
}
