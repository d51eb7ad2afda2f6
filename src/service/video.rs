//! Video value types returned by the service operations.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ProxyError;

// == Video Id ==
/// Identifier of a video in the remote catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct VideoId(pub u32);

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VideoId {
    type Err = ProxyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(VideoId)
            .map_err(|_| ProxyError::InvalidRequest(format!("'{}' is not a valid video id", s)))
    }
}

// == Video Summary ==
/// Entry of the video list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoSummary {
    pub id: VideoId,
    pub title: String,
}

impl VideoSummary {
    pub fn new(id: VideoId) -> Self {
        Self {
            id,
            title: format!("Video({})", id),
        }
    }
}

impl fmt::Display for VideoSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

// == Video Info ==
/// Metadata about a single video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoInfo {
    pub id: VideoId,
    pub description: String,
}

impl VideoInfo {
    pub fn new(id: VideoId) -> Self {
        Self {
            id,
            description: format!("VideoInfo({})", id),
        }
    }
}

impl fmt::Display for VideoInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

// == Downloaded Video ==
/// Payload of a downloaded video file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadedVideo {
    pub id: VideoId,
    pub payload: String,
}

impl DownloadedVideo {
    pub fn new(id: VideoId) -> Self {
        Self {
            id,
            payload: format!("DownloadedVideo({})", id),
        }
    }
}

impl fmt::Display for DownloadedVideo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.payload)
    }
}
