//! Info Cache Policy
//!
//! Decides how video metadata lookups map onto cache keys.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ProxyError;
use crate::service::VideoId;

// == Info Cache Policy ==
/// Keying policy for the video info cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InfoCachePolicy {
    /// One entry per video id
    #[default]
    PerId,
    /// One global slot shared by every id.
    ///
    /// Once any info is cached, lookups for other ids return it until the
    /// next forced refresh.
    SingleSlot,
}

impl InfoCachePolicy {
    /// Maps a requested id onto its cache key under this policy.
    ///
    /// `None` is the shared slot.
    pub fn cache_key(self, id: VideoId) -> Option<VideoId> {
        match self {
            InfoCachePolicy::PerId => Some(id),
            InfoCachePolicy::SingleSlot => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InfoCachePolicy::PerId => "per_id",
            InfoCachePolicy::SingleSlot => "single_slot",
        }
    }
}

impl fmt::Display for InfoCachePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InfoCachePolicy {
    type Err = ProxyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        match name.to_ascii_lowercase().as_str() {
            "per_id" | "per-id" => Ok(InfoCachePolicy::PerId),
            "single_slot" | "single-slot" => Ok(InfoCachePolicy::SingleSlot),
            _ => Err(ProxyError::UnknownPolicy(name.to_string())),
        }
    }
}
