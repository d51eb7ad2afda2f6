//! Service Module
//!
//! The video service interface, its value types and the simulated remote
//! implementation.

mod remote;
mod video;

pub use remote::{RemoteStats, RemoteVideoService, DEFAULT_CATALOG_SIZE};
pub use video::{DownloadedVideo, VideoId, VideoInfo, VideoSummary};

// == Video Service ==
/// Operations offered by a video provider.
///
/// Both the remote service and the caching proxy implement this trait, so
/// clients can be handed either one.
pub trait VideoService {
    /// Lists the videos available from the provider.
    fn list_videos(&mut self) -> Vec<VideoSummary>;

    /// Returns metadata about a single video.
    fn video_info(&mut self, id: VideoId) -> VideoInfo;

    /// Downloads a video file.
    fn download_video(&mut self, id: VideoId) -> DownloadedVideo;
}

impl<S: VideoService + ?Sized> VideoService for &mut S {
    fn list_videos(&mut self) -> Vec<VideoSummary> {
        (**self).list_videos()
    }

    fn video_info(&mut self, id: VideoId) -> VideoInfo {
        (**self).video_info(id)
    }

    fn download_video(&mut self, id: VideoId) -> DownloadedVideo {
        (**self).download_video(id)
    }
}

impl<S: VideoService + ?Sized> VideoService for Box<S> {
    fn list_videos(&mut self) -> Vec<VideoSummary> {
        (**self).list_videos()
    }

    fn video_info(&mut self, id: VideoId) -> VideoInfo {
        (**self).video_info(id)
    }

    fn download_video(&mut self, id: VideoId) -> DownloadedVideo {
        (**self).download_video(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetch_one<S: VideoService>(mut service: S) {
        service.download_video(VideoId(1));
        service.video_info(VideoId(1));
    }

    #[test]
    fn test_borrowed_service_forwards_calls() {
        let mut remote = RemoteVideoService::new();
        fetch_one(&mut remote);
        assert_eq!(remote.stats().download_requests, 1);
        assert_eq!(remote.stats().info_requests, 1);
    }

    #[test]
    fn test_boxed_dyn_service() {
        let mut service: Box<dyn VideoService> = Box::new(RemoteVideoService::new());
        assert_eq!(service.list_videos().len(), DEFAULT_CATALOG_SIZE as usize);
    }
}
