//! Video Manager
//!
//! Client that renders video pages through any [`VideoService`]. It is
//! unaware of whether it talks to the remote service or to the caching
//! proxy.

use tracing::info;

use crate::service::{VideoId, VideoService};

// == Video Manager ==
#[derive(Debug)]
pub struct VideoManager<S> {
    service: S,
}

impl<S: VideoService> VideoManager<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Renders the page of a single video.
    pub fn render_video_page(&mut self, id: VideoId) -> String {
        let info = self.service.video_info(id);
        let page = format!("Rendering: {}", info);
        info!("{}", page);
        page
    }

    /// Renders the panel listing every video.
    pub fn render_list_panel(&mut self) -> String {
        let titles: Vec<String> = self
            .service
            .list_videos()
            .iter()
            .map(ToString::to_string)
            .collect();
        let panel = format!("Video List: [{}]", titles.join(", "));
        info!("{}", panel);
        panel
    }

    /// Reacts to user input by refreshing the list panel.
    pub fn react_on_user_input(&mut self) -> String {
        self.render_list_panel()
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn into_inner(self) -> S {
        self.service
    }
}
