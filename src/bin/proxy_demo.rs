//! Proxy demonstration
//!
//! Downloads the same video three times straight from the remote service,
//! then three times through the caching proxy, and renders the list panel
//! and a video page through the manager.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use video_proxy::{CachingProxy, RemoteVideoService, VideoId, VideoManager, VideoService};

const DEMO_VIDEO: VideoId = VideoId(2);
const REPEATS: usize = 3;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "video_proxy=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    println!("Downloading video with id: {}", DEMO_VIDEO);

    // Every request goes to the remote service
    println!("\nWithout caching");
    let mut service = RemoteVideoService::new();
    for _ in 0..REPEATS {
        println!("{}", service.download_video(DEMO_VIDEO));
    }
    let uncached = service.stats().download_requests;

    // Only the first request goes to the remote service
    println!("\nWith caching");
    let mut proxy = CachingProxy::new(RemoteVideoService::new());
    for _ in 0..REPEATS {
        println!("{}", proxy.download_video(DEMO_VIDEO));
    }

    let mut manager = VideoManager::new(&mut proxy);
    println!("{}", manager.react_on_user_input());

    println!("Rendering video with id {}", DEMO_VIDEO);
    println!("{}", manager.render_video_page(DEMO_VIDEO));

    let cached = proxy.service().stats().download_requests;
    println!(
        "\nRemote downloads: {} without caching, {} with caching",
        uncached, cached
    );
}
