//! Demo card shown in the latest-video slot.

use leptos::prelude::*;

use crate::state::demo_video::{DESCRIPTION_LIMIT, DemoVideo, truncate_description};

#[component]
pub fn DemoVideoCard(video: DemoVideo) -> impl IntoView {
    view! {
        <div class="demo-video-placeholder">
            <div class="demo-video-info">
                <h3>{video.title}</h3>
                <p>{truncate_description(video.description, DESCRIPTION_LIMIT)}</p>
                <div class="demo-video-actions">
                    <a href=video.watch_url target="_blank" rel="noopener" class="btn btn-primary">
                        <i class="fab fa-youtube"></i>
                        " Watch Demo Video"
                    </a>
                </div>
            </div>
        </div>
    }
}
