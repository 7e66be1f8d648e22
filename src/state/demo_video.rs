//! Placeholder content for the latest-video slot.
//!
//! Stands in for the video metadata service until a real channel feed is
//! connected.

#[cfg(test)]
#[path = "demo_video_test.rs"]
mod demo_video_test;

/// Longest description shown under a video before truncation.
pub const DESCRIPTION_LIMIT: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoVideo {
    pub title: &'static str,
    pub description: &'static str,
    pub watch_url: &'static str,
}

pub const DEMO_VIDEO: DemoVideo = DemoVideo {
    title: "Writing Prompts for Creative Block",
    description: "Learn how to overcome writer's block with these creative writing prompts and exercises. \
                  Perfect for journaling or story starters!",
    watch_url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
};

/// Cut `description` to `limit` characters, appending `...` when shortened.
pub fn truncate_description(description: &str, limit: usize) -> String {
    match description.char_indices().nth(limit) {
        Some((end, _)) => format!("{}...", &description[..end]),
        None => description.to_owned(),
    }
}
