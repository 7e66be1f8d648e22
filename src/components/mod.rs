//! Leptos views for page sections built at runtime.

pub mod demo_video;
pub mod video_library;
