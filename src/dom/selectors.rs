//! Element ids and selectors used by the site markup.

pub const MENU_TOGGLE: &str = "menuToggle";
pub const MAIN_NAV: &str = "mainNav";
pub const NAV_LINK: &str = ".nav-link";
pub const THEME_TOGGLE: &str = "themeToggle";
pub const VIDEO_SHARE: &str = "video-share";
pub const VIDEO_TITLE: &str = "video-title";
pub const CURRENT_YEAR: &str = "currentYear";
pub const HEADER: &str = ".header";
pub const VIDEO_CATEGORIES: &str = "video-categories";
pub const VIDEO_SEARCH: &str = "video-search";
pub const VIDEO_GRID: &str = ".video-grid";
pub const LATEST_VIDEO: &str = "latest-video-placeholder";
