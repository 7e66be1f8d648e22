//! Mobile menu and current-page highlighting.
//!
//! SYSTEM CONTEXT
//! ==============
//! The menu toggle and the nav panel share one open/closed flag. The three
//! bars inside the toggle swap between two fixed inline styles to draw either
//! a hamburger or an X; there is no computed transition.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Page name assumed when the URL path ends in `/`.
pub const DEFAULT_DOCUMENT: &str = "index.html";

/// Open/closed state of the mobile navigation panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Flip the panel and return the new open flag.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the panel. Returns `true` only when it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

/// Inline style for one hamburger bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarStyle {
    pub transform: &'static str,
    pub opacity: &'static str,
}

/// Styles for the three toggle bars, top to bottom.
pub fn bar_styles(open: bool) -> [BarStyle; 3] {
    if open {
        [
            BarStyle { transform: "rotate(45deg) translate(5px, 5px)", opacity: "1" },
            BarStyle { transform: "none", opacity: "0" },
            BarStyle { transform: "rotate(-45deg) translate(7px, -6px)", opacity: "1" },
        ]
    } else {
        [BarStyle { transform: "none", opacity: "1" }; 3]
    }
}

/// Last path segment of `pathname`, or [`DEFAULT_DOCUMENT`] when empty.
pub fn current_page_name(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_DOCUMENT,
    }
}

/// Whether a nav link pointing at `href` should be marked active.
///
/// Matches on exact file name or when the link contains the page name
/// without its `.html` suffix. In-page anchors never match by containment.
/// An empty page is treated as [`DEFAULT_DOCUMENT`], the same name
/// [`current_page_name`] yields for a bare directory path.
pub fn link_matches(current_page: &str, href: &str) -> bool {
    let current_page = if current_page.is_empty() { DEFAULT_DOCUMENT } else { current_page };
    if href == current_page {
        return true;
    }
    let stem = current_page.strip_suffix(".html").unwrap_or(current_page);
    !stem.is_empty() && !href.starts_with('#') && href.contains(stem)
}

/// Active flag for each link, in order.
pub fn active_flags<'a>(current_page: &str, hrefs: impl IntoIterator<Item = &'a str>) -> Vec<bool> {
    hrefs.into_iter().map(|href| link_matches(current_page, href)).collect()
}
