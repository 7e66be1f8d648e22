//! Header shadow on scroll.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

/// Class toggled on the page header.
pub const SCROLLED_CLASS: &str = "scrolled";

/// Whether `offset` lies strictly beyond `threshold`.
pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub scrolled: bool,
}

impl HeaderState {
    /// Apply a scroll position. Returns the new flag only when it changed.
    pub fn on_scroll(&mut self, offset: f64, threshold: f64) -> Option<bool> {
        let scrolled = is_scrolled(offset, threshold);
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(scrolled)
    }
}
