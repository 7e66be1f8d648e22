//! Deferred image loading.
//!
//! SYSTEM CONTEXT
//! ==============
//! Images carry their real URL in `data-src`. With visibility observation
//! available, each image is revealed the first time it intersects the
//! viewport and then dropped from observation. Without it, every image is
//! revealed at startup. A failed image load is not distinguished from a
//! successful one.

#[cfg(test)]
#[path = "lazy_test.rs"]
mod lazy_test;

/// Selector for images that still hold a deferred source.
pub const DEFERRED_SELECTOR: &str = "img[data-src]";

/// Attribute holding the deferred source.
pub const DEFERRED_ATTR: &str = "data-src";

/// Class added once the real source is in place.
pub const LOADED_CLASS: &str = "loaded";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStrategy {
    Observe,
    Eager,
}

impl LoadStrategy {
    pub fn detect(observer_supported: bool) -> Self {
        if observer_supported { Self::Observe } else { Self::Eager }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImagePhase {
    #[default]
    Pending,
    Loaded,
}

/// DOM change needed to reveal one image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reveal {
    pub src: String,
    pub unobserve: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LazyImage {
    pub deferred_src: String,
    pub phase: ImagePhase,
}

impl LazyImage {
    /// Model an image as found in the DOM; an image already carrying the
    /// loaded class is never revealed again.
    pub fn new(deferred_src: impl Into<String>, already_loaded: bool) -> Self {
        Self {
            deferred_src: deferred_src.into(),
            phase: if already_loaded { ImagePhase::Loaded } else { ImagePhase::Pending },
        }
    }

    /// Handle a visibility notification.
    pub fn on_visibility(&mut self, intersecting: bool) -> Option<Reveal> {
        if !intersecting {
            return None;
        }
        self.reveal(true)
    }

    /// Reveal without observation, for the eager strategy.
    pub fn reveal_now(&mut self) -> Option<Reveal> {
        self.reveal(false)
    }

    fn reveal(&mut self, unobserve: bool) -> Option<Reveal> {
        if self.phase == ImagePhase::Loaded || self.deferred_src.is_empty() {
            return None;
        }
        self.phase = ImagePhase::Loaded;
        Some(Reveal { src: self.deferred_src.clone(), unobserve })
    }
}
