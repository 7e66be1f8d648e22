//! Video library page placeholder state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The library page shows fixed category tiles and a search box. Neither
//! filters anything yet: selections and queries only drive two status
//! messages until a real video metadata service is wired in.

#[cfg(test)]
#[path = "library_test.rs"]
mod library_test;

/// Path fragment identifying the library page.
pub const LIBRARY_PAGE: &str = "videos.html";

/// Category id meaning "no filter".
pub const ALL_CATEGORY: &str = "all";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoCategory {
    pub id: &'static str,
    pub name: &'static str,
    /// Font Awesome classes for the tile icon.
    pub icon: &'static str,
    /// Placeholder count shown on the tile.
    pub count: u32,
}

pub const CATEGORIES: [VideoCategory; 5] = [
    VideoCategory { id: ALL_CATEGORY, name: "All Videos", icon: "fas fa-play-circle", count: 32 },
    VideoCategory { id: "poetry", name: "Poetry & Verse", icon: "fas fa-feather", count: 10 },
    VideoCategory { id: "spoken-word", name: "Spoken Word", icon: "fas fa-microphone", count: 8 },
    VideoCategory {
        id: "faith-journaling",
        name: "Faith & Reflection",
        icon: "fas fa-hands-praying",
        count: 9,
    },
    VideoCategory { id: "creative-writing", name: "Creative Writing", icon: "fas fa-book-open", count: 5 },
];

pub fn find_category(id: &str) -> Option<&'static VideoCategory> {
    CATEGORIES.iter().find(|category| category.id == id)
}

/// Whether the library controller should run on this page.
pub fn is_library_page(pathname: &str, has_category_container: bool) -> bool {
    has_category_container || pathname.contains(LIBRARY_PAGE)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LibraryState {
    /// Id of the highlighted category tile, if any.
    pub active: Option<&'static str>,
    /// Lowercased search query.
    pub query: String,
}

impl LibraryState {
    /// Highlight `id`, clearing every other tile. Unknown ids are ignored.
    pub fn select(&mut self, id: &str) -> bool {
        let Some(category) = find_category(id) else {
            return false;
        };
        self.active = Some(category.id);
        true
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == Some(id)
    }

    pub fn set_query(&mut self, raw: &str) {
        self.query = raw.to_lowercase();
    }

    /// Category status line, present once a tile has been chosen.
    pub fn filter_message(&self) -> Option<String> {
        self.active.map(|id| {
            let label = if id == ALL_CATEGORY { "all" } else { id };
            format!("Showing {label} videos")
        })
    }

    /// Search status line; `None` hides the message.
    pub fn search_message(&self) -> Option<String> {
        (!self.query.is_empty()).then(|| format!("Search results for: \"{}\"", self.query))
    }
}
