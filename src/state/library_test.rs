use super::*;

// =============================================================
// Categories
// =============================================================

#[test]
fn fixed_category_set() {
    let ids: Vec<_> = CATEGORIES.iter().map(|c| c.id).collect();
    assert_eq!(ids, ["all", "poetry", "spoken-word", "faith-journaling", "creative-writing"]);
    assert_eq!(find_category("poetry").map(|c| c.count), Some(10));
    assert!(find_category("horror").is_none());
}

#[test]
fn library_page_detection() {
    assert!(is_library_page("/videos.html", false));
    assert!(is_library_page("/index.html", true));
    assert!(!is_library_page("/about.html", false));
}

// =============================================================
// Selection
// =============================================================

#[test]
fn selecting_any_category_clears_all_siblings() {
    let mut state = LibraryState::default();
    for category in &CATEGORIES {
        assert!(state.select(category.id));
        for other in &CATEGORIES {
            assert_eq!(state.is_active(other.id), other.id == category.id);
        }
    }
}

#[test]
fn unknown_category_keeps_current_selection() {
    let mut state = LibraryState::default();
    state.select("poetry");
    assert!(!state.select("horror"));
    assert!(state.is_active("poetry"));
}

#[test]
fn filter_message_wording() {
    let mut state = LibraryState::default();
    assert_eq!(state.filter_message(), None);
    state.select("all");
    assert_eq!(state.filter_message().as_deref(), Some("Showing all videos"));
    state.select("spoken-word");
    assert_eq!(state.filter_message().as_deref(), Some("Showing spoken-word videos"));
}

// =============================================================
// Search
// =============================================================

#[test]
fn search_message_reflects_lowercased_query() {
    let mut state = LibraryState::default();
    state.set_query("Morning PAGES");
    assert_eq!(state.search_message().as_deref(), Some("Search results for: \"morning pages\""));
}

#[test]
fn empty_query_hides_search_message() {
    let mut state = LibraryState::default();
    state.set_query("poem");
    state.set_query("");
    assert_eq!(state.search_message(), None);
}

#[test]
fn search_does_not_touch_selection() {
    let mut state = LibraryState::default();
    state.select("poetry");
    state.set_query("verse");
    assert!(state.is_active("poetry"));
}
