//! Category tiles and status lines for the video library page.
//!
//! ARCHITECTURE
//! ============
//! Both views read one shared `RwSignal<LibraryState>`. The tiles are mounted
//! into the page's category container; the status lines are mounted just
//! above the video grid. The search input lives in the static markup and
//! writes into the same signal from the `dom` layer.

use leptos::prelude::*;

use crate::state::library::{CATEGORIES, LibraryState, VideoCategory};

/// Clickable category tiles; the clicked tile becomes the only active one.
#[component]
pub fn VideoCategories(library: RwSignal<LibraryState>) -> impl IntoView {
    CATEGORIES
        .iter()
        .map(|category| view! { <CategoryTile category=*category library=library/> })
        .collect_view()
}

#[component]
fn CategoryTile(category: VideoCategory, library: RwSignal<LibraryState>) -> impl IntoView {
    let is_active = move || library.with(|state| state.is_active(category.id));
    let on_click = move |_| {
        library.update(|state| {
            state.select(category.id);
        });
        #[cfg(feature = "hydrate")]
        log::debug!("filtering videos by category: {}", category.id);
    };

    view! {
        <div class="video-category" class:active=is_active data-category=category.id on:click=on_click>
            <div class="category-icon">
                <i class=category.icon></i>
            </div>
            <div class="category-info">
                <h4>{category.name}</h4>
                <p>{format!("{} videos", category.count)}</p>
            </div>
        </div>
    }
}

/// Filter and search status lines; each is hidden until it has text.
#[component]
pub fn LibraryStatus(library: RwSignal<LibraryState>) -> impl IntoView {
    let filter_message = move || library.with(LibraryState::filter_message);
    let search_message = move || library.with(LibraryState::search_message);

    view! {
        <div
            id="filter-message"
            class="filter-message"
            style:display=move || if filter_message().is_some() { "block" } else { "none" }
        >
            {move || filter_message().unwrap_or_default()}
        </div>
        <div
            id="search-message"
            class="search-message"
            style:display=move || if search_message().is_some() { "block" } else { "none" }
        >
            {move || search_message().unwrap_or_default()}
        </div>
    }
}
