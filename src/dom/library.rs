//! Mounts the video library placeholder views and wires the search box.

use leptos::mount::mount_to;
use leptos::prelude::*;
use web_sys::{HtmlElement, HtmlInputElement};

use super::{cast, document, listen, selectors, window};
use crate::components::video_library::{LibraryStatus, VideoCategories};
use crate::error::SiteError;
use crate::state::library::{LibraryState, is_library_page};

pub fn init() -> Result<(), SiteError> {
    let document = document()?;
    let pathname = window()?.location().pathname()?;
    let container = document.get_element_by_id(selectors::VIDEO_CATEGORIES);
    if !is_library_page(&pathname, container.is_some()) {
        return Err(SiteError::MissingElement(selectors::VIDEO_CATEGORIES));
    }

    let library = RwSignal::new(LibraryState::default());

    if let Some(container) = container {
        let container: HtmlElement = cast(container, selectors::VIDEO_CATEGORIES)?;
        mount_to(container, move || view! { <VideoCategories library=library/> }).forget();
    }

    // Status lines sit directly above the grid; pages without a grid get none.
    if let Some(grid) = document.query_selector(selectors::VIDEO_GRID)? {
        if let Some(parent) = grid.parent_node() {
            let host: HtmlElement = cast(document.create_element("div")?, "library status host")?;
            host.set_class_name("library-status");
            parent.insert_before(&host, Some(&*grid))?;
            mount_to(host, move || view! { <LibraryStatus library=library/> }).forget();
        }
    }

    let Some(search) = document.get_element_by_id(selectors::VIDEO_SEARCH) else {
        return Ok(());
    };
    let search: HtmlInputElement = cast(search, selectors::VIDEO_SEARCH)?;
    let input = search.clone();
    listen(&search, "input", move |_| {
        let query = input.value();
        library.update(|state| state.set_query(&query));
        log::debug!("searching videos for: {}", query.to_lowercase());
    })
}
