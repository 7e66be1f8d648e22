//! Mobile menu toggle and active-link highlighting.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::{by_id, document, listen, query_all, selectors, set_class, set_style, window};
use crate::error::SiteError;
use crate::state::nav::{MenuState, active_flags, bar_styles, current_page_name};

const ACTIVE_CLASS: &str = "active";

/// Handles the menu closure needs to render an open/closed state.
struct MenuView {
    toggle: Element,
    panel: Element,
    bars: Vec<HtmlElement>,
}

impl MenuView {
    fn render(&self, open: bool) {
        set_class(&self.toggle, ACTIVE_CLASS, open);
        set_class(&self.panel, ACTIVE_CLASS, open);
        for (bar, style) in self.bars.iter().zip(bar_styles(open)) {
            set_style(bar, "transform", style.transform);
            set_style(bar, "opacity", style.opacity);
        }
    }
}

pub fn init_menu() -> Result<(), SiteError> {
    let document = document()?;
    let toggle = by_id(&document, selectors::MENU_TOGGLE)?;
    let panel = by_id(&document, selectors::MAIN_NAV)?;
    let bars = toggle.query_selector_all("span")?;
    let bars = (0..bars.length())
        .filter_map(|i| bars.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .take(3)
        .collect();

    let state = Rc::new(Cell::new(MenuState { open: panel.class_list().contains(ACTIVE_CLASS) }));
    let view = Rc::new(MenuView { toggle: toggle.clone(), panel, bars });

    {
        let state = Rc::clone(&state);
        let view = Rc::clone(&view);
        listen(&toggle, "click", move |_| {
            let mut menu = state.get();
            view.render(menu.toggle());
            state.set(menu);
        })?;
    }

    for link in query_all::<Element>(&document, selectors::NAV_LINK)? {
        let state = Rc::clone(&state);
        let view = Rc::clone(&view);
        listen(&link, "click", move |_| {
            let mut menu = state.get();
            if menu.close() {
                view.render(false);
            }
            state.set(menu);
        })?;
    }
    Ok(())
}

pub fn highlight_current_page() -> Result<(), SiteError> {
    let pathname = window()?.location().pathname()?;
    let page = current_page_name(&pathname);
    let links = query_all::<Element>(&document()?, selectors::NAV_LINK)?;
    let hrefs: Vec<String> = links.iter().map(|link| link.get_attribute("href").unwrap_or_default()).collect();
    let flags = active_flags(page, hrefs.iter().map(String::as_str));
    for (link, active) in links.iter().zip(flags) {
        set_class(link, ACTIVE_CLASS, active);
    }
    log::debug!("highlighted nav for page {page}");
    Ok(())
}
