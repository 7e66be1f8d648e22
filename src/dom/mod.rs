//! Browser bindings for the site controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each submodule owns one controller. Its `init` looks up the elements it
//! needs once, moves the handles into its event closures, and returns
//! `SiteError::MissingElement` when the page lacks them. Controllers never
//! reach into each other's elements.

pub mod demo_video;
pub mod footer;
pub mod forms;
pub mod header;
pub mod lazy;
pub mod library;
pub mod nav;
pub mod selectors;
pub mod share;
pub mod styles;
pub mod theme;

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::error::{SiteError, report};

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::MissingElement("window"))
}

pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::MissingElement("document"))
}

pub fn by_id(document: &Document, id: &'static str) -> Result<Element, SiteError> {
    document.get_element_by_id(id).ok_or(SiteError::MissingElement(id))
}

pub fn query(root: &Element, selector: &'static str) -> Result<Element, SiteError> {
    root.query_selector(selector)?.ok_or(SiteError::MissingElement(selector))
}

pub fn query_document(document: &Document, selector: &'static str) -> Result<Element, SiteError> {
    document.query_selector(selector)?.ok_or(SiteError::MissingElement(selector))
}

/// All elements matching `selector` that are of type `T`.
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, SiteError> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

/// Downcast a looked-up element, reporting a type mismatch as missing.
pub fn cast<T: JsCast>(element: Element, name: &'static str) -> Result<T, SiteError> {
    element.dyn_into::<T>().map_err(|_| SiteError::MissingElement(name))
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let class_list = element.class_list();
    let result = if on { class_list.add_1(class) } else { class_list.remove_1(class) };
    report(result, "class toggle failed");
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    report(element.style().set_property(property, value), "style update failed");
}

/// Attach a listener for the lifetime of the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), SiteError> {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Read the inline override block and resolve the effective config.
pub fn load_config() -> (SiteConfig, Option<SiteError>) {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    SiteConfig::resolve(raw.as_deref())
}

/// Run every controller now, or on `DOMContentLoaded` if still parsing.
pub fn run_when_ready(config: Rc<SiteConfig>) {
    let document = match document() {
        Ok(document) => document,
        Err(err) => {
            log::warn!("site behaviors not attached: {err}");
            return;
        }
    };
    if document.ready_state() != "loading" {
        run(&config);
        return;
    }
    let mut pending = Some(config);
    let attached = listen(&document, "DOMContentLoaded", move |_| {
        if let Some(config) = pending.take() {
            run(&config);
        }
    });
    if let Err(err) = attached {
        log::warn!("could not wait for DOMContentLoaded: {err}");
    }
}

/// Initialize each controller independently.
pub fn run(config: &Rc<SiteConfig>) {
    let mut outcomes = vec![
        finish("styles", styles::init()),
        finish("footer", footer::init()),
        finish("menu", nav::init_menu()),
        finish("nav highlight", nav::highlight_current_page()),
        finish("theme", theme::init(config)),
    ];
    for kind in crate::state::form::FormKind::ALL {
        outcomes.push(finish(kind.selector(), forms::init(kind, config)));
    }
    outcomes.extend([
        finish("share", share::init(config)),
        finish("lazy images", lazy::init()),
        finish("header", header::init(config)),
        finish("demo video", demo_video::init()),
        finish("video library", library::init()),
    ]);
    let ready = outcomes.iter().filter(|ready| **ready).count();
    log::info!("site behaviors attached: {ready} of {}", outcomes.len());
}

fn finish(name: &str, result: Result<(), SiteError>) -> bool {
    match result {
        Ok(()) => {
            log::debug!("{name}: ready");
            true
        }
        Err(err) if err.is_routine() => {
            log::debug!("{name}: skipped ({err})");
            false
        }
        Err(err) => {
            log::warn!("{name}: {err}");
            false
        }
    }
}
