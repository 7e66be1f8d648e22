//! Dark mode toggle bound to `#themeToggle`.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlLinkElement, HtmlStyleElement, Storage};

use super::{by_id, document, listen, selectors, set_class, window};
use crate::config::SiteConfig;
use crate::error::{SiteError, report};
use crate::state::theme::{Theme, ThemeRender, resolve_initial, startup_render, toggle};

struct ThemeView {
    body: HtmlElement,
    stylesheet: Option<Element>,
    storage: Option<Storage>,
    config: Rc<SiteConfig>,
}

impl ThemeView {
    fn current(&self) -> Theme {
        Theme::from_body(self.body.class_list().contains(&self.config.dark_class))
    }

    fn render(&self, render: ThemeRender) {
        set_class(&self.body, &self.config.dark_class, render.body_dark_class);
        if let Some(sheet) = &self.stylesheet {
            set_disabled(sheet, render.stylesheet_disabled);
        }
        if let Some(storage) = &self.storage {
            report(
                storage.set_item(&self.config.theme_storage_key, render.stored),
                "theme preference not saved",
            );
        }
    }
}

/// The alternate sheet may be a `<link>` or an inline `<style>`.
fn set_disabled(sheet: &Element, disabled: bool) {
    if let Some(link) = sheet.dyn_ref::<HtmlLinkElement>() {
        link.set_disabled(disabled);
    } else if let Some(style) = sheet.dyn_ref::<HtmlStyleElement>() {
        style.set_disabled(disabled);
    }
}

fn prefers_dark(window: &web_sys::Window) -> bool {
    report(window.match_media("(prefers-color-scheme: dark)"), "color-scheme query failed")
        .flatten()
        .map_or(false, |mq| mq.matches())
}

pub fn init(config: &Rc<SiteConfig>) -> Result<(), SiteError> {
    let window = window()?;
    let document = document()?;
    let button = by_id(&document, selectors::THEME_TOGGLE)?;
    let body = document.body().ok_or(SiteError::MissingElement("body"))?;
    let storage = report(window.local_storage(), "localStorage unavailable").flatten();

    let stored = storage
        .as_ref()
        .and_then(|s| report(s.get_item(&config.theme_storage_key), "theme preference unreadable"))
        .flatten();
    let initial = resolve_initial(stored.as_deref(), prefers_dark(&window));

    let view = ThemeView {
        body,
        stylesheet: document.get_element_by_id(&config.dark_stylesheet_id),
        storage,
        config: Rc::clone(config),
    };
    if let Some(render) = startup_render(initial) {
        view.render(render);
    }
    log::debug!("theme at startup: {}", initial.as_str());

    listen(&button, "click", move |_| {
        let (next, render) = toggle(view.current());
        view.render(render);
        log::debug!("theme toggled to {}", next.as_str());
    })
}
