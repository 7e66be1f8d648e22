//! `IntersectionObserver`-driven image loading with an eager fallback.

use js_sys::{Array, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlImageElement, IntersectionObserver, IntersectionObserverEntry};

use super::{document, query_all, set_class, window};
use crate::error::{SiteError, report};
use crate::state::lazy::{DEFERRED_ATTR, DEFERRED_SELECTOR, LOADED_CLASS, LazyImage, LoadStrategy, Reveal};

fn model(img: &HtmlImageElement) -> LazyImage {
    LazyImage::new(
        img.get_attribute(DEFERRED_ATTR).unwrap_or_default(),
        img.class_list().contains(LOADED_CLASS),
    )
}

fn apply(img: &HtmlImageElement, reveal: &Reveal) {
    img.set_src(&reveal.src);
    set_class(img, LOADED_CLASS, true);
}

pub fn init() -> Result<(), SiteError> {
    let window = window()?;
    let images = query_all::<HtmlImageElement>(&document()?, DEFERRED_SELECTOR)?;
    let supported = report(
        Reflect::has(&window, &"IntersectionObserver".into()),
        "IntersectionObserver detection failed",
    )
    .unwrap_or(false);

    match LoadStrategy::detect(supported) {
        LoadStrategy::Eager => {
            for img in &images {
                if let Some(reveal) = model(img).reveal_now() {
                    apply(img, &reveal);
                }
            }
            log::debug!("revealed {} images eagerly", images.len());
        }
        LoadStrategy::Observe => {
            let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                |entries: Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        let Ok(img) = entry.target().dyn_into::<HtmlImageElement>() else {
                            continue;
                        };
                        if let Some(reveal) = model(&img).on_visibility(entry.is_intersecting()) {
                            apply(&img, &reveal);
                            if reveal.unobserve {
                                observer.unobserve(&img);
                            }
                        }
                    }
                },
            );
            let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
            callback.forget();
            for img in &images {
                observer.observe(img);
            }
            log::debug!("observing {} deferred images", images.len());
        }
    }
    Ok(())
}
