//! Scroll listener toggling the header shadow.

use std::cell::Cell;
use std::rc::Rc;

use super::{document, query_document, selectors, set_class, window};
use crate::config::SiteConfig;
use crate::error::{SiteError, report};
use crate::state::header::{HeaderState, SCROLLED_CLASS};

pub fn init(config: &Rc<SiteConfig>) -> Result<(), SiteError> {
    let window = window()?;
    let header = query_document(&document()?, selectors::HEADER)?;
    let threshold = config.scroll_threshold;
    let state = Rc::new(Cell::new(HeaderState {
        scrolled: header.class_list().contains(SCROLLED_CLASS),
    }));

    let scroll_source = window.clone();
    super::listen(&window, "scroll", move |_| {
        let Some(offset) = report(scroll_source.scroll_y(), "scrollY unavailable") else {
            return;
        };
        let mut next = state.get();
        if let Some(scrolled) = next.on_scroll(offset, threshold) {
            set_class(&header, SCROLLED_CLASS, scrolled);
        }
        state.set(next);
    })
}
