//! Busy state for the newsletter and contact submit buttons.
//!
//! The submit event is never cancelled: the browser posts the form to the
//! external form host as usual and this handler only swaps the button into a
//! disabled spinner until the restore delay elapses.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::HtmlButtonElement;

use super::{cast, document, listen, query, query_document};
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::state::form::{FormKind, SUBMIT_BUTTON_SELECTOR, SubmitState};

pub fn init(kind: FormKind, config: &Rc<SiteConfig>) -> Result<(), SiteError> {
    let form = query_document(&document()?, kind.selector())?;
    let button: HtmlButtonElement = cast(query(&form, SUBMIT_BUTTON_SELECTOR)?, SUBMIT_BUTTON_SELECTOR)?;
    let state = Rc::new(RefCell::new(SubmitState::new(kind)));
    let delay = config.form_restore_delay();

    listen(&form, "submit", move |_| {
        let Some(busy) = state.borrow_mut().begin(&button.inner_html(), delay) else {
            return;
        };
        button.set_inner_html(&busy.label);
        button.set_disabled(true);
        log::debug!("{} submitted; restoring button in {:?}", kind.selector(), busy.restore_after);

        let state = Rc::clone(&state);
        let button = button.clone();
        #[allow(clippy::cast_possible_truncation)]
        let millis = busy.restore_after.as_millis() as u32;
        Timeout::new(millis, move || {
            if let Some(label) = state.borrow_mut().restore() {
                button.set_inner_html(&label);
                button.set_disabled(false);
            }
        })
        .forget();
    })
}
