//! Share button on video pages.
//!
//! Walks the tiers from [`crate::state::share::plan`] until one succeeds.
//! Every rejection is logged and hands over to the next tier.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Clipboard, Element, Navigator, Window};

use super::{by_id, document, listen, selectors, set_class, window};
use crate::config::SiteConfig;
use crate::error::{SiteError, report};
use crate::state::share::{Capabilities, ShareButtonState, SharePayload, ShareTier, plan};

pub fn init(config: &Rc<SiteConfig>) -> Result<(), SiteError> {
    let button = by_id(&document()?, selectors::VIDEO_SHARE)?;
    let state = Rc::new(RefCell::new(ShareButtonState::default()));
    let config = Rc::clone(config);
    let target = button.clone();

    listen(&target, "click", move |_| {
        let button = button.clone();
        let state = Rc::clone(&state);
        let config = Rc::clone(&config);
        leptos::task::spawn_local(async move {
            if let Err(err) = share_video(&button, &state, &config).await {
                log::warn!("share failed: {err}");
            }
        });
    })
}

fn current_payload(window: &Window, config: &SiteConfig) -> Result<SharePayload, SiteError> {
    let document = document()?;
    let title = document
        .get_element_by_id(selectors::VIDEO_TITLE)
        .and_then(|el| el.text_content())
        .unwrap_or_else(|| document.title());
    let url = window.location().href()?;
    Ok(SharePayload::new(&title, &url, &config.share_caption))
}

/// Look up an optional navigator member; `undefined` and `null` count as absent.
fn navigator_member(navigator: &Navigator, name: &str) -> Option<JsValue> {
    report(
        Reflect::get(navigator, &JsValue::from_str(name)),
        "navigator feature detection failed",
    )
    .filter(|member| !member.is_undefined() && !member.is_null())
}

fn native_share(navigator: &Navigator) -> Option<Function> {
    navigator_member(navigator, "share").and_then(|share| share.dyn_into::<Function>().ok())
}

/// `navigator.clipboard` is missing outside secure contexts even though the
/// typed getter claims it always exists.
fn clipboard(navigator: &Navigator) -> Option<Clipboard> {
    navigator_member(navigator, "clipboard").map(|member| member.unchecked_into::<Clipboard>())
}

fn capabilities(navigator: &Navigator) -> Capabilities {
    Capabilities {
        native_share: native_share(navigator).is_some(),
        clipboard: clipboard(navigator).is_some(),
    }
}

async fn share_video(
    button: &Element,
    state: &Rc<RefCell<ShareButtonState>>,
    config: &SiteConfig,
) -> Result<(), SiteError> {
    let window = window()?;
    let navigator = window.navigator();
    let payload = current_payload(&window, config)?;

    for tier in plan(capabilities(&navigator)) {
        let attempt = match tier {
            ShareTier::Native => share_natively(&navigator, &payload).await,
            ShareTier::Clipboard => copy_to_clipboard(&navigator, &payload).await.map(|()| {
                confirm_copied(button, state, config);
            }),
            ShareTier::Intent => open_intent(&window, &payload, config),
        };
        match attempt {
            Ok(()) => {
                log::debug!("shared via {tier:?}");
                return Ok(());
            }
            Err(err) => log::warn!("{tier:?} share failed: {err}"),
        }
    }
    Err(SiteError::Unsupported("share"))
}

async fn share_natively(navigator: &Navigator, payload: &SharePayload) -> Result<(), SiteError> {
    let share = native_share(navigator).ok_or(SiteError::Unsupported("navigator.share"))?;
    let data = Object::new();
    Reflect::set(&data, &"title".into(), &payload.title.as_str().into())?;
    Reflect::set(&data, &"text".into(), &payload.caption.as_str().into())?;
    Reflect::set(&data, &"url".into(), &payload.url.as_str().into())?;
    let promise: Promise = share.call1(navigator, &data)?.dyn_into()?;
    JsFuture::from(promise).await?;
    Ok(())
}

async fn copy_to_clipboard(navigator: &Navigator, payload: &SharePayload) -> Result<(), SiteError> {
    let clipboard = clipboard(navigator).ok_or(SiteError::Unsupported("navigator.clipboard"))?;
    JsFuture::from(clipboard.write_text(&payload.clipboard_text())).await?;
    Ok(())
}

fn confirm_copied(button: &Element, state: &Rc<RefCell<ShareButtonState>>, config: &SiteConfig) {
    let Some(confirm) = state.borrow_mut().confirm(&button.inner_html(), config.share_confirm_delay()) else {
        return;
    };
    button.set_inner_html(confirm.label);
    set_class(button, confirm.class, true);

    let button = button.clone();
    let state = Rc::clone(state);
    #[allow(clippy::cast_possible_truncation)]
    let millis = confirm.revert_after.as_millis() as u32;
    Timeout::new(millis, move || {
        if let Some(label) = state.borrow_mut().revert() {
            button.set_inner_html(&label);
            set_class(&button, confirm.class, false);
        }
    })
    .forget();
}

fn open_intent(window: &Window, payload: &SharePayload, config: &SiteConfig) -> Result<(), SiteError> {
    let url = payload.intent_url(&config.share_intent_url);
    report(window.open_with_url_and_target(&url, "_blank"), "share intent popup blocked")
        .flatten()
        .map(|_| ())
        .ok_or(SiteError::Unsupported("window.open"))
}
