//! Fills the latest-video slot with the demo card.

use leptos::mount::mount_to;
use leptos::prelude::*;
use web_sys::HtmlElement;

use super::{by_id, cast, document, selectors, set_style};
use crate::components::demo_video::DemoVideoCard;
use crate::error::SiteError;
use crate::state::demo_video::DEMO_VIDEO;

pub fn init() -> Result<(), SiteError> {
    let slot: HtmlElement = cast(by_id(&document()?, selectors::LATEST_VIDEO)?, selectors::LATEST_VIDEO)?;
    slot.set_inner_html("");
    for (property, value) in [
        ("display", "flex"),
        ("align-items", "center"),
        ("justify-content", "center"),
        ("background", "linear-gradient(135deg, #8B4513 0%, #2E8B57 100%)"),
    ] {
        set_style(&slot, property, value);
    }
    mount_to(slot, || view! { <DemoVideoCard video=DEMO_VIDEO/> }).forget();
    Ok(())
}
