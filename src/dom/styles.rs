//! Injects the behavior stylesheet into `<head>`.

use super::document;
use crate::error::SiteError;
use crate::styles::{BEHAVIOR_CSS, STYLE_ELEMENT_ID};

pub fn init() -> Result<(), SiteError> {
    let document = document()?;
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }
    let head = document.head().ok_or(SiteError::MissingElement("head"))?;
    let style = document.create_element("style")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(BEHAVIOR_CSS));
    head.append_child(&style)?;
    Ok(())
}
