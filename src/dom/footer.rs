//! Current year in the footer.

use super::{by_id, document, selectors};
use crate::error::SiteError;

pub fn init() -> Result<(), SiteError> {
    let year_span = by_id(&document()?, selectors::CURRENT_YEAR)?;
    let year = js_sys::Date::new_0().get_full_year();
    year_span.set_text_content(Some(&year.to_string()));
    Ok(())
}
