//! Fire-once page initializers: the footer year and phone link tracking.

use crate::dom;
use lc_site_core::tracking::{AnalyticsEvent, PHONE_LINK_SELECTOR};
use tracing::info;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

pub fn update_current_year(el: Option<&Element>) {
    if let Some(el) = el {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}

/// Log every `tel:` link click. Navigation is left to the browser.
pub fn bind_call_tracking(doc: &Document) -> Result<(), JsValue> {
    for link in dom::query_all(doc, PHONE_LINK_SELECTOR)? {
        dom::listen(&link, "click", move |_: web_sys::MouseEvent| {
            info!(event = %AnalyticsEvent::phone_call().to_json(), "Phone call initiated");
        })?;
    }
    Ok(())
}
