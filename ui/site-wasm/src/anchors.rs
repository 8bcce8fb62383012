//! Smooth scrolling for in-page links.

use crate::dom;
use crate::menu::MenuController;
use lc_site_core::anchor::{self, AnchorAction, FRAGMENT_LINK_SELECTOR};
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

pub fn bind(doc: &Document, menu: Option<MenuController>) -> Result<(), JsValue> {
    for link in dom::query_all(doc, FRAGMENT_LINK_SELECTOR)? {
        let doc = doc.clone();
        let menu = menu.clone();
        dom::listen(&link, "click", move |e: web_sys::MouseEvent| {
            on_activate(&doc, menu.as_ref(), &e);
        })?;
    }
    Ok(())
}

fn on_activate(doc: &Document, menu: Option<&MenuController>, e: &web_sys::MouseEvent) {
    let Some(link) = e.current_target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };
    let href = link.get_attribute("href").unwrap_or_default();

    let id = match anchor::classify(&href) {
        AnchorAction::Passthrough => return,
        AnchorAction::Suppress => {
            e.prevent_default();
            return;
        }
        AnchorAction::ScrollTo(id) => {
            e.prevent_default();
            id
        }
    };

    let target = doc.get_element_by_id(id);
    if let Some(menu) = menu {
        menu.set(anchor::menu_after_activation(menu.state(), target.is_some()));
    }

    match target {
        Some(target) => {
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            opts.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
        }
        None => debug!(href = %href, "no element for fragment link"),
    }
}
