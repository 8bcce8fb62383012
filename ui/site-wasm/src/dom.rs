//! DOM element bindings.
//!
//! All fixed page nodes are resolved once at startup into [`Elements`]. Every
//! node is optional: a page without a contact form simply has no form
//! behavior.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element, EventTarget, HtmlElement, HtmlFormElement, Window};

// ── Helpers ──

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

pub fn by_id_typed<T: JsCast>(doc: &Document, id: &str) -> Option<T> {
    doc.get_element_by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nl = doc.query_selector_all(selector)?;
    let mut v = Vec::with_capacity(nl.length() as usize);
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    Ok(v)
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

/// Attach a listener for the lifetime of the page.
pub fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static) -> Result<(), JsValue>
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Like [`listen`], registered with `{ passive: true }`.
pub fn listen_passive<E>(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), JsValue>
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let opts = AddEventListenerOptions::new();
    opts.set_passive(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &opts,
    )?;
    cb.forget();
    Ok(())
}

// ── Elements struct ──

/// Fixed page nodes used by the enhancement handlers.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    pub header: Option<Element>,
    pub menu_toggle: Option<Element>,
    pub mobile_menu: Option<Element>,
    pub mobile_menu_links: Vec<Element>,
    pub contact_form: Option<HtmlFormElement>,
    pub current_year: Option<Element>,
    pub body: Option<HtmlElement>,
}

impl Elements {
    /// Resolve all DOM references. Call once the document is interactive.
    pub fn bind(doc: &Document) -> Result<Elements, JsValue> {
        Ok(Elements {
            header: doc.get_element_by_id("header"),
            menu_toggle: doc.get_element_by_id("menuToggle"),
            mobile_menu: doc.get_element_by_id("mobileMenu"),
            mobile_menu_links: query_all(doc, ".mobile-menu__link")?,
            contact_form: by_id_typed::<HtmlFormElement>(doc, "contactForm"),
            current_year: doc.get_element_by_id("currentYear"),
            body: doc.body(),
        })
    }
}
