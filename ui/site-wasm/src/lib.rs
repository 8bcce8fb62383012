//! Laurel Cottage Dental site enhancements (WASM).
//!
//! Progressive enhancement for the static marketing pages: header scroll
//! styling, the mobile menu, smooth in-page scrolling, contact form
//! validation, scroll reveal and phone link tracking. Each concern lives in
//! its own module and receives the nodes it controls explicitly.

pub mod anchors;
pub mod config;
pub mod contact;
pub mod dom;
pub mod header;
pub mod menu;
pub mod reveal;
pub mod tracking;

use tracing::{debug, error, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let doc = dom::document()?;
    if doc.ready_state() == "loading" {
        let cb = Closure::once(move || {
            if let Err(err) = init() {
                error!(?err, "site initialisation failed");
            }
        });
        let opts = web_sys::AddEventListenerOptions::new();
        opts.set_once(true);
        doc.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            cb.as_ref().unchecked_ref(),
            &opts,
        )?;
        cb.forget();
        Ok(())
    } else {
        init()
    }
}

/// Log a behavior that failed to wire without abandoning the others.
fn wire(behavior: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        warn!(behavior, ?err, "behavior disabled");
    }
}

/// Single initialisation pass: resolve nodes, then wire each behavior.
fn init() -> Result<(), JsValue> {
    let window = dom::window()?;
    let doc = dom::document()?;
    let config = config::load(&doc);
    let els = dom::Elements::bind(&doc)?;

    tracking::update_current_year(els.current_year.as_ref());

    match els.header.clone() {
        Some(el) => wire(
            "header",
            header::HeaderStyler::new(el, config.header_scroll_threshold).bind(&window),
        ),
        None => debug!("no #header, scroll styling disabled"),
    }

    let menu = match (els.mobile_menu.clone(), els.menu_toggle.clone()) {
        (Some(mobile_menu), Some(toggle)) => {
            let ctl = menu::MenuController::new(mobile_menu, toggle, els.body.clone());
            wire("mobile menu", ctl.bind(&els.mobile_menu_links));
            Some(ctl)
        }
        _ => {
            debug!("no #menuToggle / #mobileMenu, mobile menu disabled");
            None
        }
    };

    wire("anchors", anchors::bind(&doc, menu));

    match els.contact_form.clone() {
        Some(form) => wire(
            "contact form",
            contact::ContactForm::new(doc.clone(), form, config.status_message_ttl_ms).bind(),
        ),
        None => debug!("no #contactForm, form handling disabled"),
    }

    wire("scroll reveal", reveal::init(&doc, &window, &config));
    wire("call tracking", tracking::bind_call_tracking(&doc));

    info!("Laurel Cottage Dental - Site initialized");
    Ok(())
}
