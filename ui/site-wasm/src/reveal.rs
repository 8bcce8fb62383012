//! Scroll-triggered card reveal.
//!
//! Cards start hidden and offset, and are revealed (staggered within each
//! observer batch) the first time they scroll into view. Skipped entirely
//! without `IntersectionObserver` or when reduced motion is requested.

use crate::dom;
use gloo_timers::callback::Timeout;
use lc_site_core::SiteConfig;
use lc_site_core::reveal::{self, BatchEntry, INDEX_ATTRIBUTE, RevealTracker};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CssStyleDeclaration, Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, SvgElement, Window,
};

/// Inline style of an HTML or SVG element.
fn inline_style(el: &Element) -> Option<CssStyleDeclaration> {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        return Some(html.style());
    }
    el.dyn_ref::<SvgElement>().map(|svg| svg.style())
}

fn set_style(el: &Element, opacity: &str, transform: &str) {
    if let Some(style) = inline_style(el) {
        let _ = style.set_property("opacity", opacity);
        let _ = style.set_property("transform", transform);
    }
}

fn prefers_reduced_motion(window: &Window) -> Result<bool, JsValue> {
    Ok(window
        .match_media(reveal::REDUCED_MOTION_QUERY)?
        .is_some_and(|mql| mql.matches()))
}

pub fn init(doc: &Document, window: &Window, config: &SiteConfig) -> Result<(), JsValue> {
    if !js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver"))? {
        debug!("IntersectionObserver unavailable, scroll reveal disabled");
        return Ok(());
    }
    if prefers_reduced_motion(window)? {
        debug!("reduced motion requested, scroll reveal disabled");
        return Ok(());
    }

    let mut targets: Vec<Element> = Vec::new();
    for el in dom::query_all(doc, &config.reveal_selector)? {
        let Some(style) = inline_style(&el) else {
            debug!(tag = %el.tag_name(), "reveal target has no inline style, skipped");
            continue;
        };
        el.set_attribute(INDEX_ATTRIBUTE, &targets.len().to_string())?;
        let _ = style.set_property("opacity", reveal::HIDDEN_OPACITY);
        let _ = style.set_property("transform", reveal::HIDDEN_TRANSFORM);
        let _ = style.set_property("transition", reveal::TRANSITION);
        targets.push(el);
    }

    let targets = Rc::new(targets);
    let tracker = Rc::new(RefCell::new(RevealTracker::new()));
    let stagger_ms = config.reveal_stagger_ms;

    let cards = targets.clone();
    let on_intersect = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        let mut batch = Vec::with_capacity(entries.length() as usize);
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let target = entry.target();
            let Some(index) = target
                .get_attribute(INDEX_ATTRIBUTE)
                .and_then(|raw| raw.parse::<usize>().ok())
            else {
                continue;
            };
            let intersecting = entry.is_intersecting();
            if intersecting {
                observer.unobserve(&target);
            }
            batch.push(BatchEntry {
                target: index,
                intersecting,
            });
        }

        for scheduled in tracker.borrow_mut().plan(&batch, stagger_ms) {
            if let Some(el) = cards.get(scheduled.target).cloned() {
                Timeout::new(scheduled.delay_ms, move || {
                    set_style(&el, reveal::SHOWN_OPACITY, reveal::SHOWN_TRANSFORM);
                })
                .forget();
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    options.set_root_margin(&config.reveal_root_margin);

    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
    for el in targets.iter() {
        observer.observe(el);
    }
    on_intersect.forget();

    debug!(count = targets.len(), "scroll reveal observing cards");
    Ok(())
}
