//! Header scroll styling.

use crate::dom;
use lc_site_core::header::{SCROLLED_CLASS, is_scrolled};
use wasm_bindgen::prelude::*;
use web_sys::{Element, Window};

pub struct HeaderStyler {
    header: Element,
    threshold: f64,
}

impl HeaderStyler {
    pub fn new(header: Element, threshold: f64) -> Self {
        Self { header, threshold }
    }

    pub fn apply(&self, scroll_y: f64) {
        dom::toggle_class(&self.header, SCROLLED_CLASS, is_scrolled(scroll_y, self.threshold));
    }

    /// Apply once for the current offset, then on every scroll.
    pub fn bind(self, window: &Window) -> Result<(), JsValue> {
        self.apply(window.scroll_y()?);

        let win = window.clone();
        dom::listen_passive(window, "scroll", move |_: web_sys::Event| {
            if let Ok(scroll_y) = win.scroll_y() {
                self.apply(scroll_y);
            }
        })
    }
}
