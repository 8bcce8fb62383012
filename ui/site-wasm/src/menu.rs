//! Mobile menu controller.
//!
//! The controller owns the [`MenuState`]; the `active` classes on
//! `#mobileMenu` / `#menuToggle` and the body scroll lock are rendered from
//! it on every transition and never read back.

use crate::dom;
use lc_site_core::menu::{ACTIVE_CLASS, MenuState};
use std::cell::Cell;
use std::rc::Rc;
use tracing::debug;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

#[derive(Clone)]
pub struct MenuController {
    menu: Element,
    toggle: Element,
    body: Option<HtmlElement>,
    state: Rc<Cell<MenuState>>,
}

impl MenuController {
    pub fn new(menu: Element, toggle: Element, body: Option<HtmlElement>) -> Self {
        Self {
            menu,
            toggle,
            body,
            state: Rc::new(Cell::new(MenuState::Closed)),
        }
    }

    pub fn state(&self) -> MenuState {
        self.state.get()
    }

    pub fn set(&self, next: MenuState) {
        self.state.set(next);
        dom::toggle_class(&self.menu, ACTIVE_CLASS, next.is_open());
        dom::toggle_class(&self.toggle, ACTIVE_CLASS, next.is_open());
        if let Some(body) = &self.body {
            let _ = body.style().set_property("overflow", next.body_overflow());
        }
    }

    pub fn toggle(&self) {
        let next = self.state().toggled();
        debug!(?next, "mobile menu toggled");
        self.set(next);
    }

    pub fn close(&self) {
        self.set(MenuState::Closed);
    }

    /// Wire the toggle button, and close the menu whenever one of its links
    /// is chosen.
    pub fn bind(&self, links: &[Element]) -> Result<(), JsValue> {
        let ctl = self.clone();
        dom::listen(&self.toggle, "click", move |_: web_sys::MouseEvent| ctl.toggle())?;

        for link in links {
            let ctl = self.clone();
            dom::listen(link, "click", move |_: web_sys::MouseEvent| ctl.close())?;
        }
        Ok(())
    }
}
