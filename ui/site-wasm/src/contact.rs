//! Contact form handling.
//!
//! Submission never leaves the page: the form is validated locally, a status
//! message is shown at the top of the form, and a successful enquiry is only
//! written to the diagnostic log.

use crate::dom;
use gloo_timers::callback::Timeout;
use lc_site_core::contact::{self, FormSnapshot};
use lc_site_core::status::{MESSAGE_CLASS, StatusMessage, StatusSlot};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, FormData, HtmlFormElement};

#[derive(Clone)]
pub struct ContactForm {
    doc: Document,
    form: HtmlFormElement,
    ttl_ms: u32,
    slot: Rc<RefCell<StatusSlot>>,
    removal: Rc<RefCell<Option<Timeout>>>,
}

impl ContactForm {
    pub fn new(doc: Document, form: HtmlFormElement, ttl_ms: u32) -> Self {
        Self {
            doc,
            form,
            ttl_ms,
            slot: Rc::new(RefCell::new(StatusSlot::new())),
            removal: Rc::new(RefCell::new(None)),
        }
    }

    pub fn bind(&self) -> Result<(), JsValue> {
        let this = self.clone();
        dom::listen(&self.form, "submit", move |e: web_sys::Event| {
            e.prevent_default();
            if let Err(err) = this.on_submit() {
                warn!(?err, "contact form submit failed");
            }
        })
    }

    fn on_submit(&self) -> Result<(), JsValue> {
        let snapshot = self.snapshot()?;
        let submission = contact::submit(&snapshot);
        self.show(&submission.message)?;

        if submission.reset {
            self.form.reset();
            let data = serde_json::to_string(&snapshot).unwrap_or_default();
            info!(form = %data, "Form submitted");
        }
        Ok(())
    }

    /// Every text entry of the form, trimmed. File inputs are skipped.
    fn snapshot(&self) -> Result<FormSnapshot, JsValue> {
        let data = FormData::new_with_form(&self.form)?;
        let mut entries = Vec::new();
        if let Some(iter) = js_sys::try_iter(&data)? {
            for item in iter {
                let pair = js_sys::Array::from(&item?);
                if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
                    entries.push((name, value));
                }
            }
        }
        Ok(FormSnapshot::from_entries(entries))
    }

    /// Replace whatever message is displayed with `message`, and schedule
    /// its removal. The previous message's removal timer is cancelled.
    fn show(&self, message: &StatusMessage) -> Result<(), JsValue> {
        if let Some(existing) = self.form.query_selector(&format!(".{MESSAGE_CLASS}"))? {
            existing.remove();
        }

        let shown = self.slot.borrow_mut().show();
        if let Some(previous) = shown.superseded {
            debug!(previous, generation = shown.generation, "status message superseded");
        }
        self.removal.borrow_mut().take();

        let el: Element = self.doc.create_element("div")?;
        el.set_class_name(&message.kind.class_name());
        el.set_text_content(Some(&message.text));
        el.set_attribute("style", &message.kind.inline_style())?;
        self.form.insert_before(&el, self.form.first_child().as_ref())?;

        let slot = self.slot.clone();
        let timeout = Timeout::new(self.ttl_ms, move || {
            if slot.borrow_mut().expire(shown.generation) {
                el.remove();
            }
        });
        *self.removal.borrow_mut() = Some(timeout);
        Ok(())
    }
}
