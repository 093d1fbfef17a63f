//! Contact form binding
//!
//! Validation is client-side only. A valid submission shows a loading state
//! and, after a fixed delay, swaps the form for the success view; no request
//! leaves the browser.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use super::dom;
use super::handle::{Handle, Liveness};
use crate::core::form::FieldKind;
use crate::core::{ContactForm, SiteConfig, SubmitOutcome};

fn field_value(field: &Element) -> String {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

fn field_kind(field: &Element) -> FieldKind {
    FieldKind::from_input_type(field.get_attribute("type").as_deref())
}

/// Show or clear a field's inline error on its enclosing `.form-group`.
fn show_field_error(field: &Element, error: Option<String>) {
    let Some(group) = field.closest(".form-group").ok().flatten() else {
        return;
    };
    dom::set_class(&group, "error", error.is_some());
    if let Some(message) = dom::query(&group, ".form-error") {
        dom::set_text(&message, error.as_deref().unwrap_or_default());
    }
}

async fn finish_send(form_el: Element, success: Option<Element>, delay_ms: u32, state: Rc<RefCell<ContactForm>>, alive: Liveness) {
    if let Err(e) = dom::sleep_ms(delay_ms).await {
        tracing::warn!(error = ?e, "Send delay timer failed");
    }
    if !alive.is_alive() || !state.borrow_mut().complete_send() {
        return;
    }
    dom::set_style(&form_el, "display", "none");
    if let Some(success) = success {
        dom::set_style(&success, "display", "block");
    }
    info!("Contact form sent (simulated)");
}

pub fn init_contact_form(root: &Element, config: &SiteConfig) -> Result<Option<Handle>, JsValue> {
    let Some(form_el) = dom::by_id(root, "contact-form") else {
        return Ok(None);
    };
    let fields = Rc::new(dom::query_all(&form_el, "[required]"));
    let state = Rc::new(RefCell::new(ContactForm::default()));
    let delay_ms = config.form.send_delay_ms;

    let mut handle = Handle::new("contact-form");
    let alive = handle.liveness();
    {
        let fields = fields.clone();
        let form = form_el.clone();
        let success_root = root.clone();
        handle.listen(&form_el, "submit", move |event| {
            event.prevent_default();

            let values: Vec<(FieldKind, String)> =
                fields.iter().map(|f| (field_kind(f), field_value(f))).collect();
            let outcome = state
                .borrow_mut()
                .submit(values.iter().map(|(kind, value)| (*kind, value.as_str())));

            let report = match outcome {
                SubmitOutcome::Ignored => {
                    debug!("Submit ignored, send already in progress");
                    return;
                }
                SubmitOutcome::Rejected(ref report) | SubmitOutcome::Sending(ref report) => report.clone(),
            };
            for (field, result) in fields.iter().zip(&report) {
                show_field_error(field, result.err().map(|e| e.to_string()));
            }
            if !matches!(outcome, SubmitOutcome::Sending(_)) {
                return;
            }

            if let Some(button) = dom::query(&form, ".btn-submit") {
                dom::set_class(&button, "loading", true);
                dom::set_text(&button, "Sending…");
            }
            let success = dom::query(&success_root, ".form-success");
            wasm_bindgen_futures::spawn_local(finish_send(
                form.clone(),
                success,
                delay_ms,
                state.clone(),
                alive.clone(),
            ));
        })?;
    }

    for field in fields.iter() {
        let source = field.clone();
        handle.listen(field, "input", move |_| {
            if !field_value(&source).trim().is_empty() {
                if let Some(group) = source.closest(".form-group").ok().flatten() {
                    dom::set_class(&group, "error", false);
                }
            }
        })?;
    }

    Ok(Some(handle))
}
