//! FAQ accordion binding

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::dom;
use super::handle::Handle;
use crate::core::Accordion;

struct FaqItem {
    item: Element,
    answer: Element,
}

impl FaqItem {
    fn set_open(&self, open: bool) {
        dom::set_class(&self.item, "open", open);
        if open {
            let height = self.answer.scroll_height();
            dom::set_style(&self.answer, "max-height", &format!("{height}px"));
        } else {
            dom::remove_style(&self.answer, "max-height");
        }
    }
}

pub fn init_faq(root: &Element) -> Result<Option<Handle>, JsValue> {
    let mut questions = Vec::new();
    let mut items = Vec::new();
    for item in dom::query_all(root, ".faq-item") {
        let (Some(question), Some(answer)) = (dom::query(&item, ".faq-question"), dom::query(&item, ".faq-answer")) else {
            continue;
        };
        questions.push(question);
        items.push(FaqItem { item, answer });
    }
    if items.is_empty() {
        return Ok(None);
    }

    // Markup may ship with items pre-opened; keep only the first of them.
    let mut accordion = Accordion::new(items.len());
    if let Some(first) = items.iter().position(|it| dom::has_class(&it.item, "open")) {
        accordion.toggle(first);
    }
    for (index, item) in items.iter().enumerate() {
        if dom::has_class(&item.item, "open") != accordion.is_open(index) {
            item.set_open(accordion.is_open(index));
        }
    }

    let accordion = Rc::new(RefCell::new(accordion));
    let items = Rc::new(items);

    let mut handle = Handle::new("faq");
    for (index, question) in questions.iter().enumerate() {
        let (accordion, items) = (accordion.clone(), items.clone());
        handle.listen(question, "click", move |_| {
            let change = accordion.borrow_mut().toggle(index);
            if let Some(closed) = change.closed {
                items[closed].set_open(false);
            }
            if let Some(opened) = change.opened {
                items[opened].set_open(true);
            }
        })?;
    }
    Ok(Some(handle))
}
