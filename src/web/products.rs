//! Product filter tabs and the product detail modal

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};

use super::dom;
use super::handle::Handle;
use crate::core::nav;
use crate::core::{CategoryFilter, CloseTrigger, ProductDetails, ProductFilter, ProductModal};
use crate::theme::CARD_FADE_IN;

pub fn init_filter(root: &Element) -> Result<Option<Handle>, JsValue> {
    let tabs = dom::query_all(root, ".filter-tab");
    if tabs.is_empty() {
        return Ok(None);
    }
    let cards = dom::query_all(root, ".product-card");

    let filter = ProductFilter::new(
        tabs.iter()
            .map(|tab| CategoryFilter::from_tab(dom::data(tab, "filter").as_deref()))
            .collect(),
        cards.iter().map(|card| dom::data(card, "category")).collect(),
    );
    let filter = Rc::new(RefCell::new(filter));
    let tabs = Rc::new(tabs);
    let cards = Rc::new(cards);

    let mut handle = Handle::new("product-filter");
    for (index, tab) in tabs.iter().enumerate() {
        let (filter, tabs, cards) = (filter.clone(), tabs.clone(), cards.clone());
        handle.listen(tab, "click", move |_| {
            let mut filter = filter.borrow_mut();
            if !filter.activate(index) {
                return;
            }
            for (i, tab) in tabs.iter().enumerate() {
                dom::set_class(tab, "active", i == index);
            }
            for (card, visible) in cards.iter().zip(filter.visibility()) {
                dom::set_class(card, "hidden", !visible);
                if visible {
                    dom::set_style(card, "animation", CARD_FADE_IN);
                }
            }
        })?;
    }
    Ok(Some(handle))
}

/// Slots inside the overlay that receive a card's details
struct ModalView {
    overlay: Element,
    icon: Option<Element>,
    name: Option<Element>,
    category: Option<Element>,
    description: Option<Element>,
    features: Option<Element>,
}

impl ModalView {
    fn new(overlay: Element) -> Self {
        Self {
            icon: dom::query(&overlay, ".modal-icon"),
            name: dom::query(&overlay, ".modal-name"),
            category: dom::query(&overlay, ".modal-cat"),
            description: dom::query(&overlay, ".modal-desc"),
            features: dom::query(&overlay, ".modal-feature-list"),
            overlay,
        }
    }

    fn show(&self, details: &ProductDetails) -> Result<(), JsValue> {
        let fields = [
            (&self.icon, &details.icon),
            (&self.name, &details.name),
            (&self.category, &details.category),
            (&self.description, &details.description),
        ];
        for (slot, text) in fields {
            if let Some(slot) = slot {
                dom::set_text(slot, text);
            }
        }

        if let Some(list) = &self.features {
            list.set_text_content(None);
            let document = dom::document().ok_or("no document")?;
            for feature in &details.features {
                let item = document.create_element("li")?;
                item.set_text_content(Some(feature));
                list.append_child(&item)?;
            }
        }

        dom::set_class(&self.overlay, "open", true);
        dom::set_body_overflow(nav::body_overflow(true));
        Ok(())
    }

    fn hide(&self) {
        dom::set_class(&self.overlay, "open", false);
        dom::set_body_overflow(nav::body_overflow(false));
    }
}

pub fn init_modal(root: &Element) -> Result<Option<Handle>, JsValue> {
    let Some(overlay) = dom::by_id(root, "product-modal") else {
        return Ok(None);
    };
    let view = Rc::new(ModalView::new(overlay.clone()));
    let modal = Rc::new(RefCell::new(ProductModal::default()));

    let close = {
        let (view, modal) = (view.clone(), modal.clone());
        move |trigger: CloseTrigger| {
            // Hide even when our state says closed, so stale markup is reset
            modal.borrow_mut().close(trigger);
            view.hide();
        }
    };

    let mut handle = Handle::new("product-modal");

    for card in dom::query_all(root, ".product-card") {
        let (view, modal) = (view.clone(), modal.clone());
        let source = card.clone();
        handle.listen(&card, "click", move |_| {
            let details = ProductDetails::from_attributes(|key| dom::data(&source, key));
            if let Err(e) = view.show(&details) {
                tracing::warn!(error = ?e, "Failed to fill product modal");
                return;
            }
            modal.borrow_mut().open(details);
        })?;
    }

    if let Some(button) = dom::query(&overlay, ".modal-close") {
        let close = close.clone();
        handle.listen(&button, "click", move |_| close(CloseTrigger::Button))?;
    }

    {
        let close = close.clone();
        let backdrop = overlay.clone();
        handle.listen(&overlay, "click", move |event| {
            let on_backdrop = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .is_some_and(|t| t == backdrop);
            if on_backdrop {
                close(CloseTrigger::Backdrop);
            }
        })?;
    }

    let document = dom::document().ok_or("no document")?;
    handle.listen(&document, "keydown", move |event| {
        let is_escape = event
            .dyn_ref::<KeyboardEvent>()
            .is_some_and(|e| e.key() == "Escape");
        if is_escape && modal.borrow().is_open() {
            close(CloseTrigger::Escape);
        }
    })?;

    Ok(Some(handle))
}
