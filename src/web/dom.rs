//! Thin DOM helpers; lookups return `Option` so absent elements skip a feature

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub fn body() -> Option<HtmlElement> {
    document().and_then(|d| d.body())
}

pub fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn by_id(root: &Element, id: &str) -> Option<Element> {
    query(root, &format!("#{id}"))
}

/// Value of `data-{key}`
pub fn data(el: &Element, key: &str) -> Option<String> {
    el.get_attribute(&format!("data-{key}"))
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let result = if on { list.add_1(class) } else { list.remove_1(class) };
    result.ok();
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        el.style().set_property(property, value).ok();
    }
}

pub fn remove_style(el: &Element, property: &str) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        el.style().remove_property(property).ok();
    }
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

/// Lock or release page scrolling via `body.style.overflow`
pub fn set_body_overflow(value: &str) {
    if let Some(body) = body() {
        body.style().set_property("overflow", value).ok();
    }
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Resolves after `ms` milliseconds via `setTimeout`.
pub async fn sleep_ms(ms: u32) -> Result<(), JsValue> {
    let window = window().ok_or("no window")?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let delay = i32::try_from(ms).unwrap_or(i32::MAX);
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, delay) {
            reject.call1(&JsValue::NULL, &e).ok();
        }
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.map(|_| ())
}
