//! `[data-tooltip]` hover tooltips

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::dom;
use super::handle::Handle;
use crate::core::tooltip::{place_above, Rect};
use crate::theme::TOOLTIP_STYLE;

pub fn init_tooltips(root: &Element) -> Result<Option<Handle>, JsValue> {
    let anchors = dom::query_all(root, "[data-tooltip]");
    if anchors.is_empty() {
        return Ok(None);
    }
    let document = dom::document().ok_or("no document")?;
    let body = dom::body().ok_or("no body")?;
    let window = dom::window().ok_or("no window")?;

    let mut handle = Handle::new("tooltips");
    for anchor in anchors {
        let tip = document.create_element("div")?.dyn_into::<HtmlElement>()?;
        tip.set_class_name("tooltip");
        tip.set_text_content(dom::data(&anchor, "tooltip").as_deref());
        tip.set_attribute("style", TOOLTIP_STYLE)?;
        body.append_child(&tip)?;

        {
            let (tip, target, window) = (tip.clone(), anchor.clone(), window.clone());
            handle.listen(&anchor, "mouseenter", move |_| {
                let r = target.get_bounding_client_rect();
                let anchor_rect = Rect {
                    left: r.left(),
                    top: r.top(),
                    width: r.width(),
                    height: r.height(),
                };
                let scroll = (window.scroll_x().unwrap_or(0.0), window.scroll_y().unwrap_or(0.0));
                let (left, top) = place_above(
                    anchor_rect,
                    scroll,
                    tip.offset_width() as f64,
                    tip.offset_height() as f64,
                );
                let style = tip.style();
                style.set_property("left", &format!("{left}px")).ok();
                style.set_property("top", &format!("{top}px")).ok();
                style.set_property("opacity", "1").ok();
            })?;
        }
        {
            let tip = tip.clone();
            handle.listen(&anchor, "mouseleave", move |_| {
                tip.style().set_property("opacity", "0").ok();
            })?;
        }

        handle.on_dispose(move || tip.remove());
    }
    Ok(Some(handle))
}
