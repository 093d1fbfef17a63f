//! `#page-loader` fade-out after the window finishes loading

use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::dom;
use super::handle::{Handle, Liveness};
use crate::core::SiteConfig;

async fn hide_after(loader: Element, delay_ms: u32, alive: Liveness) {
    if dom::sleep_ms(delay_ms).await.is_ok() && alive.is_alive() {
        dom::set_class(&loader, "hidden", true);
    }
}

pub fn init_loader(root: &Element, config: &SiteConfig) -> Result<Option<Handle>, JsValue> {
    let Some(loader) = dom::by_id(root, "page-loader") else {
        return Ok(None);
    };
    let document = dom::document().ok_or("no document")?;
    let window = dom::window().ok_or("no window")?;
    let delay_ms = config.loader_delay_ms;

    let mut handle = Handle::new("page-loader");
    let alive = handle.liveness();

    // `load` may already have fired by the time we mount
    if document.ready_state() == "complete" {
        wasm_bindgen_futures::spawn_local(hide_after(loader, delay_ms, alive));
    } else {
        handle.listen(&window, "load", move |_| {
            wasm_bindgen_futures::spawn_local(hide_after(loader.clone(), delay_ms, alive.clone()));
        })?;
    }
    Ok(Some(handle))
}
