//! `#typewriter[data-texts]` cycling headline

use tracing::trace;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::dom;
use super::handle::{Handle, Liveness};
use crate::core::{SiteConfig, Typewriter};

async fn run(el: Element, mut writer: Typewriter, alive: Liveness) {
    while alive.is_alive() {
        let step = writer.tick();
        dom::set_text(&el, &step.text);
        if let Err(e) = dom::sleep_ms(step.delay_ms).await {
            trace!(error = ?e, "Typewriter timer failed, stopping");
            break;
        }
    }
}

pub fn init_typewriter(root: &Element, config: &SiteConfig) -> Result<Option<Handle>, JsValue> {
    let Some(el) = dom::by_id(root, "typewriter") else {
        return Ok(None);
    };
    let Some(texts) = dom::data(&el, "texts") else {
        return Ok(None);
    };
    let Some(writer) = Typewriter::from_attribute(&texts, config.typewriter.clone()) else {
        return Ok(None);
    };

    let handle = Handle::new("typewriter");
    wasm_bindgen_futures::spawn_local(run(el, writer, handle.liveness()));
    Ok(Some(handle))
}
