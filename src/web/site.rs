//! Page bootstrap: mounts every feature present on the current page

use tracing::info;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::handle::{settle, Handle};
use super::{canvas, contact, dom, faq, loader, nav, products, reveal, tooltip, typewriter};
use crate::core::SiteConfig;

/// Attribute on `<body>` carrying an optional JSON [`SiteConfig`] override
pub const CONFIG_ATTRIBUTE: &str = "data-site-config";

/// Every mounted feature of one page. Dropping or disposing it tears the
/// page's behavior down: listeners removed, animation loops cancelled,
/// pending timers ignored, generated tooltips removed.
#[wasm_bindgen]
pub struct Site {
    handles: Vec<Handle>,
}

impl Site {
    pub fn mount(root: &Element, config: &SiteConfig) -> Self {
        // Each feature is optional; a missing or broken one never blocks the rest.
        let handles: Vec<Handle> = [
            settle("page-loader", loader::init_loader(root, config)),
            settle("navbar", nav::init_navbar(root, config)),
            settle("menu", nav::init_menu(root)),
            settle("active-link", nav::init_active_link(root)),
            settle("reveal", reveal::init_reveal(root, config)),
            settle("counters", reveal::init_counters(root, config)),
            settle("back-to-top", nav::init_back_to_top(root, config)),
            settle("faq", faq::init_faq(root)),
            settle("product-filter", products::init_filter(root)),
            settle("product-modal", products::init_modal(root)),
            settle("contact-form", contact::init_contact_form(root, config)),
            settle("radar", canvas::init_radar(root, config)),
            settle("scroll-progress", nav::init_scroll_progress(root)),
            settle("typewriter", typewriter::init_typewriter(root, config)),
            settle("tooltips", tooltip::init_tooltips(root)),
            settle("particles", canvas::init_particles(root, config)),
            settle("helix", canvas::init_helix(root, config)),
        ]
        .into_iter()
        .flatten()
        .collect();

        info!(features = handles.len(), "Site mounted");
        Self { handles }
    }
}

#[wasm_bindgen]
impl Site {
    /// Mount onto the global document, reading the config override from `<body>`.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Site, JsValue> {
        let document = dom::document().ok_or("no document")?;
        let root = document.document_element().ok_or("no document element")?;
        let override_json = dom::body().and_then(|b| b.get_attribute(CONFIG_ATTRIBUTE));
        let config = SiteConfig::from_json_or_default(override_json.as_deref());
        Ok(Self::mount(&root, &config))
    }

    /// Names of the features mounted on this page
    #[wasm_bindgen(js_name = activeFeatures)]
    pub fn active_features(&self) -> js_sys::Array {
        self.handles.iter().map(|h| JsValue::from_str(h.name())).collect()
    }

    pub fn dispose(&mut self) {
        let count = self.handles.len();
        self.handles.clear();
        info!(features = count, "Site disposed");
    }
}
