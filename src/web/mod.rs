//! Browser bindings: DOM controllers, canvas renderers and the entry point

mod canvas;
mod contact;
mod dom;
mod faq;
mod frame_loop;
mod handle;
mod loader;
mod nav;
mod products;
mod reveal;
mod site;
mod tooltip;
mod typewriter;

use std::cell::RefCell;

use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub use site::Site;

thread_local! {
    /// The site mounted by the entry point, kept alive until `disposeSite()`
    static MOUNTED: RefCell<Option<Site>> = const { RefCell::new(None) };
}

fn mount_page() {
    match Site::new() {
        Ok(site) => MOUNTED.with(|slot| {
            if let Some(mut previous) = slot.borrow_mut().replace(site) {
                previous.dispose();
            }
        }),
        Err(e) => warn!(error = ?e, "Site bootstrap failed"),
    }
}

/// Tear down the page mounted at startup.
#[wasm_bindgen(js_name = disposeSite)]
pub fn dispose_site() {
    let site = MOUNTED.with(|slot| slot.borrow_mut().take());
    if let Some(mut site) = site {
        site.dispose();
    }
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    // Initialize tracing for browser console
    tracing_wasm::set_as_global_default();

    let document = dom::document().ok_or("no document")?;
    if document.ready_state() == "loading" {
        info!("Waiting for DOMContentLoaded");
        let on_ready = Closure::once_into_js(mount_page);
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        mount_page();
    }
    Ok(())
}
