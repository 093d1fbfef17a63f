//! Viewport-triggered effects: scroll reveal and stat counters

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom;
use super::frame_loop::AnimationLoop;
use super::handle::Handle;
use crate::core::{CounterAnimation, SiteConfig};

/// Call `on_visible` once per target, the first time it intersects the viewport.
fn observe_once<F>(
    name: &'static str,
    targets: &[Element],
    threshold: f64,
    root_margin: Option<&str>,
    mut on_visible: F,
) -> Result<Handle, JsValue>
where
    F: FnMut(&Element) + 'static,
{
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let target = entry.target();
                observer.unobserve(&target);
                on_visible(&target);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for target in targets {
        observer.observe(target);
    }

    let mut handle = Handle::new(name);
    handle.on_dispose(move || {
        observer.disconnect();
        drop(callback);
    });
    Ok(handle)
}

pub fn init_reveal(root: &Element, config: &SiteConfig) -> Result<Option<Handle>, JsValue> {
    let targets = dom::query_all(root, ".reveal, .reveal-left, .reveal-right");
    if targets.is_empty() {
        return Ok(None);
    }
    observe_once(
        "reveal",
        &targets,
        config.reveal.threshold,
        Some(config.reveal.root_margin.as_str()),
        |el| dom::set_class(el, "revealed", true),
    )
    .map(Some)
}

pub fn init_counters(root: &Element, config: &SiteConfig) -> Result<Option<Handle>, JsValue> {
    let targets = dom::query_all(root, "[data-count]");
    if targets.is_empty() {
        return Ok(None);
    }

    let duration_ms = config.counter.duration_ms;
    // Loops of counters currently animating; cancelled with the handle
    let running: Rc<RefCell<Vec<AnimationLoop>>> = Rc::default();

    let mut handle = {
        let running = running.clone();
        observe_once("counters", &targets, config.counter.threshold, None, move |el| {
            let Some(count) = dom::data(el, "count") else {
                return;
            };
            let suffix = dom::data(el, "suffix");
            let Some(mut counter) = CounterAnimation::from_attributes(&count, suffix.as_deref(), duration_ms) else {
                return;
            };

            trace!(target = counter.target(), "Counter started");
            let el = el.clone();
            match AnimationLoop::start(move |timestamp| {
                let frame = counter.sample(timestamp);
                dom::set_text(&el, &frame.text);
                !frame.done
            }) {
                Ok(animation) => {
                    let mut running = running.borrow_mut();
                    running.retain(AnimationLoop::is_running);
                    running.push(animation);
                }
                Err(e) => tracing::warn!(error = ?e, "Failed to start counter"),
            }
        })?
    };

    handle.on_dispose(move || {
        for animation in running.borrow_mut().drain(..) {
            animation.cancel();
        }
    });
    Ok(Some(handle))
}
