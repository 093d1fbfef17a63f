//! Ownership of everything a mounted feature registers with the page
//!
//! A [`Handle`] holds event listeners, animation loops and cleanup hooks;
//! `dispose()` (or dropping it) removes them all. Async tasks spawned by a
//! feature poll a [`Liveness`] flag and stop once their handle is gone.

use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use super::frame_loop::AnimationLoop;

/// A registered DOM event listener, removed on drop
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, passive: bool, f: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
        if passive {
            let options = AddEventListenerOptions::new();
            options.set_passive(true);
            target.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )?;
        } else {
            target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        }
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
            .ok();
    }
}

/// Shared "still mounted" flag for async work
#[derive(Clone)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub fn is_alive(&self) -> bool {
        self.0.get()
    }
}

pub struct Handle {
    name: &'static str,
    alive: Rc<Cell<bool>>,
    listeners: Vec<Listener>,
    loops: Vec<AnimationLoop>,
    cleanup: Vec<Box<dyn FnOnce()>>,
    children: Vec<Handle>,
}

impl Handle {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            alive: Rc::new(Cell::new(true)),
            listeners: Vec::new(),
            loops: Vec::new(),
            cleanup: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn liveness(&self) -> Liveness {
        Liveness(self.alive.clone())
    }

    pub fn listen<F>(&mut self, target: &EventTarget, event: &'static str, f: F) -> Result<(), JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        self.listeners.push(Listener::new(target, event, false, f)?);
        Ok(())
    }

    /// Passive listener, for scroll handlers that never call `preventDefault`
    pub fn listen_passive<F>(&mut self, target: &EventTarget, event: &'static str, f: F) -> Result<(), JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        self.listeners.push(Listener::new(target, event, true, f)?);
        Ok(())
    }

    pub fn keep_loop(&mut self, animation: AnimationLoop) {
        self.loops.push(animation);
    }

    /// Run `f` when the handle is disposed.
    pub fn on_dispose<F: FnOnce() + 'static>(&mut self, f: F) {
        self.cleanup.push(Box::new(f));
    }

    pub fn adopt(&mut self, child: Handle) {
        self.children.push(child);
    }

    pub fn dispose(self) {
        drop(self);
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        self.alive.set(false);
        for animation in &self.loops {
            animation.cancel();
        }
        for f in self.cleanup.drain(..) {
            f();
        }
        self.listeners.clear();
        self.children.clear();
        debug!(feature = self.name, "Disposed");
    }
}

/// Turn a mount result into an optional handle; failures only disable the feature.
pub fn settle(feature: &'static str, result: Result<Option<Handle>, JsValue>) -> Option<Handle> {
    match result {
        Ok(Some(handle)) => {
            debug!(feature, "Mounted");
            Some(handle)
        }
        Ok(None) => {
            debug!(feature, "Not present on this page, skipped");
            None
        }
        Err(e) => {
            warn!(feature, error = ?e, "Failed to mount, skipped");
            None
        }
    }
}
