//! Cancellable `requestAnimationFrame` loop

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::trace;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::dom;

struct LoopState {
    running: Cell<bool>,
    frame_id: Cell<Option<i32>>,
    // `callback` holds the frame closure so it can reschedule itself. The
    // closure only keeps a weak reference back to this state, so dropping
    // the `AnimationLoop` frees both.
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl LoopState {
    fn schedule(&self) -> Result<(), JsValue> {
        let window = dom::window().ok_or("no window")?;
        let callback = self.callback.borrow();
        let callback = callback.as_ref().ok_or("animation loop already torn down")?;
        let id = window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        self.frame_id.set(Some(id));
        Ok(())
    }
}

/// Calls `on_frame(timestamp)` once per display frame until it returns
/// `false` or the loop is cancelled.
pub struct AnimationLoop {
    state: Rc<LoopState>,
}

impl AnimationLoop {
    pub fn start<F>(mut on_frame: F) -> Result<Self, JsValue>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let state = Rc::new(LoopState {
            running: Cell::new(true),
            frame_id: Cell::new(None),
            callback: RefCell::new(None),
        });

        let weak = Rc::downgrade(&state);
        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.frame_id.set(None);
            if !state.running.get() {
                return;
            }
            if !on_frame(timestamp) {
                trace!("Animation loop finished");
                state.running.set(false);
                return;
            }
            if state.running.get() {
                if let Err(e) = state.schedule() {
                    tracing::warn!(error = ?e, "Failed to schedule next frame");
                    state.running.set(false);
                }
            }
        }) as Box<dyn FnMut(f64)>);

        *state.callback.borrow_mut() = Some(callback);
        state.schedule()?;

        Ok(Self { state })
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    pub fn cancel(&self) {
        self.state.running.set(false);
        if let Some(id) = self.state.frame_id.take() {
            if let Some(window) = dom::window() {
                window.cancel_animation_frame(id).ok();
            }
        }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
