use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::core::error::{BlobError, Result};

type FrameClosure = Closure<dyn FnMut(f64)>;

/// Self-rescheduling `requestAnimationFrame` loop.
///
/// The closure keeps a handle to itself so it can re-request the next
/// frame; `stop` cancels the pending frame and drops the closure, which
/// breaks that cycle.
pub(super) struct FrameLoop {
    window: Window,
    callback: Rc<RefCell<Option<FrameClosure>>>,
    pending: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub(super) fn start<F>(window: Window, mut on_frame: F) -> Result<Self>
    where
        F: FnMut(f64) + 'static,
    {
        let callback: Rc<RefCell<Option<FrameClosure>>> = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));
        let running = Rc::new(Cell::new(true));

        let self_ref = Rc::clone(&callback);
        let pending_inner = Rc::clone(&pending);
        let running_inner = Rc::clone(&running);
        let win = window.clone();

        let closure = Closure::wrap(Box::new(move |timestamp: f64| {
            pending_inner.set(None);
            if !running_inner.get() {
                return;
            }
            on_frame(timestamp);
            if !running_inner.get() {
                return;
            }
            if let Some(cb) = self_ref.borrow().as_ref() {
                match win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => pending_inner.set(Some(id)),
                    Err(e) => console_warn!("requestAnimationFrame failed: {:?}", e),
                }
            }
        }) as Box<dyn FnMut(f64)>);

        let first = window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map_err(|e| BlobError::Dom(format!("requestAnimationFrame: {e:?}")))?;
        pending.set(Some(first));
        *callback.borrow_mut() = Some(closure);

        Ok(Self {
            window,
            callback,
            pending,
            running,
        })
    }

    pub(super) fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Cancel the scheduled frame and release the callback. Idempotent.
    pub(super) fn stop(&mut self) {
        self.running.set(false);
        if let Some(id) = self.pending.take() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                console_warn!("cancelAnimationFrame failed: {:?}", e);
            }
        }
        self.callback.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
