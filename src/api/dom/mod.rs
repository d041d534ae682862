//! BlobAnimator - self-driving page binding
//!
//! Creates one element per body inside a container, runs the frame loop
//! and wires page events into the `InteractionHost`. All state shared
//! between callbacks sits in one `Rc<RefCell<_>>`; callbacks never nest,
//! so a borrow is never held across another callback.
//!
//! `shutdown` (also run on drop) cancels the frame loop, detaches every
//! listener and removes the created elements.

mod binding;
mod frame_loop;
mod listener;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DeviceMotionEvent, Document, Window};

use crate::core::error::{BlobError, Result};
use crate::domain::config::{BlobConfig, HostConfig};
use crate::simulation::{entropy_seed, InteractionHost, MotionReading, ShakeStrength};

use binding::BlobBinding;
use frame_loop::FrameLoop;
use listener::EventListener;

struct AnimatorState {
    host: InteractionHost,
    bindings: Vec<BlobBinding>,
}

impl AnimatorState {
    fn frame(&mut self) {
        self.host.step();
        for (binding, view) in self.bindings.iter_mut().zip(self.host.body_views()) {
            if let Err(e) = binding.paint(&view) {
                console_warn!("blob {}: {}", view.id, e);
            }
        }
    }

    fn remove_elements(&mut self) {
        for binding in self.bindings.drain(..) {
            binding.remove();
        }
    }
}

type SharedState = Rc<RefCell<AnimatorState>>;

#[wasm_bindgen]
pub struct BlobAnimator {
    state: SharedState,
    frame_loop: Option<FrameLoop>,
    listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl BlobAnimator {
    /// Start animating blobs inside `#container_id`.
    ///
    /// `config_json` is a `BlobConfig` document; defaults apply when absent.
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: &str, config_json: Option<String>) -> std::result::Result<BlobAnimator, JsValue> {
        let config = match config_json.as_deref() {
            Some(json) => BlobConfig::from_json(json)?,
            None => {
                console_log!("blob animator: no config given, using defaults");
                BlobConfig::default()
            }
        };
        Ok(Self::start(container_id, &config)?)
    }

    pub fn trigger_shake(&mut self, strong: bool) {
        let strength = if strong { ShakeStrength::Strong } else { ShakeStrength::Normal };
        self.state.borrow_mut().host.trigger_shake(strength);
    }

    /// Advance to the next theme; returns its name
    pub fn change_theme(&mut self) -> String {
        self.state.borrow_mut().host.change_theme().name.to_string()
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.as_ref().map(FrameLoop::is_running).unwrap_or(false)
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.state.borrow().host.body_count()
    }

    /// Stop the frame loop, detach listeners and remove the blob elements
    pub fn shutdown(&mut self) {
        let Some(mut frame_loop) = self.frame_loop.take() else {
            return;
        };
        frame_loop.stop();
        self.listeners.clear();
        self.state.borrow_mut().remove_elements();
        console_log!("blob animator stopped");
    }
}

impl BlobAnimator {
    pub fn start(container_id: &str, config: &BlobConfig) -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| BlobError::Dom("no window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| BlobError::Dom("no document".to_string()))?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| BlobError::Dom(format!("missing container #{container_id}")))?;

        let (width, height) = viewport_size(&window)?;
        let seed = config.seed.unwrap_or_else(entropy_seed);
        let host = InteractionHost::with_config(config, width, height, seed)?;

        let state: SharedState = Rc::new(RefCell::new(AnimatorState {
            host,
            bindings: Vec::new(),
        }));

        let wired = bind_bodies(&document, &container, &state).and_then(|()| {
            let listeners = register_listeners(&window, &document, &config.host, &state)?;
            let frame_state = Rc::clone(&state);
            let frame_loop = FrameLoop::start(window.clone(), move |_timestamp| {
                frame_state.borrow_mut().frame();
            })?;
            Ok((listeners, frame_loop))
        });

        match wired {
            Ok((listeners, frame_loop)) => {
                console_log!("blob animator started in #{}", container_id);
                Ok(Self {
                    state,
                    frame_loop: Some(frame_loop),
                    listeners,
                })
            }
            Err(e) => {
                state.borrow_mut().remove_elements();
                Err(e)
            }
        }
    }

    pub fn host(&self) -> std::cell::Ref<'_, InteractionHost> {
        std::cell::Ref::map(self.state.borrow(), |s| &s.host)
    }
}

impl Drop for BlobAnimator {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn bind_bodies(document: &Document, container: &web_sys::Element, state: &SharedState) -> Result<()> {
    let mut state = state.borrow_mut();
    let views: Vec<_> = state.host.body_views().collect();
    for view in views {
        let binding = BlobBinding::create(document, container, &view)?;
        state.bindings.push(binding);
    }
    Ok(())
}

fn viewport_size(window: &Window) -> Result<(f32, f32)> {
    let read = |v: std::result::Result<JsValue, JsValue>, axis: &str| {
        v.ok()
            .and_then(|v| v.as_f64())
            .map(|v| v as f32)
            .ok_or_else(|| BlobError::Dom(format!("viewport {axis} unavailable")))
    };
    Ok((read(window.inner_width(), "width")?, read(window.inner_height(), "height")?))
}

fn register_listeners(
    window: &Window,
    document: &Document,
    ids: &HostConfig,
    state: &SharedState,
) -> Result<Vec<EventListener>> {
    let mut listeners = Vec::new();

    let resize_state = Rc::clone(state);
    let resize_window = window.clone();
    listeners.push(EventListener::attach(window, "resize", move |_| {
        let resized = viewport_size(&resize_window)
            .and_then(|(w, h)| resize_state.borrow_mut().host.resize(w, h));
        if let Err(e) = resized {
            console_warn!("blob resize ignored: {}", e);
        }
    })?);

    let motion_state = Rc::clone(state);
    listeners.push(EventListener::attach(window, "devicemotion", move |event| {
        let reading = event
            .dyn_ref::<DeviceMotionEvent>()
            .and_then(DeviceMotionEvent::acceleration_including_gravity)
            .map(|a| MotionReading::new(a.x(), a.y(), a.z()));
        motion_state
            .borrow_mut()
            .host
            .observe_motion(js_sys::Date::now(), reading);
    })?);

    if let Some(logo) = find_optional(document, ids.logo_id.as_deref()) {
        for kind in ["mouseenter", "touchstart"] {
            let logo_state = Rc::clone(state);
            listeners.push(EventListener::attach(&logo, kind, move |_| {
                logo_state.borrow_mut().host.logo_focus();
            })?);
        }
    }

    if let Some(button) = find_optional(document, ids.shake_button_id.as_deref()) {
        let shake_state = Rc::clone(state);
        listeners.push(EventListener::attach(&button, "click", move |_| {
            shake_state.borrow_mut().host.shake_button();
        })?);
    }

    if let Some(button) = find_optional(document, ids.theme_button_id.as_deref()) {
        let theme_state = Rc::clone(state);
        listeners.push(EventListener::attach(&button, "click", move |_| {
            theme_state.borrow_mut().host.change_theme();
        })?);
    }

    Ok(listeners)
}

/// Look up an optional hook element; a configured but missing id is only a warning
fn find_optional(document: &Document, id: Option<&str>) -> Option<web_sys::Element> {
    let id = id?;
    let found = document.get_element_by_id(id);
    if found.is_none() {
        console_warn!("blob host: no element #{}, skipping", id);
    }
    found
}
