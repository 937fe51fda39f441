//! TiltRegistry - every attached instance on the page
//!
//! Built by `discover()` once the page has rendered and dropped when the
//! page goes away. It owns the bindings, the window resize listener with
//! its debounce timer, and any `tiltChange` consumers installed on the
//! bound elements. Nothing here is global: whoever holds the registry
//! holds the whole effect.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, Window};

use super::binding::{TiltBinding, TiltHandle, clear_styles, find_child, set_style_or_warn};
use super::error::{TiltError, reason};
use super::event::{TILT_CHANGE_EVENT, decode};
use super::timer::TimerSlot;
use crate::tilt::config::MARKER_ATTR;
use crate::tilt::style::{self, INNER_SELECTOR};
use crate::tilt::{TiltConfig, TiltResult};

/// Quiet period before a resize re-measures
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

pub struct TiltRegistry {
    bindings: Vec<TiltBinding>,
    parallax: Vec<(HtmlElement, EventListener)>,
    observers: Vec<EventListener>,
    resize: Option<EventListener>,
    resize_debounce: Rc<TimerSlot>,
}

impl TiltRegistry {
    /// Attach to every `[data-tilt]` element in the document.
    ///
    /// Attaching is best-effort: an element that fails is logged and
    /// skipped. Only a missing window or document is an error.
    pub fn discover(options: &TiltConfig) -> Result<Self, TiltError> {
        let window = web_sys::window().ok_or(TiltError::NoWindow)?;
        let document = window.document().ok_or(TiltError::NoDocument)?;

        let selector = marker_selector();
        let nodes = document.query_selector_all(&selector).map_err(|e| TiltError::Query {
            selector: "[data-tilt]",
            reason: reason(&e),
        })?;

        let mut bindings = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            let Some(node) = nodes.item(i) else {
                continue;
            };
            let attached = node
                .dyn_into::<HtmlElement>()
                .map_err(|_| TiltError::NotHtmlElement)
                .and_then(|element| TiltBinding::attach(element, options));
            match attached {
                Ok(binding) => bindings.push(binding),
                Err(e) => log::warn!("skipping tilt element {i}: {e}"),
            }
        }

        let mut registry = Self::new(&window, bindings);
        registry.install_parallax();
        for (i, binding) in registry.bindings().iter().enumerate() {
            log::debug!("tilt element {i}: {}", binding.config().describe());
        }
        log::info!("tilt effect initialized on {} elements", registry.len());
        Ok(registry)
    }

    fn new(window: &Window, bindings: Vec<TiltBinding>) -> Self {
        let resize_debounce: Rc<TimerSlot> = Rc::new(TimerSlot::new());
        let handles: Rc<[TiltHandle]> = bindings.iter().map(TiltBinding::handle).collect();

        let debounce = Rc::clone(&resize_debounce);
        let resize = EventListener::new(window, "resize", move |_event: &Event| {
            let handles = Rc::clone(&handles);
            debounce.arm(RESIZE_DEBOUNCE_MS, move || {
                let live = handles.iter().filter(|h| h.remeasure()).count();
                log::debug!("re-measured {live} tilt elements after resize");
            });
        });

        Self {
            bindings,
            parallax: Vec::new(),
            observers: Vec::new(),
            resize: Some(resize),
            resize_debounce,
        }
    }

    /// Nested `.tilt-card-inner` content drifts against the tilt
    fn install_parallax(&mut self) {
        for binding in &self.bindings {
            let inner = match find_child(binding.element(), INNER_SELECTOR) {
                Ok(Some(inner)) => inner,
                Ok(None) => continue,
                Err(e) => {
                    log::warn!("{e}");
                    continue;
                }
            };
            let target = inner.clone();
            let listener = EventListener::new(binding.element(), TILT_CHANGE_EVENT, move |event: &Event| {
                if let Some(result) = decode(event) {
                    set_style_or_warn(&target, "transform", &style::parallax_transform(&result));
                }
            });
            self.parallax.push((inner, listener));
        }
    }

    /// Subscribe to every instance's `tiltChange`. The callback gets the
    /// instance's index in discovery order.
    pub fn on_tilt_change<F>(&mut self, callback: F)
    where
        F: FnMut(usize, TiltResult) + 'static,
    {
        let shared = Rc::new(RefCell::new(callback));
        for (index, binding) in self.bindings.iter().enumerate() {
            let shared = Rc::clone(&shared);
            let listener = EventListener::new(binding.element(), TILT_CHANGE_EVENT, move |event: &Event| {
                let Some(result) = decode(event) else {
                    return;
                };
                if let Ok(mut callback) = shared.try_borrow_mut() {
                    callback(index, result);
                }
            });
            self.observers.push(listener);
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn bindings(&self) -> &[TiltBinding] {
        &self.bindings
    }

    /// Tear down every instance; see [`TiltBinding::destroy`]
    pub fn destroy(self) {
        drop(self);
    }
}

impl Drop for TiltRegistry {
    fn drop(&mut self) {
        self.resize = None;
        self.resize_debounce.disarm();
        self.observers.clear();
        for (inner, listener) in self.parallax.drain(..) {
            drop(listener);
            clear_styles(&inner, &["transform"]);
        }
        for binding in self.bindings.drain(..) {
            binding.destroy();
        }
    }
}

fn marker_selector() -> String {
    format!("[{MARKER_ATTR}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_matches_marker_attribute() {
        assert_eq!(marker_selector(), "[data-tilt]");
    }
}
