//! TiltBinding - one element wired to a controller
//!
//! Structure:
//!   binding (owns the listeners; dropping it detaches)
//!     inner (element, glare child, controller, relax timer) shared with
//!     the listener closures through `Rc`
//!
//! Listeners hold strong references to the inner state and the binding
//! holds the listeners, so there is no cycle. Timer callbacks only hold a
//! `Weak` reference.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, MouseEvent};

use super::error::{TiltError, reason};
use super::event::dispatch_tilt_change;
use super::geometry::measure;
use super::timer::TimerSlot;
use crate::tilt::style::{self, ELEMENT_PROPERTIES, RESTING_SHADOW, SHADOW_CLASS, SHINE_PROPERTIES, SHINE_SELECTOR};
use crate::tilt::{Pointer, TiltConfig, TiltController};

pub struct TiltBinding {
    inner: Rc<TiltInner>,
    listeners: Vec<EventListener>,
}

struct TiltInner {
    element: HtmlElement,
    shine: Option<HtmlElement>,
    controller: RefCell<TiltController>,
    relax: TimerSlot,
}

/// Weak handle for out-of-band work on an instance (resize re-measure)
#[derive(Clone)]
pub struct TiltHandle(Weak<TiltInner>);

impl TiltHandle {
    /// Re-capture geometry. Returns false once the instance is gone.
    pub fn remeasure(&self) -> bool {
        let Some(inner) = self.0.upgrade() else {
            return false;
        };
        let geometry = measure(&inner.element);
        inner.controller.borrow_mut().remeasure(geometry);
        true
    }
}

impl TiltBinding {
    /// Resolve the element's config against `options`, write the attach
    /// styles and start listening for pointer events.
    pub fn attach(element: HtmlElement, options: &TiltConfig) -> Result<Self, TiltError> {
        let config = options.with_attributes(|name| element.get_attribute(name));
        let shine = find_child(&element, SHINE_SELECTOR)?;

        for (property, value) in style::attach_declarations(&config) {
            set_style(&element, property, &value)?;
        }

        let inner = Rc::new(TiltInner {
            element,
            shine,
            controller: RefCell::new(TiltController::new(config)),
            relax: TimerSlot::new(),
        });

        let target = inner.element.clone();
        let mut listeners = Vec::with_capacity(3);

        let on_enter = Rc::clone(&inner);
        listeners.push(EventListener::new(&target, "mouseenter", move |_event: &Event| {
            on_enter.enter();
        }));

        let on_move = Rc::clone(&inner);
        listeners.push(EventListener::new(&target, "mousemove", move |event: &Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            on_move.track(Pointer::new(f64::from(event.client_x()), f64::from(event.client_y())));
        }));

        let on_leave = Rc::clone(&inner);
        listeners.push(EventListener::new(&target, "mouseleave", move |_event: &Event| {
            on_leave.leave();
        }));

        Ok(Self { inner, listeners })
    }

    pub fn element(&self) -> &HtmlElement {
        &self.inner.element
    }

    pub fn config(&self) -> TiltConfig {
        self.inner.controller.borrow().config().clone()
    }

    pub fn handle(&self) -> TiltHandle {
        TiltHandle(Rc::downgrade(&self.inner))
    }

    /// Remove listeners and inline styles, returning the element to how it
    /// looked before attach.
    pub fn destroy(self) {
        drop(self);
    }
}

impl Drop for TiltBinding {
    fn drop(&mut self) {
        self.listeners.clear();
        self.inner.teardown();
    }
}

impl TiltInner {
    fn enter(&self) {
        let geometry = measure(&self.element);
        if !geometry.has_area() {
            log::debug!("tilt element has no area; frames will not be finite");
        }
        let enter = self.controller.borrow_mut().enter(geometry);
        if enter.cancel_relax {
            self.relax.disarm();
        }
        set_style_or_warn(&self.element, "will-change", "transform");
    }

    fn track(&self, pointer: Pointer) {
        let (result, config) = {
            let mut controller = self.controller.borrow_mut();
            let result = controller.track(pointer, || measure(&self.element));
            (result, controller.config().clone())
        };

        set_style_or_warn(&self.element, "transform", &style::tilt_transform(&result, config.scale));

        if let Some(shine) = self.glare_layer(&config) {
            set_style_or_warn(shine, "background-image", &style::glare_gradient(&result));
            set_style_or_warn(shine, "opacity", &style::glare_opacity(true));
        }

        if self.has_shadow() {
            set_style_or_warn(&self.element, "box-shadow", &style::depth_shadow(&result, config.max_tilt));
        }

        if let Err(e) = dispatch_tilt_change(&self.element, &result) {
            log::warn!("{e}");
        }
    }

    fn leave(self: &Rc<Self>) {
        let (leave, config) = {
            let mut controller = self.controller.borrow_mut();
            (controller.leave(), controller.config().clone())
        };

        set_style_or_warn(&self.element, "transform", &style::reset_transform());

        if let Some(shine) = self.glare_layer(&config) {
            set_style_or_warn(shine, "opacity", &style::glare_opacity(false));
        }

        if self.has_shadow() {
            set_style_or_warn(&self.element, "box-shadow", RESTING_SHADOW);
        }

        let weak = Rc::downgrade(self);
        self.relax.arm(leave.relax_after_ms, move || {
            if let Some(inner) = weak.upgrade() {
                inner.relax();
            }
        });
    }

    fn relax(&self) {
        if self.controller.borrow_mut().relax() {
            set_style_or_warn(&self.element, "will-change", "auto");
        }
    }

    fn teardown(&self) {
        self.relax.disarm();
        self.controller.borrow_mut().detach();
        clear_styles(&self.element, ELEMENT_PROPERTIES);
        if let Some(shine) = &self.shine {
            clear_styles(shine, SHINE_PROPERTIES);
        }
    }

    fn glare_layer(&self, config: &TiltConfig) -> Option<&HtmlElement> {
        self.shine.as_ref().filter(|_| config.glare)
    }

    fn has_shadow(&self) -> bool {
        self.element.class_list().contains(SHADOW_CLASS)
    }
}

/// First matching descendant, if it is an HTML element
pub(crate) fn find_child(element: &HtmlElement, selector: &'static str) -> Result<Option<HtmlElement>, TiltError> {
    let found = element
        .query_selector(selector)
        .map_err(|e| TiltError::Query { selector, reason: reason(&e) })?;
    Ok(found.and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

pub(crate) fn set_style(element: &HtmlElement, property: &'static str, value: &str) -> Result<(), TiltError> {
    element
        .style()
        .set_property(property, value)
        .map_err(|e| TiltError::Style { property, reason: reason(&e) })
}

pub(crate) fn set_style_or_warn(element: &HtmlElement, property: &'static str, value: &str) {
    if let Err(e) = set_style(element, property, value) {
        log::warn!("{e}");
    }
}

pub(crate) fn clear_styles(element: &HtmlElement, properties: &[&'static str]) {
    let style = element.style();
    for property in properties {
        if let Err(e) = style.remove_property(property) {
            log::warn!("clearing `{property}` failed: {}", reason(&e));
        }
    }
}
