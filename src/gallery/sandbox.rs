//! Sandbox - one bare card driven by programmatic options
//!
//! The card carries only the `data-tilt` marker, so every setting comes
//! from the controls. A second card pins `data-max-tilt` and
//! `data-reverse` to show that markup wins over options.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use super::page::{LastTilt, Readout, RegistrySlot, rebind};
use crate::Route;
use crate::primitives::{Easing, Scale};
use crate::tilt::TiltConfig;

#[component]
pub fn Sandbox() -> Element {
    let mut max_tilt = use_signal(|| 15.0f64);
    let mut speed = use_signal(|| 300u32);
    let mut scale = use_signal(|| 1.0f64);
    let mut glare = use_signal(|| true);
    let mut reverse = use_signal(|| false);
    let mut easing_idx = use_signal(|| 0usize);
    let readout = use_signal(|| LastTilt::None);
    let registry: RegistrySlot = use_hook(|| Rc::new(RefCell::new(None)));

    let options = use_memo(move || {
        let easings = Easing::VOCABULARY;
        TiltConfig::default()
            .with_max_tilt(max_tilt())
            .with_speed(speed())
            .with_scale(Scale::clamped(scale()))
            .with_glare(glare())
            .with_reverse(reverse())
            .with_easing(easings[easing_idx() % easings.len()].clone())
    });

    let slot = registry.clone();
    use_effect(move || {
        let options = options.read();
        rebind(&slot, &options, readout);
    });

    let slot = registry.clone();
    use_drop(move || {
        let _ = slot.borrow_mut().take();
    });

    let summary = options.read().describe();
    let easing_name = options.read().easing.describe().to_string();
    let titles = vec!["Options".to_string(), "Markup".to_string()];

    rsx! {
        div {
            class: "tilt-page",

            div {
                style: "display: flex; gap: 12px; align-items: center;",
                Link {
                    to: Route::Landing {},
                    style: "color: #9ca3af; font-size: 13px; font-family: monospace; text-decoration: none;",
                    "\u{2190} back"
                }
                span {
                    style: "color: #9ca3af; font-size: 13px; font-family: monospace;",
                    "{summary}"
                }
            }

            div {
                class: "tilt-controls",
                label { "max tilt: {max_tilt}\u{b0}" }
                input {
                    r#type: "range",
                    min: "1",
                    max: "60",
                    value: "{max_tilt}",
                    oninput: move |e: Event<FormData>| {
                        if let Ok(v) = e.value().parse::<f64>() {
                            max_tilt.set(v);
                        }
                    },
                }
                label { "speed: {speed}ms" }
                input {
                    r#type: "range",
                    min: "50",
                    max: "1500",
                    step: "50",
                    value: "{speed}",
                    oninput: move |e: Event<FormData>| {
                        if let Ok(v) = e.value().parse::<u32>() {
                            speed.set(v);
                        }
                    },
                }
                label { "scale: {scale:.2}" }
                input {
                    r#type: "range",
                    min: "0.8",
                    max: "1.3",
                    step: "0.01",
                    value: "{scale}",
                    oninput: move |e: Event<FormData>| {
                        if let Ok(v) = e.value().parse::<f64>() {
                            scale.set(v);
                        }
                    },
                }
                label {
                    input {
                        r#type: "checkbox",
                        checked: glare(),
                        onchange: move |_| glare.toggle(),
                    }
                    " glare"
                }
                label {
                    input {
                        r#type: "checkbox",
                        checked: reverse(),
                        onchange: move |_| reverse.toggle(),
                    }
                    " reverse"
                }
                button {
                    class: "tilt-button",
                    onclick: move |_| easing_idx += 1,
                    "easing: {easing_name}"
                }
            }

            div {
                class: "tilt-grid",
                div {
                    class: "tilt-card tilt-shadow",
                    style: "background: linear-gradient(135deg, #3b82f6, #6366f1);",
                    "data-tilt": "",
                    div { class: "tilt-shine" }
                    div {
                        class: "tilt-card-inner",
                        h3 { "Options" }
                        p { "every setting from the controls" }
                    }
                }
                div {
                    class: "tilt-card tilt-shadow",
                    style: "background: linear-gradient(135deg, #f97316, #db2777);",
                    "data-tilt": "",
                    "data-max-tilt": "40",
                    "data-reverse": "true",
                    div { class: "tilt-shine" }
                    div {
                        class: "tilt-card-inner",
                        h3 { "Markup" }
                        p { "data-max-tilt=40, data-reverse=true" }
                    }
                }
            }

            Readout { last: readout, titles }
        }
    }
}
