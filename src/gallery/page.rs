//! Gallery - a shuffled deck of tilt cards with a live readout

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use super::card::TiltCard;
use super::presets::{PresetSampler, fresh_rng};
use crate::Route;
use crate::dom::TiltRegistry;
use crate::tilt::{TiltConfig, TiltResult};

const DECK_SIZE: usize = 6;

/// Last `tiltChange` seen: card index + payload
pub type LastTilt = Option<(usize, TiltResult)>;

/// Registry slot shared between the mount effect and the drop hook
pub(crate) type RegistrySlot = Rc<RefCell<Option<TiltRegistry>>>;

/// Drop the old registry, then attach to whatever is on the page now
pub(crate) fn rebind(slot: &RegistrySlot, options: &TiltConfig, mut readout: Signal<LastTilt>) {
    // old instances must let go of their elements before re-discovery
    let previous = slot.borrow_mut().take();
    if let Some(previous) = previous {
        previous.destroy();
    }
    match TiltRegistry::discover(options) {
        Ok(mut registry) => {
            if registry.is_empty() {
                log::warn!("no [data-tilt] elements on the page");
            }
            registry.on_tilt_change(move |index, result| readout.set(Some((index, result))));
            *slot.borrow_mut() = Some(registry);
        }
        Err(e) => log::error!("tilt discovery failed: {e}"),
    }
}

#[component]
pub fn Gallery() -> Element {
    let mut deck = use_signal(|| PresetSampler::deck(&mut fresh_rng(), DECK_SIZE));
    let readout = use_signal(|| LastTilt::None);
    let registry: RegistrySlot = use_hook(|| Rc::new(RefCell::new(None)));

    let slot = registry.clone();
    use_effect(move || {
        let _ = deck.read();
        rebind(&slot, &TiltConfig::default(), readout);
    });

    let slot = registry.clone();
    use_drop(move || {
        let _ = slot.borrow_mut().take();
    });

    let cards = deck();
    let count = cards.len();
    let titles: Vec<String> = cards.iter().map(|p| p.title.clone()).collect();

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
                button {
                    class: "tilt-button",
                    onclick: move |_| deck.set(PresetSampler::deck(&mut fresh_rng(), DECK_SIZE)),
                    "Shuffle Deck"
                }
                span {
                    style: "color: #9ca3af; font-size: 13px; font-family: monospace;",
                    "{count} cards"
                }
            }

            div {
                class: "tilt-grid",
                for (i, preset) in cards.into_iter().enumerate() {
                    TiltCard {
                        key: "{i}-{preset.title}",
                        preset,
                    }
                }
            }

            Readout { last: readout, titles }
        }
    }
}

/// Live payload of the most recent `tiltChange`
#[component]
pub fn Readout(last: Signal<LastTilt>, titles: Vec<String>) -> Element {
    let body = match last() {
        None => rsx! {
            div { style: "padding: 4px 0;", "hover a card" }
        },
        Some((index, r)) => {
            let title = titles.get(index).cloned().unwrap_or_default();
            let tilt = format!("tiltX {:.2}\u{b0}  tiltY {:.2}\u{b0}", r.tilt_x, r.tilt_y);
            let at = if r.percent().is_inside() {
                format!("pointer {:.1}% {:.1}% ({})", r.percentage_x, r.percentage_y, r.percent().describe())
            } else {
                format!("pointer {:.1}% {:.1}% (outside)", r.percentage_x, r.percentage_y)
            };
            let bearing = format!("bearing {:.1}\u{b0} ({})", r.angle, r.bearing().describe_bearing());
            rsx! {
                div { style: "padding: 4px 0; color: #e5e7eb;", "{title}" }
                div { style: "padding: 4px 0;", "{tilt}" }
                div { style: "padding: 4px 0;", "{at}" }
                div { style: "padding: 4px 0;", "{bearing}" }
            }
        }
    };

    rsx! {
        div {
            class: "tilt-readout",
            h3 {
                style: "margin: 0 0 8px 0; color: #e5e7eb; font-size: 13px;",
                "tiltChange"
            }
            {body}
        }
    }
}
