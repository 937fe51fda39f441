//! Card renderer - markup the tilt runtime discovers
//!
//! Structure:
//!   outer div (data-tilt marker + data-* overrides, optional tilt-shadow)
//!     shine div (glare gradient target - only with glare)
//!     inner div (parallax target - only with parallax)
//!
//! The card never touches the effect directly; everything is driven by
//! the attributes it renders.

use dioxus::prelude::*;

use super::presets::CardPreset;

#[component]
pub fn TiltCard(preset: CardPreset) -> Element {
    let class = preset.class();
    let background = preset.background;
    let title = preset.title.clone();
    let description = preset.describe();
    let max_tilt = preset.max_tilt_attr();
    let speed = preset.speed_attr();
    let scale = preset.scale_attr();
    let glare = preset.glare_attr();
    let reverse = preset.reverse_attr();
    let inner_class = if preset.parallax { "tilt-card-inner" } else { "tilt-card-body" };

    rsx! {
        div {
            class: "{class}",
            style: "background: {background};",
            "data-tilt": "",
            "data-max-tilt": "{max_tilt}",
            "data-speed": "{speed}",
            "data-scale": "{scale}",
            "data-glare": "{glare}",
            "data-reverse": "{reverse}",
            if preset.config.glare {
                div { class: "tilt-shine" }
            }
            div {
                class: "{inner_class}",
                h3 { "{title}" }
                p { "{description}" }
            }
        }
    }
}
