//! Style - CSS values written to the element and its decorative children
//!
//! Everything returns plain `(property, value)` pairs or value strings so
//! the binding layer stays a dumb `style.setProperty` loop.

use crate::primitives::{Opacity, Scale};

use super::calculator::TiltResult;
use super::config::TiltConfig;

pub const PERSPECTIVE_PX: u32 = 1000;
pub const RESTING_SHADOW: &str = "0 10px 30px rgba(0, 0, 0, 0.2)";
/// Class that opts an element in to the depth shadow
pub const SHADOW_CLASS: &str = "tilt-shadow";
/// Child that receives the glare gradient
pub const SHINE_SELECTOR: &str = ".tilt-shine";
/// Child that receives the parallax translate
pub const INNER_SELECTOR: &str = ".tilt-card-inner";

/// Inline properties this crate may write on the tilted element
pub const ELEMENT_PROPERTIES: &[&str] = &["transform", "transition", "will-change", "box-shadow"];
/// Inline properties this crate may write on the glare child
pub const SHINE_PROPERTIES: &[&str] = &["background-image", "opacity"];

const SHADOW_OFFSET_PX: f64 = 20.0;
const SHADOW_BASE_BLUR_PX: f64 = 30.0;
const PARALLAX_DEPTH_PX: u32 = 50;
const PARALLAX_FACTOR: f64 = 0.5;

pub type Declaration = (&'static str, String);

/// Written once when an instance attaches
pub fn attach_declarations(config: &TiltConfig) -> [Declaration; 2] {
    [
        ("will-change", "transform".to_string()),
        ("transition", config.transition().to_css()),
    ]
}

/// Rotations are written as computed, never wrapped into [-180, 180]:
/// frames either side of ±180° must stay adjacent for the transition.
pub fn tilt_transform(result: &TiltResult, scale: Scale) -> String {
    format!(
        "perspective({PERSPECTIVE_PX}px) rotateX({}deg) rotateY({}deg) {}",
        result.tilt_x,
        result.tilt_y,
        scale.to_css(),
    )
}

/// The flat frame a card decays to after the pointer leaves
pub fn reset_transform() -> String {
    tilt_transform(&TiltResult::default(), Scale::NORMAL)
}

pub fn glare_gradient(result: &TiltResult) -> String {
    format!(
        "radial-gradient(circle at {}, rgba(255,255,255,0.3), transparent 50%)",
        result.percent().to_css()
    )
}

pub fn glare_opacity(active: bool) -> String {
    let opacity = if active { Opacity::FULL } else { Opacity::ZERO };
    opacity.to_css()
}

/// Two-layer shadow offset against the tilt, blur grows with it
pub fn depth_shadow(result: &TiltResult, max_tilt: f64) -> String {
    let x = result.tilt_y / max_tilt * SHADOW_OFFSET_PX;
    let y = result.tilt_x / max_tilt * -SHADOW_OFFSET_PX;
    let blur = SHADOW_BASE_BLUR_PX + result.tilt_x.abs() + result.tilt_y.abs();
    format!(
        "{x}px {y}px {blur}px rgba(0, 0, 0, 0.3), {}px {}px {}px rgba(0, 0, 0, 0.2)",
        x * 0.5,
        y * 0.5,
        blur * 0.5,
    )
}

/// Inner content drifts against the tilt for a layered look
pub fn parallax_transform(result: &TiltResult) -> String {
    format!(
        "translateZ({PARALLAX_DEPTH_PX}px) translateX({}px) translateY({}px)",
        result.tilt_y * PARALLAX_FACTOR,
        result.tilt_x * -PARALLAX_FACTOR,
    )
}
