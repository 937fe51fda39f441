//! DOM binding - wires the tilt effect to live elements through web-sys
//!
//! Everything that touches the browser lives here. The decisions it acts
//! on come from `crate::tilt`, which has no DOM types at all.

pub mod binding;
pub mod error;
pub mod event;
pub mod geometry;
pub mod registry;
pub mod timer;

pub use registry::TiltRegistry;
