//! Tilt - the effect itself, free of any DOM types
//!
//! `config` resolves settings, `calculator` turns a pointer into angles,
//! `controller` runs the hover lifecycle and `style` renders CSS values.

pub mod calculator;
pub mod config;
pub mod controller;
pub mod style;

pub use calculator::{Geometry, Pointer, TiltResult};
pub use config::TiltConfig;
pub use controller::TiltController;
