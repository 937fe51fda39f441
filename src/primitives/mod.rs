//! CSS value primitives - the typed pieces a tilt frame is assembled from
//!
//! Each primitive:
//! - `to_css()` → CSS value string
//! - `describe()` → short English for the demo readouts
//! - `VOCABULARY` → closed set for random sampling (where sampled)

#[macro_use]
pub mod bounded;
pub mod angle;
pub mod opacity;
pub mod position;
pub mod scale;
pub mod transition;

pub use angle::Angle;
pub use opacity::Opacity;
pub use position::PointerPercent;
pub use scale::Scale;
pub use transition::{Easing, Transition};
