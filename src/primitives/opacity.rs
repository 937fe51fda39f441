//! Opacity - glare layer visibility

use super::bounded::bounded_f64;

bounded_f64!(Opacity, 0.0, 1.0);

impl Opacity {
    pub const FULL: Self = Self::new(1.0);
    pub const ZERO: Self = Self::new(0.0);

    /// Bare value for the `opacity` property
    pub fn to_css(&self) -> String {
        format!("{}", self.0)
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self::ZERO
    }
}
