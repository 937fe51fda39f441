//! Scale - uniform 3D scale factor applied while the pointer is over a card

use super::bounded::bounded_f64;

bounded_f64!(Scale, 0.1, 5.0);

impl Scale {
    pub const NORMAL: Self = Self::new(1.0);

    /// `scale3d(s, s, s)`
    pub fn to_css(&self) -> String {
        format!("scale3d({0}, {0}, {0})", self.0)
    }

    pub fn describe(&self) -> &'static str {
        match self.0 {
            x if x < 0.9 => "shrinks",
            x if x <= 1.01 => "keeps its size",
            x if x <= 1.08 => "grows slightly",
            _ => "pops out",
        }
    }

    /// Predefined hover scales for sampling
    pub const VOCABULARY: &[Self] = &[
        Self(1.0),
        Self(1.0),
        Self(1.03),
        Self(1.05),
        Self(1.1),
    ];
}

impl Default for Scale {
    fn default() -> Self {
        Self::NORMAL
    }
}
