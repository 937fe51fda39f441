//! Transition - how the transform eases between frames
//!
//! The transition stays on the element for its whole attached lifetime, so
//! both pointer moves and the decay to flat on leave are smoothed by it.

/// Timing function for the transform transition
#[derive(Debug, Clone, PartialEq)]
pub enum Easing {
    /// Fast start, long soft landing
    Snappy,
    Ease,
    EaseOut,
    Linear,
    /// Any CSS `<easing-function>` token
    Custom(String),
}

impl Easing {
    pub fn to_css(&self) -> &str {
        match self {
            Self::Snappy => "cubic-bezier(0.23, 1, 0.32, 1)",
            Self::Ease => "ease",
            Self::EaseOut => "ease-out",
            Self::Linear => "linear",
            Self::Custom(token) => token,
        }
    }

    pub fn describe(&self) -> &str {
        match self {
            Self::Snappy => "snappy",
            Self::Ease => "eased",
            Self::EaseOut => "easing out",
            Self::Linear => "linear",
            Self::Custom(token) => token,
        }
    }

    /// Named curves for sampling
    pub const VOCABULARY: [Self; 5] = [Self::Snappy, Self::Snappy, Self::Ease, Self::EaseOut, Self::Linear];
}

impl Default for Easing {
    fn default() -> Self {
        Self::Snappy
    }
}

/// `transition` for the transform property
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Transition {
    pub fn new(duration_ms: u32, easing: Easing) -> Self {
        Self { duration_ms, easing }
    }

    pub fn to_css(&self) -> String {
        format!("transform {}ms {}", self.duration_ms, self.easing.to_css())
    }

    pub fn describe(&self) -> &'static str {
        match self.duration_ms {
            0..=150 => "instant",
            151..=450 => "smooth",
            _ => "lazy",
        }
    }

    /// Predefined durations for sampling
    pub const DURATIONS: &[u32] = &[150, 300, 300, 500, 800];
}
