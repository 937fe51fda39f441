//! TiltConfig - per-instance settings
//!
//! A config is resolved once, when an element is attached: the caller's
//! options form the base and the element's `data-*` attributes override
//! them. It is never mutated afterwards.

use crate::primitives::{Easing, Scale, Transition};

/// Marker attribute that opts an element in to discovery
pub const MARKER_ATTR: &str = "data-tilt";
pub const MAX_TILT_ATTR: &str = "data-max-tilt";
pub const SPEED_ATTR: &str = "data-speed";
pub const SCALE_ATTR: &str = "data-scale";
pub const GLARE_ATTR: &str = "data-glare";
pub const REVERSE_ATTR: &str = "data-reverse";

#[derive(Debug, Clone, PartialEq)]
pub struct TiltConfig {
    /// Full tilt range in degrees; a corner reaches half of it
    pub max_tilt: f64,
    /// Transition duration, and the delay before the rendering hint relaxes
    pub speed_ms: u32,
    pub scale: Scale,
    pub glare: bool,
    pub reverse: bool,
    pub easing: Easing,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_tilt: 15.0,
            speed_ms: 300,
            scale: Scale::NORMAL,
            glare: false,
            reverse: false,
            easing: Easing::Snappy,
        }
    }
}

impl TiltConfig {
    pub fn with_max_tilt(mut self, degrees: f64) -> Self {
        self.max_tilt = degrees;
        self
    }

    pub fn with_speed(mut self, ms: u32) -> Self {
        self.speed_ms = ms;
        self
    }

    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_glare(mut self, glare: bool) -> Self {
        self.glare = glare;
        self
    }

    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn transition(&self) -> Transition {
        Transition::new(self.speed_ms, self.easing.clone())
    }

    /// Overlay element attributes on top of `self`.
    ///
    /// Numeric attributes only win when they parse to a non-zero number;
    /// a missing, empty, or zero value keeps the base setting. Boolean
    /// attributes win whenever present: `"true"` turns the flag on and any
    /// other value turns it off.
    pub fn with_attributes<F>(&self, attribute: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let number = |name: &str| {
            attribute(name)
                .as_deref()
                .and_then(parse_leading_float)
                .filter(|v| *v != 0.0)
        };
        let flag = |name: &str, base: bool| match attribute(name) {
            Some(value) => value == "true",
            None => base,
        };

        let speed_ms = number(SPEED_ATTR)
            .filter(|v| *v > 0.0)
            .map(|v| v.round().min(u32::MAX as f64) as u32)
            .unwrap_or(self.speed_ms);

        Self {
            max_tilt: number(MAX_TILT_ATTR).unwrap_or(self.max_tilt),
            speed_ms,
            scale: number(SCALE_ATTR).map(Scale::clamped).unwrap_or(self.scale),
            glare: flag(GLARE_ATTR, self.glare),
            reverse: flag(REVERSE_ATTR, self.reverse),
            easing: self.easing.clone(),
        }
    }

    pub fn describe(&self) -> String {
        let mut parts = vec![format!("{}° range", self.max_tilt), self.transition().describe().to_string()];
        if self.scale != Scale::NORMAL {
            parts.push(self.scale.describe().to_string());
        }
        if self.glare {
            parts.push("glare".to_string());
        }
        if self.reverse {
            parts.push("reversed".to_string());
        }
        parts.join(", ")
    }
}

/// Leading-number parse: `" 20deg"` is 20, `"abc"` is nothing.
/// Non-finite results are treated as unparseable.
fn parse_leading_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let end = s
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    let mut candidate = &s[..end];
    while !candidate.is_empty() {
        if let Ok(v) = candidate.parse::<f64>() {
            return v.is_finite().then_some(v);
        }
        candidate = &candidate[..candidate.len() - 1];
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults() {
        let c = TiltConfig::default();
        assert_eq!(c.max_tilt, 15.0);
        assert_eq!(c.speed_ms, 300);
        assert_eq!(c.scale, Scale::NORMAL);
        assert!(!c.glare);
        assert!(!c.reverse);
        assert_eq!(c.easing, Easing::Snappy);
    }

    #[test]
    fn no_attributes_keeps_options() {
        let options = TiltConfig::default().with_max_tilt(25.0).with_glare(true);
        let c = options.with_attributes(attrs(&[]));
        assert_eq!(c, options);
    }

    #[test]
    fn attributes_override_options() {
        let options = TiltConfig::default().with_max_tilt(25.0).with_speed(900);
        let c = options.with_attributes(attrs(&[
            (MAX_TILT_ATTR, "10"),
            (SPEED_ATTR, "450"),
            (SCALE_ATTR, "1.05"),
            (GLARE_ATTR, "true"),
            (REVERSE_ATTR, "true"),
        ]));
        assert_eq!(c.max_tilt, 10.0);
        assert_eq!(c.speed_ms, 450);
        assert_eq!(c.scale.value(), 1.05);
        assert!(c.glare);
        assert!(c.reverse);
    }

    #[test]
    fn boolean_attribute_other_than_true_turns_off() {
        let options = TiltConfig::default().with_glare(true).with_reverse(true);
        let c = options.with_attributes(attrs(&[(GLARE_ATTR, "false"), (REVERSE_ATTR, "yes")]));
        assert!(!c.glare);
        assert!(!c.reverse);
    }

    #[test]
    fn zero_or_garbage_numbers_fall_back() {
        let options = TiltConfig::default().with_max_tilt(20.0);
        let c = options.with_attributes(attrs(&[
            (MAX_TILT_ATTR, "0"),
            (SPEED_ATTR, "fast"),
            (SCALE_ATTR, ""),
        ]));
        assert_eq!(c.max_tilt, 20.0);
        assert_eq!(c.speed_ms, 300);
        assert_eq!(c.scale, Scale::NORMAL);
    }

    #[test]
    fn negative_speed_falls_back() {
        let c = TiltConfig::default().with_attributes(attrs(&[(SPEED_ATTR, "-50")]));
        assert_eq!(c.speed_ms, 300);
    }

    #[test]
    fn fractional_speed_rounds() {
        let c = TiltConfig::default().with_attributes(attrs(&[(SPEED_ATTR, "249.6")]));
        assert_eq!(c.speed_ms, 250);
    }

    #[test]
    fn leading_float_parse() {
        assert_eq!(parse_leading_float("20deg"), Some(20.0));
        assert_eq!(parse_leading_float("  -3.5"), Some(-3.5));
        assert_eq!(parse_leading_float("1e2px"), Some(100.0));
        assert_eq!(parse_leading_float("1e"), Some(1.0));
        assert_eq!(parse_leading_float("abc"), None);
        assert_eq!(parse_leading_float(""), None);
        assert_eq!(parse_leading_float("1e999"), None);
    }

    #[test]
    fn describe_lists_flags() {
        let c = TiltConfig::default().with_glare(true).with_reverse(true);
        assert_eq!(c.describe(), "15° range, smooth, glare, reversed");
    }
}
