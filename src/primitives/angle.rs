//! Angle - pointer bearing in degrees

use std::f64::consts::PI;

/// Angle in degrees, normalized to [-180, 180]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle(f64);

impl Angle {
    pub fn new(degrees: f64) -> Self {
        Self(Self::normalize(degrees))
    }

    pub fn from_radians(radians: f64) -> Self {
        Self::new(radians * 180.0 / PI)
    }

    pub const fn degrees(&self) -> f64 {
        self.0
    }

    fn normalize(degrees: f64) -> f64 {
        let mut d = degrees % 360.0;
        if d > 180.0 {
            d -= 360.0;
        } else if d < -180.0 {
            d += 360.0;
        }
        d
    }

    /// Compass word for a bearing where 0° is screen-up, clockwise positive
    pub fn describe_bearing(&self) -> &'static str {
        match self.0 {
            d if d.is_nan() => "nowhere",
            d if d.abs() <= 22.5 => "up",
            d if d > 22.5 && d <= 67.5 => "up-right",
            d if d > 67.5 && d <= 112.5 => "right",
            d if d > 112.5 && d <= 157.5 => "down-right",
            d if d < -22.5 && d >= -67.5 => "up-left",
            d if d < -67.5 && d >= -112.5 => "left",
            d if d < -112.5 && d >= -157.5 => "down-left",
            _ => "down",
        }
    }
}
