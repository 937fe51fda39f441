//! Calculator - pointer + geometry + config → tilt angles
//!
//! Pure arithmetic, no DOM. Every coordinate is in viewport (client)
//! pixels. Nothing here is clamped: a pointer outside the element yields
//! percentages outside 0-100, and a zero-sized element yields non-finite
//! values that flow through to the caller unchanged.

use crate::primitives::{Angle, PointerPercent};

use super::config::TiltConfig;

/// Pointer location in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Cached element box: offset size plus bounding-rect origin
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Geometry {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn center(&self) -> Pointer {
        Pointer::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Pointer position as a fraction of the box, unclamped
    pub fn fraction(&self, pointer: Pointer) -> (f64, f64) {
        (
            (pointer.x - self.left) / self.width,
            (pointer.y - self.top) / self.height,
        )
    }
}

/// One frame of tilt output, also the `tiltChange` payload
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltResult {
    /// Rotation around the horizontal axis, degrees
    pub tilt_x: f64,
    /// Rotation around the vertical axis, degrees
    pub tilt_y: f64,
    pub percentage_x: f64,
    pub percentage_y: f64,
    /// Bearing of the pointer from the element center, 0° = up, clockwise
    pub angle: f64,
}

impl TiltResult {
    pub fn percent(&self) -> PointerPercent {
        PointerPercent::new(self.percentage_x, self.percentage_y)
    }

    pub fn bearing(&self) -> Angle {
        Angle::new(self.angle)
    }

    #[cfg(test)]
    pub fn is_finite(&self) -> bool {
        [self.tilt_x, self.tilt_y, self.percentage_x, self.percentage_y, self.angle]
            .iter()
            .all(|v| v.is_finite())
    }
}

pub fn compute_tilt(pointer: Pointer, geometry: &Geometry, config: &TiltConfig) -> TiltResult {
    let (x, y) = geometry.fraction(pointer);
    let max = config.max_tilt;

    let sign = if config.reverse { -1.0 } else { 1.0 };
    let tilt_x = round_hundredths(max / 2.0 - y * max) * sign;
    let tilt_y = round_hundredths(x * max - max / 2.0) * sign;

    let center = geometry.center();
    // y is negated so that screen-up reads as 0°
    let bearing = (pointer.x - center.x).atan2(-(pointer.y - center.y));

    let percent = PointerPercent::from_fraction(x, y);
    TiltResult {
        tilt_x,
        tilt_y,
        percentage_x: percent.x,
        percentage_y: percent.y,
        angle: Angle::from_radians(bearing).degrees(),
    }
}

/// Two-decimal rounding, ties away from zero
fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 0.01;

    fn card() -> Geometry {
        Geometry::new(0.0, 0.0, 200.0, 100.0)
    }

    #[test]
    fn center_is_flat() {
        let r = compute_tilt(Pointer::new(100.0, 50.0), &card(), &TiltConfig::default());
        assert!(r.tilt_x.abs() < EPS);
        assert!(r.tilt_y.abs() < EPS);
        assert_eq!(r.percentage_x, 50.0);
        assert_eq!(r.percentage_y, 50.0);
    }

    #[test]
    fn center_is_flat_for_any_range_and_offset() {
        for max in [1.0, 7.3, 15.0, 33.0, 90.0] {
            let g = Geometry::new(37.5, 412.0, 321.0, 123.0);
            let c = g.center();
            let config = TiltConfig::default().with_max_tilt(max);
            let on_row = compute_tilt(Pointer::new(g.left + 3.0, c.y), &g, &config);
            let on_col = compute_tilt(Pointer::new(c.x, g.top + 100.0), &g, &config);
            assert!(on_row.tilt_x.abs() < EPS, "max {max}: {on_row:?}");
            assert!(on_col.tilt_y.abs() < EPS, "max {max}: {on_col:?}");
        }
    }

    #[test]
    fn top_left_corner() {
        let r = compute_tilt(Pointer::new(0.0, 0.0), &card(), &TiltConfig::default());
        assert_eq!(r.tilt_x, 7.5);
        assert_eq!(r.tilt_y, -7.5);
        assert_eq!(r.percentage_x, 0.0);
        assert_eq!(r.percentage_y, 0.0);
    }

    #[test]
    fn top_left_corner_reversed() {
        let config = TiltConfig::default().with_reverse(true);
        let r = compute_tilt(Pointer::new(0.0, 0.0), &card(), &config);
        assert_eq!(r.tilt_x, -7.5);
        assert_eq!(r.tilt_y, 7.5);
    }

    #[test]
    fn reverse_is_a_sign_flip() {
        let g = Geometry::new(10.0, 20.0, 333.0, 77.0);
        let forward = TiltConfig::default().with_max_tilt(22.0);
        let reversed = forward.clone().with_reverse(true);
        for (px, py) in [(11.0, 21.0), (200.0, 40.0), (343.0, 97.0), (500.0, -30.0)] {
            let p = Pointer::new(px, py);
            let a = compute_tilt(p, &g, &forward);
            let b = compute_tilt(p, &g, &reversed);
            assert_eq!(b.tilt_x, -a.tilt_x);
            assert_eq!(b.tilt_y, -a.tilt_y);
            assert_eq!(a.percentage_x, b.percentage_x);
            assert_eq!(a.angle, b.angle);
        }
    }

    #[test]
    fn magnitude_bounded_inside_element() {
        let g = card();
        let config = TiltConfig::default().with_max_tilt(20.0);
        for i in 0..=20 {
            for j in 0..=20 {
                let p = Pointer::new(i as f64 * 10.0, j as f64 * 5.0);
                let r = compute_tilt(p, &g, &config);
                assert!(r.tilt_x.abs() <= 10.0 + EPS);
                assert!(r.tilt_y.abs() <= 10.0 + EPS);
            }
        }
    }

    #[test]
    fn rounds_to_two_decimals() {
        let g = Geometry::new(0.0, 0.0, 300.0, 300.0);
        let r = compute_tilt(Pointer::new(100.0, 100.0), &g, &TiltConfig::default());
        // 7.5 - 15/3 = 2.5 exactly; x side = 5 - 7.5 = -2.5
        assert_eq!(r.tilt_x, 2.5);
        assert_eq!(r.tilt_y, -2.5);

        let g = Geometry::new(0.0, 0.0, 7.0, 7.0);
        let r = compute_tilt(Pointer::new(1.0, 1.0), &g, &TiltConfig::default());
        // 7.5 - 15/7 = 5.357142...
        assert_eq!(r.tilt_x, 5.36);
        assert_eq!(r.tilt_y, -5.36);
    }

    #[test]
    fn outside_pointer_is_not_clamped() {
        let r = compute_tilt(Pointer::new(300.0, -50.0), &card(), &TiltConfig::default());
        assert_eq!(r.percentage_x, 150.0);
        assert_eq!(r.percentage_y, -50.0);
        assert_eq!(r.tilt_x, 15.0);
        assert_eq!(r.tilt_y, 15.0);
    }

    #[test]
    fn bearing_is_clockwise_from_up() {
        let g = card();
        let cfg = TiltConfig::default();
        let up = compute_tilt(Pointer::new(100.0, 0.0), &g, &cfg);
        let right = compute_tilt(Pointer::new(200.0, 50.0), &g, &cfg);
        let down = compute_tilt(Pointer::new(100.0, 100.0), &g, &cfg);
        let left = compute_tilt(Pointer::new(0.0, 50.0), &g, &cfg);
        assert!(up.angle.abs() < 1e-9);
        assert!((right.angle - 90.0).abs() < 1e-9);
        assert!((down.angle.abs() - 180.0).abs() < 1e-9);
        assert!((left.angle + 90.0).abs() < 1e-9);
        assert_eq!(right.bearing().describe_bearing(), "right");
    }

    #[test]
    fn zero_area_propagates_non_finite() {
        let g = Geometry::new(0.0, 0.0, 0.0, 0.0);
        assert!(!g.has_area());
        let r = compute_tilt(Pointer::new(5.0, 5.0), &g, &TiltConfig::default());
        assert!(!r.is_finite());
        assert!(r.percentage_x.is_infinite());
    }
}
