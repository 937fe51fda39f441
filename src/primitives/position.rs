//! PointerPercent - pointer location inside an element, in percent
//!
//! 0% is the left/top edge and 100% the right/bottom edge. Values are not
//! clamped: a fast pointer can be reported just outside the element before
//! the leave event fires, and CSS clips those gradients on its own.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPercent {
    pub x: f64,
    pub y: f64,
}

impl PointerPercent {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// From a fraction of the element (0.0 - 1.0)
    pub fn from_fraction(fx: f64, fy: f64) -> Self {
        Self {
            x: fx * 100.0,
            y: fy * 100.0,
        }
    }

    pub fn is_inside(&self) -> bool {
        (0.0..=100.0).contains(&self.x) && (0.0..=100.0).contains(&self.y)
    }

    /// `X% Y%` - a CSS `<position>` for gradients
    pub fn to_css(&self) -> String {
        format!("{}% {}%", self.x, self.y)
    }

    pub fn describe(&self) -> &'static str {
        let third = 100.0 / 3.0;
        let col = if self.x < third { 0 } else if self.x < third * 2.0 { 1 } else { 2 };
        let row = if self.y < third { 0 } else if self.y < third * 2.0 { 1 } else { 2 };

        match (row, col) {
            (0, 0) => "top-left",
            (0, 1) => "top-center",
            (0, 2) => "top-right",
            (1, 0) => "center-left",
            (1, 1) => "center",
            (1, 2) => "center-right",
            (2, 0) => "bottom-left",
            (2, 1) => "bottom-center",
            _ => "bottom-right",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_css() {
        let p = PointerPercent::new(25.0, 80.5);
        assert_eq!(p.to_css(), "25% 80.5%");
    }

    #[test]
    fn percent_from_fraction() {
        let p = PointerPercent::from_fraction(0.5, 1.25);
        assert_eq!(p.x, 50.0);
        assert_eq!(p.y, 125.0);
        assert!(!p.is_inside());
        assert!(PointerPercent::new(50.0, 50.0).is_inside());
    }

    #[test]
    fn percent_describe() {
        assert_eq!(PointerPercent::new(50.0, 50.0).describe(), "center");
        assert_eq!(PointerPercent::new(5.0, 5.0).describe(), "top-left");
        assert_eq!(PointerPercent::new(50.0, 5.0).describe(), "top-center");
        assert_eq!(PointerPercent::new(90.0, 50.0).describe(), "center-right");
        assert_eq!(PointerPercent::new(20.0, 80.0).describe(), "bottom-left");
        assert_eq!(PointerPercent::new(140.0, 140.0).describe(), "bottom-right");
    }
}
