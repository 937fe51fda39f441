//! Bounded - macro for creating range-constrained numeric types
//!
//! Generates types with compile-time validation for const contexts.
//! Values parsed from markup go through `clamped()` instead, which never
//! panics and never leaves the range.

/// Creates a bounded f64 type with min/max constraints.
///
/// # Example
/// ```ignore
/// bounded_f64!(Opacity, 0.0, 1.0);
/// let o = Opacity::new(0.5);
/// let o2 = Opacity::clamped(1.7);  // Opacity(1.0) - clamped to max
/// ```
macro_rules! bounded_f64 {
    ($name:ident, $min:expr, $max:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name(f64);

        impl $name {
            pub const MIN: f64 = $min;
            pub const MAX: f64 = $max;

            #[track_caller]
            pub const fn new(value: f64) -> Self {
                if value < Self::MIN || value > Self::MAX {
                    panic!(concat!(
                        stringify!($name),
                        " value out of bounds [",
                        stringify!($min),
                        ", ",
                        stringify!($max),
                        "]"
                    ));
                }
                Self(value)
            }

            /// NaN collapses to the minimum.
            pub fn clamped(value: f64) -> Self {
                if value.is_nan() {
                    return Self(Self::MIN);
                }
                Self(value.clamp(Self::MIN, Self::MAX))
            }

            pub const fn value(&self) -> f64 {
                self.0
            }
        }
    };
}

pub(crate) use bounded_f64;

#[cfg(test)]
mod tests {
    use super::*;

    bounded_f64!(TestPercent, 0.0, 100.0);

    const FIFTY: TestPercent = TestPercent::new(50.0);

    #[test]
    fn bounded_const_valid() {
        assert_eq!(FIFTY.value(), 50.0);
    }

    #[test]
    fn bounded_clamps_on_overflow() {
        assert_eq!(TestPercent::clamped(150.0).value(), 100.0);
        assert_eq!(TestPercent::clamped(-4.0).value(), 0.0);
    }

    #[test]
    fn bounded_nan_is_min() {
        assert_eq!(TestPercent::clamped(f64::NAN).value(), 0.0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn bounded_rejects_invalid() {
        let _ = TestPercent::new(101.0);
    }
}
