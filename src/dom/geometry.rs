//! Reading a geometry snapshot off a live element

use web_sys::HtmlElement;

use crate::tilt::Geometry;

/// Offset size plus bounding-rect origin, the same box the pointer's
/// client coordinates are measured against.
pub fn measure(element: &HtmlElement) -> Geometry {
    let rect = element.get_bounding_client_rect();
    Geometry::new(
        rect.left(),
        rect.top(),
        f64::from(element.offset_width()),
        f64::from(element.offset_height()),
    )
}
