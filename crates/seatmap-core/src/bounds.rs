//! Center-coordinate clamping against the viewport extents.

use kurbo::{Point, Size};

/// Clamp a center coordinate so the item's full extent stays in `[0, viewport_extent]`.
///
/// `pos` is the item's center on one axis. An item larger than the viewport
/// is still clamped, ending up with a symmetric overhang on both sides; that
/// is defined behavior rather than an error.
pub fn clamp_axis(pos: f64, viewport_extent: f64, item_extent: f64) -> f64 {
    let offset = viewport_extent - item_extent / 2.0;

    if pos < item_extent / 2.0 {
        return item_extent / 2.0;
    }
    if pos > offset {
        return offset;
    }
    pos
}

/// Clamp a center point on both axes independently.
pub fn clamp_center(pos: Point, viewport: Size, item: Size) -> Point {
    Point::new(
        clamp_axis(pos.x, viewport.width, item.width),
        clamp_axis(pos.y, viewport.height, item.height),
    )
}
