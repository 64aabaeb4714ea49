//! Coordinate-space transforms between Viewport, Canvas and Stage.

use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// Per-axis scale factor pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

impl Scale {
    /// The identity scale.
    pub const IDENTITY: Scale = Scale { x: 1.0, y: 1.0 };

    /// Scale factors mapping `from` dimensions onto `to` dimensions.
    pub fn between(from: Size, to: Size) -> Self {
        Self {
            x: to.width / from.width,
            y: to.height / from.height,
        }
    }

    /// The reciprocal factor pair.
    pub fn inverse(&self) -> Self {
        Self {
            x: 1.0 / self.x,
            y: 1.0 / self.y,
        }
    }

    /// Apply the scale to a point (origin is shared between spaces).
    pub fn apply(&self, point: Point) -> Point {
        Point::new(point.x * self.x, point.y * self.y)
    }

    /// Apply the scale to a size.
    pub fn apply_size(&self, size: Size) -> Size {
        Size::new(size.width * self.x, size.height * self.y)
    }
}

/// Projection between the logical Viewport and the rendered Canvas/Stage.
///
/// Viewport units are the space element positions are stored in; Canvas and
/// Stage share one scale because the stage is sized to exactly fill the
/// canvas on screen. The mapping is a pure affine scale with a shared origin,
/// so it is invertible up to floating-point rounding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projection {
    /// Logical floor area, in viewport units.
    pub viewport: Size,
    /// Aspect-locked display rectangle enclosing the viewport.
    pub canvas: Size,
}

impl Projection {
    /// Create a projection for the given viewport and canvas sizes.
    pub fn new(viewport: Size, canvas: Size) -> Self {
        Self { viewport, canvas }
    }

    /// Viewport -> Stage scale factors.
    pub fn scale(&self) -> Scale {
        Scale::between(self.viewport, self.canvas)
    }

    /// Stage -> Viewport scale factors.
    pub fn reverse_scale(&self) -> Scale {
        self.scale().inverse()
    }

    /// Convert a point from viewport units to stage units.
    pub fn to_stage(&self, point: Point) -> Point {
        self.scale().apply(point)
    }

    /// Convert a point from stage units back to viewport units.
    pub fn to_viewport(&self, point: Point) -> Point {
        self.reverse_scale().apply(point)
    }
}
