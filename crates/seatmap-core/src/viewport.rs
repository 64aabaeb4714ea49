//! Viewport sizing: the aspect-locked canvas frame, scale steps and the
//! out-of-bounds region.

use crate::error::LayoutError;
use crate::grid::GRID_SIZE;
use kurbo::{Rect, Size};
use serde::{Deserialize, Serialize};

/// Fixed display aspect ratio of the canvas frame (width : height).
pub const ASPECT_RATIO: (f64, f64) = (3.0, 2.0);

/// Initial viewport dimensions in viewport units.
pub const INITIAL_VIEWPORT: Size = Size::new(600.0, 400.0);

/// Stage width that fixed asset dimensions were authored against.
pub const REFERENCE_STAGE_WIDTH: f64 = 600.0;

/// Direction of a viewport rescale request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleOp {
    /// Grow both axes, proportioned by the aspect constants.
    Up,
    /// Shrink both axes, proportioned by the aspect constants.
    Down,
    /// Grow the width by one grid step.
    XUp,
    /// Shrink the width by one grid step.
    XDown,
    /// Grow the height by one grid step.
    YUp,
    /// Shrink the height by one grid step.
    YDown,
}

/// Per-axis multipliers for the uniform scale steps, derived from the aspect
/// constants: the longer axis moves by `W * H` grid cells per step, the
/// shorter by its own constant.
fn grid_scale_ratio() -> (f64, f64) {
    let (w, h) = ASPECT_RATIO;
    if w > h {
        (w * h, h)
    } else if h > w {
        (w, w * h)
    } else {
        (w, h)
    }
}

/// Apply a scale step to the viewport.
///
/// A step that would leave either axis below one grid cell is rejected and
/// the prior size is retained.
pub fn rescale(viewport: Size, op: ScaleOp) -> Result<Size, LayoutError> {
    let (ratio_w, ratio_h) = grid_scale_ratio();

    let next = match op {
        ScaleOp::Up => Size::new(
            viewport.width + GRID_SIZE * ratio_w,
            viewport.height + GRID_SIZE * ratio_h,
        ),
        ScaleOp::Down => Size::new(
            viewport.width - GRID_SIZE * ratio_w,
            viewport.height - GRID_SIZE * ratio_h,
        ),
        ScaleOp::XUp => Size::new(viewport.width + GRID_SIZE, viewport.height),
        ScaleOp::XDown => Size::new(viewport.width - GRID_SIZE, viewport.height),
        ScaleOp::YUp => Size::new(viewport.width, viewport.height + GRID_SIZE),
        ScaleOp::YDown => Size::new(viewport.width, viewport.height - GRID_SIZE),
    };

    if next.width < GRID_SIZE || next.height < GRID_SIZE {
        return Err(LayoutError::DegenerateScale);
    }
    Ok(next)
}

/// Smallest canvas frame with the fixed aspect ratio that encloses the viewport.
pub fn canvas_for(viewport: Size) -> Size {
    let (w, h) = ASPECT_RATIO;
    let scale = (viewport.width / w).max(viewport.height / h);
    Size::new(w * scale, h * scale)
}

/// The canvas area not covered by the viewport, published for the renderer.
///
/// When viewport and canvas coincide the region is all zeros. Otherwise each
/// axis reports either the uncovered band past the viewport edge or, when
/// that axis is fully covered, the full viewport extent so the rectangle
/// still spans the visible floor.
pub fn out_of_bounds(viewport: Size, canvas: Size) -> Rect {
    let extra_w = canvas.width - viewport.width;
    let extra_h = canvas.height - viewport.height;

    if extra_w == 0.0 && extra_h == 0.0 {
        return Rect::ZERO;
    }

    let x = if extra_w == 0.0 { 0.0 } else { viewport.width };
    let y = if extra_h == 0.0 { 0.0 } else { viewport.height };
    let width = if extra_w == 0.0 { viewport.width } else { extra_w };
    let height = if extra_h == 0.0 { viewport.height } else { extra_h };

    Rect::new(x, y, x + width, y + height)
}

/// Factor scaling fixed asset dimensions to the current stage size.
pub fn dp_ratio(stage_width: f64) -> f64 {
    stage_width / REFERENCE_STAGE_WIDTH
}
