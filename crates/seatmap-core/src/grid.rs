//! Grid geometry and nearest-multiple snapping.

use kurbo::Size;
use serde::{Deserialize, Serialize};

/// Grid cell size in viewport units (matches the visual grid).
pub const GRID_SIZE: f64 = 50.0;

/// Snap mode for free-form element movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SnapMode {
    /// No snapping.
    None,
    /// Snap to grid multiples.
    Grid,
    /// Snap to other elements' edges (guidelines).
    #[default]
    Guides,
    /// Snap to both grid and guidelines.
    All,
}

impl SnapMode {
    /// Cycle to the next snap mode.
    pub fn next(self) -> Self {
        match self {
            SnapMode::None => SnapMode::Grid,
            SnapMode::Grid => SnapMode::Guides,
            SnapMode::Guides => SnapMode::All,
            SnapMode::All => SnapMode::None,
        }
    }

    /// Check if grid snapping is enabled.
    pub fn snaps_to_grid(self) -> bool {
        matches!(self, SnapMode::Grid | SnapMode::All)
    }

    /// Check if guideline snapping is enabled.
    pub fn snaps_to_guides(self) -> bool {
        matches!(self, SnapMode::Guides | SnapMode::All)
    }
}

/// Orientation of a grid or guide line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A single grid line segment covering the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub orientation: Orientation,
    /// Position along the perpendicular axis, in viewport units.
    pub position: f64,
    /// Length of the segment (the full cross extent of the viewport).
    pub length: f64,
}

/// Snap a value to the nearest multiple of `cell`.
pub fn snap(value: f64, cell: f64) -> f64 {
    (value / cell).round() * cell
}

/// Generate the grid line set covering a viewport at [`GRID_SIZE`] spacing.
pub fn grid_lines(viewport: Size) -> Vec<GridLine> {
    grid_lines_with(viewport, GRID_SIZE)
}

/// Generate grid lines at an explicit cell size.
///
/// Vertical lines sit at every multiple of `cell` up to and including the
/// width, horizontal lines likewise up to the height. Each line spans the
/// full cross extent, so a viewport dimension that is not a multiple of the
/// cell size still gets its final line, clipped at the boundary.
pub fn grid_lines_with(viewport: Size, cell: f64) -> Vec<GridLine> {
    let mut lines = Vec::new();

    let mut x = 0.0;
    while x <= viewport.width {
        lines.push(GridLine {
            orientation: Orientation::Vertical,
            position: x,
            length: viewport.height,
        });
        x += cell;
    }

    let mut y = 0.0;
    while y <= viewport.height {
        lines.push(GridLine {
            orientation: Orientation::Horizontal,
            position: y,
            length: viewport.width,
        });
        y += cell;
    }

    lines
}
