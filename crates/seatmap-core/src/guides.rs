//! Guideline alignment: snapping a dragged element's edges to the edges and
//! centerlines of the other placed elements.
//!
//! All comparisons happen in stage coordinates, since that is the space the
//! pixel tolerance is defined in; stored element positions are viewport
//! units, so conversions always go through [`crate::transform::Projection`].

use crate::bounds::clamp_center;
use crate::element::{Element, ElementId};
use crate::grid::Orientation;
use crate::transform::Projection;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Snap tolerance in stage pixels.
pub const GUIDELINE_OFFSET: f64 = 8.0;

/// Which edge of the dragged element locked onto the guideline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapEdge {
    /// Leading edge (left or top).
    Start,
    /// Trailing edge (right or bottom).
    End,
}

/// A transient alignment hint, alive only during a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Guideline {
    pub orientation: Orientation,
    /// Stage-space coordinate the dragged edge locked to.
    pub position: f64,
    pub snap: SnapEdge,
}

/// Alignment stops contributed by the non-dragged elements, in stage units.
#[derive(Debug, Default)]
struct Stops {
    /// X coordinates a vertical guideline can sit at.
    vertical: Vec<f64>,
    /// Y coordinates a horizontal guideline can sit at.
    horizontal: Vec<f64>,
}

fn line_stops(elements: &[Element], dragged: ElementId, projection: &Projection) -> Stops {
    let scale = projection.scale();
    let mut stops = Stops::default();
    for element in elements.iter().filter(|e| e.id != dragged) {
        let bounds = element.stage_bounds(scale);
        stops.vertical.extend([bounds.x0, bounds.x1, bounds.center().x]);
        stops.horizontal.extend([bounds.y0, bounds.y1, bounds.center().y]);
    }
    stops
}

/// One snappable edge of the dragged element.
#[derive(Debug, Clone, Copy)]
struct SnappingEdge {
    /// Stage coordinate of the edge at the proposed position.
    position: f64,
    /// Signed distance from the element's center anchor to the edge.
    offset: f64,
    snap: SnapEdge,
}

fn snapping_edges(center: f64, half_extent: f64) -> [SnappingEdge; 2] {
    [
        SnappingEdge {
            position: center - half_extent,
            offset: -half_extent,
            snap: SnapEdge::Start,
        },
        SnappingEdge {
            position: center + half_extent,
            offset: half_extent,
            snap: SnapEdge::End,
        },
    ]
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    stop: f64,
    diff: f64,
    offset: f64,
    snap: SnapEdge,
}

/// Pick the closest (stop, edge) pairing within tolerance.
///
/// The comparison is strict, so on an exact tie the first enumerated
/// candidate is kept.
fn best_candidate(stops: &[f64], edges: &[SnappingEdge]) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    for &stop in stops {
        for edge in edges {
            let diff = (stop - edge.position).abs();
            if diff >= GUIDELINE_OFFSET {
                continue;
            }
            if best.is_none_or(|b| diff < b.diff) {
                best = Some(Candidate {
                    stop,
                    diff,
                    offset: edge.offset,
                    snap: edge.snap,
                });
            }
        }
    }
    best
}

/// Result of a guideline pass: the corrected center and the active guides.
#[derive(Debug, Clone)]
pub struct GuideSnap {
    /// Corrected center in viewport units, clamped to the viewport.
    pub center: Point,
    /// At most one vertical and one horizontal guideline.
    pub guidelines: Vec<Guideline>,
}

/// Snap a dragged element against the other elements' edges.
///
/// `proposed_center` is the free-drag center in viewport units. Each axis
/// snaps independently to its best candidate within [`GUIDELINE_OFFSET`];
/// an axis with no candidate keeps the proposed coordinate. The final center
/// is re-clamped so snapping can never push the element out of bounds.
pub fn snap_to_guides(
    element: &Element,
    proposed_center: Point,
    elements: &[Element],
    projection: &Projection,
) -> GuideSnap {
    let stops = line_stops(elements, element.id, projection);
    let scale = projection.scale();

    let stage_center = scale.apply(proposed_center);
    let extent = scale.apply_size(element.rotated_extent());

    let vertical = best_candidate(
        &stops.vertical,
        &snapping_edges(stage_center.x, extent.width / 2.0),
    );
    let horizontal = best_candidate(
        &stops.horizontal,
        &snapping_edges(stage_center.y, extent.height / 2.0),
    );

    let snapped_stage = Point::new(
        vertical.map_or(stage_center.x, |c| c.stop - c.offset),
        horizontal.map_or(stage_center.y, |c| c.stop - c.offset),
    );

    let mut guidelines = Vec::with_capacity(2);
    if let Some(c) = vertical {
        guidelines.push(Guideline {
            orientation: Orientation::Vertical,
            position: c.stop,
            snap: c.snap,
        });
    }
    if let Some(c) = horizontal {
        guidelines.push(Guideline {
            orientation: Orientation::Horizontal,
            position: c.stop,
            snap: c.snap,
        });
    }

    let center = clamp_center(
        projection.to_viewport(snapped_stage),
        projection.viewport,
        element.rotated_extent(),
    );

    GuideSnap { center, guidelines }
}
