//! Pairwise bounding-box collision checks between placed elements.

use crate::element::{Element, ElementId};
use crate::transform::Scale;
use kurbo::Rect;

/// Inset applied to each box before intersection testing, in stage units.
/// Keeps elements that merely share an edge from reading as collisions.
pub const INTERSECTION_OFFSET: f64 = 4.0;

/// Test whether two stage-space boxes intersect once both are inset by
/// [`INTERSECTION_OFFSET`] on every side.
pub fn have_intersection(a: Rect, b: Rect) -> bool {
    let a = a.inset(-INTERSECTION_OFFSET);
    let b = b.inset(-INTERSECTION_OFFSET);
    a.x0 < b.x1 && a.x1 > b.x0 && a.y0 < b.y1 && a.y1 > b.y0
}

/// Scan the active element against every other element.
///
/// Returns the ids of all elements involved in a collision with the active
/// one (including the active element itself when any collision exists). This
/// is a plain O(n) pass per move; no spatial index is kept at the expected
/// scale of a few dozen tables.
pub fn detect_overlaps(active: ElementId, elements: &[Element], scale: Scale) -> Vec<ElementId> {
    let Some(subject) = elements.iter().find(|e| e.id == active) else {
        return Vec::new();
    };
    let subject_box = subject.stage_bounds(scale);

    let mut flagged = Vec::new();
    for other in elements.iter().filter(|e| e.id != active) {
        if have_intersection(subject_box, other.stage_bounds(scale)) {
            flagged.push(other.id);
        }
    }
    if !flagged.is_empty() {
        flagged.push(active);
    }
    flagged
}
