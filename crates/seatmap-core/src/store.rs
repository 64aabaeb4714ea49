//! The layout store: the authoritative in-memory model of placed elements,
//! selection and viewport sizing, orchestrating clamp, snap and overlap on
//! every interaction event.
//!
//! The store is single-threaded and event-driven: each handler runs to
//! completion inside the host's event tick. The element list is replaced
//! wholesale on every mutation, so a snapshot handed out earlier stays a
//! valid, immutable view of the state it was taken from.

use std::sync::Arc;

use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

use crate::bounds::clamp_center;
use crate::element::{Element, ElementId, PaletteSlot, TableKind, Template, default_palette};
use crate::error::{LayoutError, LayoutResult};
use crate::grid::{self, GRID_SIZE, GridLine, SnapMode};
use crate::guides::{Guideline, snap_to_guides};
use crate::overlap::detect_overlaps;
use crate::transform::Projection;
use crate::viewport::{self, INITIAL_VIEWPORT, ScaleOp, canvas_for, out_of_bounds};

/// An in-flight palette drag, recorded between drag start and drop.
#[derive(Debug, Clone)]
pub struct DragState {
    /// What will be placed when the drop lands.
    pub template: Template,
    /// Offset from the pointer to the template's visual center, in stage
    /// pixels, measured by the host when the drag started.
    pub grab_offset: Vec2,
}

/// Feedback for one move event of an element drag.
#[derive(Debug, Clone)]
pub struct MoveFeedback {
    /// Committed center position in viewport units.
    pub position: Point,
    /// Guidelines active after this move (at most one per orientation).
    pub guidelines: Vec<Guideline>,
    /// Whether the dragged element currently collides with another.
    pub overlapping: bool,
}

/// Resize/rotation delta committed at the end of a transform gesture.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ElementTransform {
    /// New pre-rotation footprint, if the gesture resized.
    pub size: Option<Size>,
    /// New rotation in degrees, if the gesture rotated.
    pub rotation: Option<f64>,
}

/// Geometry published after a rescale request.
#[derive(Debug, Clone)]
pub struct RescaleOutcome {
    pub viewport: Size,
    pub canvas: Size,
    pub grid_lines: Vec<GridLine>,
    pub out_of_bounds: Rect,
}

/// Owns the element list, palette, selection and sizing state.
#[derive(Debug, Clone)]
pub struct LayoutStore {
    /// Placed elements in draw order (back to front).
    elements: Arc<Vec<Element>>,
    /// Finite palette of numbered table slots.
    palette: Vec<PaletteSlot>,
    /// Currently selected element, if any.
    selected: Option<ElementId>,
    /// Logical floor area, viewport units.
    viewport: Size,
    /// Aspect-locked display frame enclosing the viewport.
    canvas: Size,
    /// Physical render surface size, pixels.
    stage: Size,
    /// Grid lines for the current viewport.
    grid_lines: Vec<GridLine>,
    /// Canvas area not covered by the viewport.
    out_of_bounds: Rect,
    /// Free-drag snapping behavior.
    snap_mode: SnapMode,
    /// Palette drag in progress, if any.
    drag: Option<DragState>,
    /// Guidelines of the active drag gesture.
    guidelines: Vec<Guideline>,
}

impl Default for LayoutStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutStore {
    /// Create a store with the initial viewport and a fresh palette.
    pub fn new() -> Self {
        let viewport = INITIAL_VIEWPORT;
        let canvas = canvas_for(viewport);
        Self {
            elements: Arc::new(Vec::new()),
            palette: default_palette(),
            selected: None,
            viewport,
            canvas,
            stage: Size::ZERO,
            grid_lines: grid::grid_lines(viewport),
            out_of_bounds: out_of_bounds(viewport, canvas),
            snap_mode: SnapMode::default(),
            drag: None,
            guidelines: Vec::new(),
        }
    }

    /// The committed element list, back to front.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// A snapshot of the element list that survives later mutations.
    pub fn snapshot(&self) -> Arc<Vec<Element>> {
        Arc::clone(&self.elements)
    }

    /// The palette slots, assigned ones included.
    pub fn palette(&self) -> &[PaletteSlot] {
        &self.palette
    }

    /// The selected element id, if any.
    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// Grid lines for the current viewport.
    pub fn grid_lines(&self) -> &[GridLine] {
        &self.grid_lines
    }

    /// The out-of-bounds frame region, for the renderer.
    pub fn out_of_bounds(&self) -> Rect {
        self.out_of_bounds
    }

    /// Guidelines of the drag gesture in progress.
    pub fn guidelines(&self) -> &[Guideline] {
        &self.guidelines
    }

    pub fn snap_mode(&self) -> SnapMode {
        self.snap_mode
    }

    pub fn set_snap_mode(&mut self, mode: SnapMode) {
        self.snap_mode = mode;
    }

    /// The viewport-to-stage projection for the current sizes.
    pub fn projection(&self) -> Projection {
        Projection::new(self.viewport, self.canvas)
    }

    /// Record the render surface size computed by the host's pane layout.
    pub fn set_stage_size(&mut self, stage: Size) {
        self.stage = stage;
    }

    /// Factor scaling fixed asset dimensions to the current stage size.
    pub fn dp_ratio(&self) -> f64 {
        viewport::dp_ratio(self.stage.width)
    }

    /// Select an element, deselecting any other. Unknown ids are ignored.
    pub fn select(&mut self, id: ElementId) {
        if let Err(err) = self.try_select(id) {
            log::debug!("select ignored: {err}");
        }
    }

    fn try_select(&mut self, id: ElementId) -> LayoutResult<()> {
        if !self.elements.iter().any(|e| e.id == id) {
            return Err(LayoutError::UnknownElement(id));
        }
        self.selected = Some(id);
        self.publish(|list| {
            for element in list.iter_mut() {
                element.selected = element.id == id;
            }
        });
        Ok(())
    }

    /// Record a palette drag. No element exists until the drop lands.
    pub fn begin_drag(&mut self, template: Template, grab_offset: Vec2) {
        log::trace!("drag start: {:?}", template.kind);
        self.drag = Some(DragState {
            template,
            grab_offset,
        });
    }

    /// Pure accept signal for the host's drag-over events.
    pub fn drag_over(&self) -> bool {
        self.drag.is_some()
    }

    /// Abandon the drag in progress, reverting to the pre-drag state.
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// Drop the dragged template at the given stage position.
    ///
    /// Without an active drag this is a silent no-op. The new element is
    /// clamped into the viewport, selected, and its palette slot consumed.
    pub fn drop(&mut self, pointer_stage: Point) -> &[Element] {
        if let Err(err) = self.try_drop(pointer_stage) {
            log::debug!("drop ignored: {err}");
        }
        &self.elements
    }

    fn try_drop(&mut self, pointer_stage: Point) -> LayoutResult<()> {
        let DragState {
            template,
            grab_offset,
        } = self.drag.take().ok_or(LayoutError::InvalidDrop)?;

        let projection = self.projection();
        let center_stage = pointer_stage - grab_offset;
        let raw_center = projection.to_viewport(center_stage);
        let center = clamp_center(raw_center, self.viewport, template.kind.dimensions());

        let mut element = Element::from_template(&template, center);
        element.selected = true;
        let id = element.id;

        self.publish(|list| {
            for existing in list.iter_mut() {
                existing.selected = false;
            }
            list.push(element);
        });
        self.selected = Some(id);

        if let Some(slot_id) = template.source_slot {
            if let Some(slot) = self.palette.iter_mut().find(|s| s.id == slot_id) {
                slot.assigned = true;
            }
        }

        self.refresh_overlaps(id);
        log::trace!("dropped {:?} at {center:?}", template.kind);
        Ok(())
    }

    /// Process one move event of an element drag.
    ///
    /// The pointer position is the element's proposed center on the stage.
    /// Returns `None` (and changes nothing) for unknown element ids.
    pub fn element_drag_move(
        &mut self,
        id: ElementId,
        pointer_stage: Point,
    ) -> Option<MoveFeedback> {
        match self.try_drag_move(id, pointer_stage) {
            Ok(feedback) => Some(feedback),
            Err(err) => {
                log::debug!("drag move ignored: {err}");
                None
            }
        }
    }

    fn try_drag_move(&mut self, id: ElementId, pointer_stage: Point) -> LayoutResult<MoveFeedback> {
        let element = self
            .elements
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(LayoutError::UnknownElement(id))?;

        let projection = self.projection();
        let extent = element.rotated_extent();
        let free = clamp_center(
            projection.to_viewport(pointer_stage),
            self.viewport,
            extent,
        );

        let (mut center, guidelines) = if self.snap_mode.snaps_to_guides() {
            let snap = snap_to_guides(&element, free, &self.elements, &projection);
            (snap.center, snap.guidelines)
        } else {
            (free, Vec::new())
        };

        if self.snap_mode.snaps_to_grid() {
            // Grid snap only fills in the axes no guideline claimed.
            let vertical_taken = guidelines
                .iter()
                .any(|g| g.orientation == grid::Orientation::Vertical);
            let horizontal_taken = guidelines
                .iter()
                .any(|g| g.orientation == grid::Orientation::Horizontal);
            if !vertical_taken {
                center.x = grid::snap(center.x, GRID_SIZE);
            }
            if !horizontal_taken {
                center.y = grid::snap(center.y, GRID_SIZE);
            }
            center = clamp_center(center, self.viewport, extent);
        }

        let overlapping = self.commit_center(id, center);
        self.guidelines = guidelines;

        Ok(MoveFeedback {
            position: center,
            guidelines: self.guidelines.clone(),
            overlapping,
        })
    }

    /// Commit the final position of a drag gesture and clear its guidelines.
    pub fn element_drag_end(&mut self, id: ElementId, final_stage_pos: Point) -> &[Element] {
        self.guidelines.clear();
        match self.elements.iter().find(|e| e.id == id) {
            Some(element) => {
                let projection = self.projection();
                let center = clamp_center(
                    projection.to_viewport(final_stage_pos),
                    self.viewport,
                    element.rotated_extent(),
                );
                self.commit_center(id, center);
            }
            None => log::debug!("drag end ignored: {}", LayoutError::UnknownElement(id)),
        }
        &self.elements
    }

    /// Apply a resize/rotation delta, re-clamp and re-run overlap detection.
    pub fn element_transform_end(&mut self, id: ElementId, transform: ElementTransform) -> &[Element] {
        let Some(mut element) = self.elements.iter().find(|e| e.id == id).cloned() else {
            log::debug!(
                "transform ignored: {}",
                LayoutError::UnknownElement(id)
            );
            return &self.elements;
        };

        if let Some(size) = transform.size {
            element.width = size.width;
            element.height = size.height;
        }
        if let Some(rotation) = transform.rotation {
            element.set_rotation(rotation);
        }
        let center = clamp_center(element.center, self.viewport, element.rotated_extent());
        element.center = center;

        self.publish(|list| {
            if let Some(slot) = list.iter_mut().find(|e| e.id == id) {
                *slot = element;
            }
        });
        self.refresh_overlaps(id);
        &self.elements
    }

    /// Swap the selected element's table kind in place.
    ///
    /// Position and rotation are retained; the footprint comes from the new
    /// kind's fixed dimensions. No-op without a selection.
    pub fn change_kind(&mut self, kind: TableKind) -> &[Element] {
        let Some(id) = self.selected else {
            return &self.elements;
        };
        let Some(mut element) = self.elements.iter().find(|e| e.id == id).cloned() else {
            log::debug!("change kind ignored: {}", LayoutError::UnknownElement(id));
            return &self.elements;
        };

        element.change_kind(kind);
        element.center = clamp_center(element.center, self.viewport, element.rotated_extent());

        self.publish(|list| {
            if let Some(slot) = list.iter_mut().find(|e| e.id == id) {
                *slot = element;
            }
        });
        self.refresh_overlaps(id);
        &self.elements
    }

    /// Apply a viewport scale step and republish the derived geometry.
    ///
    /// A degenerate step is rejected and the prior geometry returned
    /// unchanged. Elements are never repositioned by a rescale, even when
    /// the shrunk viewport leaves them outside it.
    pub fn rescale(&mut self, op: ScaleOp) -> RescaleOutcome {
        match viewport::rescale(self.viewport, op) {
            Ok(next) => {
                self.viewport = next;
                self.canvas = canvas_for(next);
                self.grid_lines = grid::grid_lines(next);
                self.out_of_bounds = out_of_bounds(next, self.canvas);
            }
            Err(err) => log::debug!("rescale {op:?} rejected: {err}"),
        }
        RescaleOutcome {
            viewport: self.viewport,
            canvas: self.canvas,
            grid_lines: self.grid_lines.clone(),
            out_of_bounds: self.out_of_bounds,
        }
    }

    /// Serialize the sizing state and element list for the host's inspector
    /// pane.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        #[derive(Serialize)]
        struct StateDump<'a> {
            stage: Size,
            canvas: Size,
            viewport: Size,
            elements: &'a [Element],
        }
        serde_json::to_string_pretty(&StateDump {
            stage: self.stage,
            canvas: self.canvas,
            viewport: self.viewport,
            elements: &self.elements,
        })
    }

    /// Replace the element list with an edited copy (copy-on-write).
    fn publish<F: FnOnce(&mut Vec<Element>)>(&mut self, edit: F) {
        let mut next = (*self.elements).clone();
        edit(&mut next);
        self.elements = Arc::new(next);
    }

    /// Move an element and refresh overlap flags in one published update.
    /// Returns whether the moved element now collides with another.
    fn commit_center(&mut self, id: ElementId, center: Point) -> bool {
        let scale = self.projection().scale();
        let mut next = (*self.elements).clone();
        if let Some(element) = next.iter_mut().find(|e| e.id == id) {
            element.center = center;
        }

        let flagged = detect_overlaps(id, &next, scale);
        for element in next.iter_mut() {
            element.overlapping = flagged.contains(&element.id);
        }
        let overlapping = flagged.contains(&id);
        if overlapping {
            // Raise the colliding element to the top of the draw order.
            if let Some(pos) = next.iter().position(|e| e.id == id) {
                let element = next.remove(pos);
                next.push(element);
            }
        }

        self.elements = Arc::new(next);
        overlapping
    }

    /// Re-run overlap detection around one element, updating all flags.
    fn refresh_overlaps(&mut self, id: ElementId) {
        let scale = self.projection().scale();
        let flagged = detect_overlaps(id, &self.elements, scale);
        self.publish(|list| {
            for element in list.iter_mut() {
                element.overlapping = flagged.contains(&element.id);
            }
            if flagged.contains(&id) {
                if let Some(pos) = list.iter().position(|e| e.id == id) {
                    let element = list.remove(pos);
                    list.push(element);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Orientation;

    fn store_with_identity_stage() -> LayoutStore {
        let mut store = LayoutStore::new();
        store.set_stage_size(Size::new(600.0, 400.0));
        store
    }

    fn drop_table(store: &mut LayoutStore, kind: TableKind, at: Point) -> ElementId {
        store.begin_drag(Template::from_kind(kind), Vec2::ZERO);
        store.drop(at);
        store.elements().last().expect("drop commits an element").id
    }

    #[test]
    fn test_drop_without_drag_is_noop() {
        let mut store = store_with_identity_stage();
        store.drop(Point::new(100.0, 100.0));
        assert!(store.elements().is_empty());
    }

    #[test]
    fn test_drop_creates_selected_clamped_element() {
        let mut store = store_with_identity_stage();
        // Raw center lands at x=20; a 50-wide table settles at its
        // half-width.
        let id = drop_table(&mut store, TableKind::Circle2, Point::new(20.0, 100.0));

        let element = &store.elements()[0];
        assert_eq!(element.id, id);
        assert!(element.selected);
        assert_eq!(store.selected(), Some(id));
        assert!((element.center.x - 25.0).abs() < 1e-9);
        assert!((element.center.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_drop_consumes_palette_slot() {
        let mut store = store_with_identity_stage();
        let slot = store.palette()[0].clone();

        store.begin_drag(Template::from_slot(&slot), Vec2::ZERO);
        assert!(store.drag_over());
        store.drop(Point::new(200.0, 200.0));

        assert!(store.palette()[0].assigned);
        assert!(!store.drag_over());
        assert_eq!(store.elements()[0].label, slot.label);
    }

    #[test]
    fn test_drop_applies_grab_offset() {
        let mut store = store_with_identity_stage();
        store.begin_drag(
            Template::from_kind(TableKind::Circle2),
            Vec2::new(10.0, -20.0),
        );
        store.drop(Point::new(210.0, 180.0));

        let element = &store.elements()[0];
        assert!((element.center.x - 200.0).abs() < 1e-9);
        assert!((element.center.y - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_second_drop_moves_selection() {
        let mut store = store_with_identity_stage();
        let first = drop_table(&mut store, TableKind::Circle2, Point::new(100.0, 100.0));
        let second = drop_table(&mut store, TableKind::Circle2, Point::new(300.0, 300.0));

        let elements = store.elements();
        assert!(!elements.iter().find(|e| e.id == first).unwrap().selected);
        assert!(elements.iter().find(|e| e.id == second).unwrap().selected);
    }

    #[test]
    fn test_drag_move_snaps_and_reports() {
        let mut store = store_with_identity_stage();
        drop_table(&mut store, TableKind::Circle2, Point::new(100.0, 100.0));
        let dragged = drop_table(&mut store, TableKind::Circle2, Point::new(300.0, 300.0));

        // Left edge proposed at 97: snaps onto the first table's centerline.
        let feedback = store
            .element_drag_move(dragged, Point::new(122.0, 300.0))
            .unwrap();
        assert!((feedback.position.x - 125.0).abs() < 1e-9);
        assert_eq!(feedback.guidelines.len(), 1);
        assert_eq!(feedback.guidelines[0].orientation, Orientation::Vertical);
        assert!(!feedback.overlapping);
        assert_eq!(store.guidelines().len(), 1);
    }

    #[test]
    fn test_drag_move_unknown_element_is_noop() {
        let mut store = store_with_identity_stage();
        drop_table(&mut store, TableKind::Circle2, Point::new(100.0, 100.0));
        let before = store.snapshot();

        assert!(store
            .element_drag_move(uuid::Uuid::new_v4(), Point::new(50.0, 50.0))
            .is_none());
        assert_eq!(before.len(), store.elements().len());
    }

    #[test]
    fn test_drag_end_clears_guidelines() {
        let mut store = store_with_identity_stage();
        drop_table(&mut store, TableKind::Circle2, Point::new(100.0, 100.0));
        let dragged = drop_table(&mut store, TableKind::Circle2, Point::new(300.0, 300.0));

        store.element_drag_move(dragged, Point::new(122.0, 300.0));
        assert!(!store.guidelines().is_empty());

        store.element_drag_end(dragged, Point::new(125.0, 300.0));
        assert!(store.guidelines().is_empty());
        let element = store.elements().iter().find(|e| e.id == dragged).unwrap();
        assert!((element.center.x - 125.0).abs() < 1e-9);
    }

    #[test]
    fn test_overlapping_drag_flags_both_and_raises() {
        let mut store = store_with_identity_stage();
        let resting = drop_table(&mut store, TableKind::Circle2, Point::new(100.0, 100.0));
        let dragged = drop_table(&mut store, TableKind::Circle2, Point::new(300.0, 300.0));

        let feedback = store
            .element_drag_move(dragged, Point::new(110.0, 105.0))
            .unwrap();
        assert!(feedback.overlapping);

        let elements = store.elements();
        assert!(elements.iter().find(|e| e.id == resting).unwrap().overlapping);
        assert!(elements.iter().find(|e| e.id == dragged).unwrap().overlapping);
        // The dragged element was raised to the top of the draw order.
        assert_eq!(elements.last().unwrap().id, dragged);

        // Dragging away clears the flags on both.
        let feedback = store
            .element_drag_move(dragged, Point::new(400.0, 300.0))
            .unwrap();
        assert!(!feedback.overlapping);
        assert!(store.elements().iter().all(|e| !e.overlapping));
    }

    #[test]
    fn test_transform_end_rotates_and_reclamps() {
        let mut store = store_with_identity_stage();
        // A wide table flush against the right wall.
        let id = drop_table(&mut store, TableKind::Rect6, Point::new(600.0, 100.0));
        let before = store.elements()[0].center;
        assert!((before.x - 540.0).abs() < 1e-9);

        // Rotating 90 degrees swaps the footprint (120x50 -> 50x120), so the
        // clamp relaxes on x and the center stays put there.
        store.element_transform_end(
            id,
            ElementTransform {
                size: None,
                rotation: Some(90.0),
            },
        );
        let element = &store.elements()[0];
        assert!((element.rotation - 90.0).abs() < 1e-9);
        assert!((element.center.x - 540.0).abs() < 1e-9);
        // The taller extent still fits below the top wall, so y is untouched.
        assert!((element.center.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_transform_end_resize_reclamps() {
        let mut store = store_with_identity_stage();
        let id = drop_table(&mut store, TableKind::Circle2, Point::new(600.0, 100.0));
        assert!((store.elements()[0].center.x - 575.0).abs() < 1e-9);

        store.element_transform_end(
            id,
            ElementTransform {
                size: Some(Size::new(100.0, 100.0)),
                rotation: None,
            },
        );
        let element = &store.elements()[0];
        assert!((element.width - 100.0).abs() < 1e-9);
        assert!((element.center.x - 550.0).abs() < 1e-9);
    }

    #[test]
    fn test_change_kind_swaps_footprint_in_place() {
        let mut store = store_with_identity_stage();
        drop_table(&mut store, TableKind::Rect1, Point::new(200.0, 200.0));

        store.change_kind(TableKind::Circle8);
        let element = &store.elements()[0];
        assert_eq!(element.kind, TableKind::Circle8);
        assert!((element.center.x - 200.0).abs() < 1e-9);
        assert!((element.width - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_change_kind_without_selection_is_noop() {
        let mut store = store_with_identity_stage();
        store.change_kind(TableKind::Circle8);
        assert!(store.elements().is_empty());
    }

    #[test]
    fn test_rescale_republishes_geometry() {
        let mut store = store_with_identity_stage();
        let outcome = store.rescale(ScaleOp::XUp);

        assert!((outcome.viewport.width - (600.0 + GRID_SIZE)).abs() < 1e-9);
        assert!(!outcome.grid_lines.is_empty());
        // The widened viewport no longer matches the 3:2 frame, leaving an
        // uncovered band at the bottom.
        assert!(outcome.out_of_bounds.area() > 0.0);
    }

    #[test]
    fn test_rescale_rejection_keeps_state() {
        let mut store = store_with_identity_stage();
        // Shrink the width down to a single grid cell.
        for _ in 0..11 {
            store.rescale(ScaleOp::XDown);
        }
        assert!((store.viewport().width - GRID_SIZE).abs() < 1e-9);

        let outcome = store.rescale(ScaleOp::XDown);
        assert!((outcome.viewport.width - GRID_SIZE).abs() < 1e-9);
    }

    #[test]
    fn test_rescale_leaves_elements_unmoved() {
        // Shrinking the viewport does not pull elements back inside; that is
        // intentional, not an invariant violation.
        let mut store = store_with_identity_stage();
        drop_table(&mut store, TableKind::Circle2, Point::new(575.0, 100.0));

        store.rescale(ScaleOp::XDown);
        let element = &store.elements()[0];
        assert!((element.center.x - 575.0).abs() < 1e-9);
        assert!(element.center.x + element.width / 2.0 > store.viewport().width);
    }

    #[test]
    fn test_select_unknown_is_noop() {
        let mut store = store_with_identity_stage();
        let id = drop_table(&mut store, TableKind::Circle2, Point::new(100.0, 100.0));

        store.select(uuid::Uuid::new_v4());
        assert_eq!(store.selected(), Some(id));
    }

    #[test]
    fn test_snapshot_survives_mutation() {
        let mut store = store_with_identity_stage();
        let id = drop_table(&mut store, TableKind::Circle2, Point::new(100.0, 100.0));
        let snapshot = store.snapshot();

        store.element_drag_end(id, Point::new(300.0, 300.0));

        assert!((snapshot[0].center.x - 100.0).abs() < 1e-9);
        assert!((store.elements()[0].center.x - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_state_dump_includes_elements() {
        let mut store = store_with_identity_stage();
        drop_table(&mut store, TableKind::Circle2, Point::new(100.0, 100.0));

        let json = store.to_json().unwrap();
        assert!(json.contains("\"elements\""));
        assert!(json.contains("Circle2"));
    }

    #[test]
    fn test_grid_snap_mode_on_free_axes() {
        let mut store = store_with_identity_stage();
        store.set_snap_mode(SnapMode::Grid);
        let id = drop_table(&mut store, TableKind::Circle2, Point::new(300.0, 300.0));

        let feedback = store
            .element_drag_move(id, Point::new(283.0, 130.0))
            .unwrap();
        assert!((feedback.position.x - 300.0).abs() < 1e-9);
        assert!((feedback.position.y - 150.0).abs() < 1e-9);
        assert!(feedback.guidelines.is_empty());
    }
}
