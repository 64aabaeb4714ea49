//! Seatmap Core Library
//!
//! Spatial layout engine for the Seatmap floor editor: coordinate-space
//! transforms, grid and guideline snapping, bounds clamping, overlap
//! detection and the layout store that ties them together. Rendering, image
//! loading and host event plumbing live in the consuming UI shell.

pub mod bounds;
pub mod element;
pub mod error;
pub mod grid;
pub mod guides;
pub mod overlap;
pub mod store;
pub mod transform;
pub mod viewport;

pub use bounds::{clamp_axis, clamp_center};
pub use element::{Element, ElementId, PaletteSlot, TableKind, Template};
pub use error::{LayoutError, LayoutResult};
pub use grid::{GRID_SIZE, GridLine, Orientation, SnapMode, grid_lines, snap};
pub use guides::{GUIDELINE_OFFSET, GuideSnap, Guideline, SnapEdge, snap_to_guides};
pub use overlap::{INTERSECTION_OFFSET, detect_overlaps, have_intersection};
pub use store::{DragState, ElementTransform, LayoutStore, MoveFeedback, RescaleOutcome};
pub use transform::{Projection, Scale};
pub use viewport::{ASPECT_RATIO, INITIAL_VIEWPORT, ScaleOp};
