//! Table elements and the palette templates they are created from.

use crate::transform::Scale;
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a placed element.
pub type ElementId = Uuid;

/// Unique identifier of a palette slot.
pub type SlotId = Uuid;

/// Enumerated table shapes available in the palette.
///
/// `Circle*` variants are round tables, `Rect*` variants rectangular ones;
/// the number is the seat count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableKind {
    Circle1,
    Rect1,
    Circle2,
    Rect2,
    Circle3,
    Rect4A,
    Circle4,
    Rect4B,
    Circle6,
    Rect6,
    Rect8,
    Circle8,
    Rect10,
}

impl TableKind {
    /// Fixed footprint of this table kind, in viewport units (pre-rotation).
    pub fn dimensions(self) -> Size {
        match self {
            TableKind::Circle1 => Size::new(40.0, 40.0),
            TableKind::Rect1 => Size::new(50.0, 40.0),
            TableKind::Circle2 => Size::new(50.0, 50.0),
            TableKind::Rect2 => Size::new(60.0, 40.0),
            TableKind::Circle3 => Size::new(60.0, 60.0),
            TableKind::Rect4A => Size::new(80.0, 50.0),
            TableKind::Circle4 => Size::new(70.0, 70.0),
            TableKind::Rect4B => Size::new(50.0, 80.0),
            TableKind::Circle6 => Size::new(90.0, 90.0),
            TableKind::Rect6 => Size::new(120.0, 50.0),
            TableKind::Rect8 => Size::new(160.0, 50.0),
            TableKind::Circle8 => Size::new(110.0, 110.0),
            TableKind::Rect10 => Size::new(200.0, 50.0),
        }
    }
}

/// A numbered slot in the finite table palette.
///
/// Slots are consumed when their table lands on the floor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteSlot {
    pub id: SlotId,
    pub label: String,
    pub assigned: bool,
}

/// Number of numbered slots the palette starts with.
pub const PALETTE_SIZE: usize = 20;

/// Build the initial numbered palette.
pub fn default_palette() -> Vec<PaletteSlot> {
    (1..=PALETTE_SIZE)
        .map(|n| PaletteSlot {
            id: Uuid::new_v4(),
            label: n.to_string(),
            assigned: false,
        })
        .collect()
}

/// Descriptor of a palette item being dragged onto the floor.
///
/// A template becomes an [`Element`] only through [`Element::from_template`];
/// nothing else about the drag source leaks into the element record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    /// Palette slot this drag came from, if it came from the finite palette.
    pub source_slot: Option<SlotId>,
    /// Table shape the dropped element will take.
    pub kind: TableKind,
    /// Label shown on the placed table.
    pub label: String,
}

impl Template {
    /// Template for a numbered palette slot (default rectangular table).
    pub fn from_slot(slot: &PaletteSlot) -> Self {
        Self {
            source_slot: Some(slot.id),
            kind: TableKind::Rect1,
            label: slot.label.clone(),
        }
    }

    /// Free-standing template for a bare table kind.
    pub fn from_kind(kind: TableKind) -> Self {
        Self {
            source_slot: None,
            kind,
            label: String::new(),
        }
    }
}

/// A table placed on the floor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub kind: TableKind,
    /// Center position in viewport units.
    pub center: Point,
    /// Width in viewport units, pre-rotation.
    pub width: f64,
    /// Height in viewport units, pre-rotation.
    pub height: f64,
    /// Rotation in degrees, normalized to `[0, 360)`.
    pub rotation: f64,
    pub label: String,
    pub selected: bool,
    /// Set while the element intersects another; read by the renderer.
    pub overlapping: bool,
}

impl Element {
    /// Create an element from a drag template at the given (already clamped)
    /// center position.
    pub fn from_template(template: &Template, center: Point) -> Self {
        let dims = template.kind.dimensions();
        Self {
            id: Uuid::new_v4(),
            kind: template.kind,
            center,
            width: dims.width,
            height: dims.height,
            rotation: 0.0,
            label: template.label.clone(),
            selected: false,
            overlapping: false,
        }
    }

    /// Pre-rotation footprint.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Axis-aligned extent after rotation, in viewport units.
    pub fn rotated_extent(&self) -> Size {
        let theta = self.rotation.to_radians();
        let (sin, cos) = (theta.sin().abs(), theta.cos().abs());
        Size::new(
            self.width * cos + self.height * sin,
            self.width * sin + self.height * cos,
        )
    }

    /// Bounding box on the stage, accounting for rotation.
    pub fn stage_bounds(&self, scale: Scale) -> Rect {
        let center = scale.apply(self.center);
        let extent = scale.apply_size(self.rotated_extent());
        Rect::new(
            center.x - extent.width / 2.0,
            center.y - extent.height / 2.0,
            center.x + extent.width / 2.0,
            center.y + extent.height / 2.0,
        )
    }

    /// Replace the element's kind, keeping its position and rotation.
    pub fn change_kind(&mut self, kind: TableKind) {
        let dims = kind.dimensions();
        self.kind = kind;
        self.width = dims.width;
        self.height = dims.height;
    }

    /// Set the rotation, normalizing into `[0, 360)`.
    pub fn set_rotation(&mut self, degrees: f64) {
        self.rotation = degrees.rem_euclid(360.0);
    }
}
