//! Error taxonomy for layout operations.
//!
//! Nothing here is fatal: every failure degrades to "no state change" at the
//! store boundary, where it is logged and swallowed.

use crate::element::ElementId;
use thiserror::Error;

/// Errors raised by layout operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// A drop arrived without an active drag template.
    #[error("no drag in progress")]
    InvalidDrop,
    /// A rescale would leave the viewport below one grid cell.
    #[error("rescale would shrink the viewport below one grid cell")]
    DegenerateScale,
    /// An operation referenced an element that is no longer in the list.
    #[error("unknown element: {0}")]
    UnknownElement(ElementId),
}

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;
