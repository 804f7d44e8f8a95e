//! Domain model for the task board.
//!
//! Geometry and drop targets describe what the renderers registered for the
//! current frame; the [`TaskCollection`] is the ordered working state the
//! renderers paint from.

mod collection;
mod error;
mod geometry;
mod target;

pub use collection::TaskCollection;
pub use error::BoardDomainError;
pub use geometry::{Point, Rect};
pub use target::{DropTarget, DropTargetKind, DropTargetRegistry, RawDropTarget};
