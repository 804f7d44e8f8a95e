//! Board services: collision resolution, the drag session state machine,
//! backlog table queries, and store-backed edits of the working collection.

mod backlog;
mod collision;
mod drag;
mod editor;

pub use backlog::{BacklogQuery, FieldFilter, SortDirection, SortKey, SortOrder};
pub use collision::{Collision, CollisionResolver, CollisionStrategy};
pub use drag::{
    DragOutcome, DragSession, DragSessionConfig, DragSessionController, DropOutcome,
};
pub use editor::{BoardEditError, BoardEditResult, BoardEditor};
