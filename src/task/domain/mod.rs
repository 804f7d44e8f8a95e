//! Domain model for dashboard tasks.
//!
//! Tasks are the unit the board schedules. Each task belongs to exactly one
//! list (`week` or `backlog`) and carries a status that doubles as its board
//! column while it sits in the week list.

mod attributes;
mod draft;
mod error;
mod ids;
mod task;

pub use attributes::{TaskCategory, TaskList, TaskPriority, TaskStatus};
pub use draft::{MAX_TITLE_CHARS, TaskDraft, TaskPatch};
pub use error::{ParseTaskFieldError, TaskDomainError};
pub use ids::TaskId;
pub use task::{PersistedTaskData, Task};
