//! Application services for discrete task edits.

mod tasks;

pub use tasks::{TaskService, TaskServiceError, TaskServiceResult};
