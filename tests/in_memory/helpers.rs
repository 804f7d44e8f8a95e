//! Shared fixtures for in-memory integration tests.

use std::sync::Arc;

use cadence::board::services::BoardEditor;
use cadence::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{Task, TaskDraft, TaskList, TaskStatus},
    services::TaskService,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Editor type used across in-memory tests.
pub type MemoryEditor = BoardEditor<InMemoryTaskStore, DefaultClock>;

/// Provides a fresh in-memory store for each test.
#[fixture]
pub fn store() -> InMemoryTaskStore {
    InMemoryTaskStore::new()
}

/// Provides an editor over `store`, alongside a handle to the same store.
#[fixture]
pub fn board(store: InMemoryTaskStore) -> (MemoryEditor, InMemoryTaskStore) {
    let tasks = TaskService::new(Arc::new(store.clone()), Arc::new(DefaultClock));
    (BoardEditor::new(tasks), store)
}

/// Builds an unsaved task with the given membership.
///
/// # Errors
///
/// Returns an error if the title is blank.
pub fn task(title: &str, list: TaskList, status: TaskStatus) -> eyre::Result<Task> {
    let draft = TaskDraft::new(title)?.with_list(list).with_status(status);
    Ok(Task::from_draft(draft, &DefaultClock))
}
