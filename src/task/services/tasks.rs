//! Service layer for task creation, editing, and deletion.

use crate::task::{
    domain::{Task, TaskDomainError, TaskDraft, TaskId, TaskPatch, TaskStatus},
    ports::{TaskStore, TaskStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task CRUD orchestration service.
///
/// Every method computes the new record locally and returns whatever the
/// store persisted. Callers holding an on-screen copy should only replace it
/// once the returned future resolves successfully.
#[derive(Clone)]
pub struct TaskService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> TaskService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Returns all stored tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Store`] when the store cannot be read.
    pub async fn list(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.store.list().await?)
    }

    /// Creates a task from a validated draft.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Store`] when the store rejects the record.
    pub async fn create(&self, draft: TaskDraft) -> TaskServiceResult<Task> {
        let task = Task::from_draft(draft, &*self.clock);
        let created = self.store.create(&task).await?;
        debug!(task_id = %created.id(), list = %created.list(), "created task");
        Ok(created)
    }

    /// Applies a partial edit to `current` and persists the result.
    ///
    /// `current` is not modified; the persisted record is returned.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the patch is invalid or
    /// [`TaskServiceError::Store`] when persistence fails.
    pub async fn update(&self, current: &Task, patch: TaskPatch) -> TaskServiceResult<Task> {
        let mut edited = current.clone();
        edited.apply_patch(patch, &*self.clock)?;
        let updated = self.store.update(&edited).await?;
        debug!(task_id = %updated.id(), "updated task");
        Ok(updated)
    }

    /// Persists a status change made from the status-cell dropdown.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Store`] when persistence fails.
    pub async fn set_status(&self, current: &Task, status: TaskStatus) -> TaskServiceResult<Task> {
        self.update(current, TaskPatch::for_status(status)).await
    }

    /// Deletes a task permanently.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Store`] when the task is missing or
    /// persistence fails.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        self.store.delete(id).await?;
        debug!(task_id = %id, "deleted task");
        Ok(())
    }
}
