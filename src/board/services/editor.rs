//! Store-backed edits of the working collection.
//!
//! Discrete UI actions (quick-add, edit dialog save, status toggle, delete)
//! go through the store first. The working collection is only touched once
//! the store has accepted the change, so a failed call leaves the on-screen
//! data exactly as it was.

use super::drag::DropOutcome;
use crate::board::domain::{BoardDomainError, TaskCollection};
use crate::task::{
    domain::{TaskDraft, TaskId, TaskPatch, TaskStatus},
    ports::TaskStore,
    services::{TaskService, TaskServiceError},
};
use mockable::Clock;
use thiserror::Error;
use tracing::debug;

/// Errors returned by board edits.
#[derive(Debug, Error)]
pub enum BoardEditError {
    /// The task service rejected the edit.
    #[error(transparent)]
    Service(#[from] TaskServiceError),
    /// The working collection could not accept the result.
    #[error(transparent)]
    Collection(#[from] BoardDomainError),
    /// The task is not in the working collection.
    #[error("task not on the board: {0}")]
    UnknownTask(TaskId),
}

/// Result type for board edits.
pub type BoardEditResult<T> = Result<T, BoardEditError>;

/// Applies discrete task edits to the store and then to a working
/// collection.
#[derive(Clone)]
pub struct BoardEditor<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    tasks: TaskService<S, C>,
}

impl<S, C> BoardEditor<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates an editor over a task service.
    #[must_use]
    pub const fn new(tasks: TaskService<S, C>) -> Self {
        Self { tasks }
    }

    /// Returns the wrapped task service.
    #[must_use]
    pub const fn service(&self) -> &TaskService<S, C> {
        &self.tasks
    }

    /// Builds a fresh working collection from the store.
    ///
    /// # Errors
    ///
    /// Returns [`BoardEditError::Service`] when the store cannot be read or
    /// [`BoardEditError::Collection`] when it returns duplicate ids.
    pub async fn load(&self) -> BoardEditResult<TaskCollection> {
        let tasks = self.tasks.list().await?;
        Ok(TaskCollection::new(tasks)?)
    }

    /// Creates a task and appends it to the collection.
    ///
    /// # Errors
    ///
    /// Returns [`BoardEditError::Service`] when the store rejects the task.
    pub async fn create(
        &self,
        collection: &mut TaskCollection,
        draft: TaskDraft,
    ) -> BoardEditResult<TaskId> {
        let created = self.tasks.create(draft).await?;
        let id = created.id();
        collection.push(created)?;
        Ok(id)
    }

    /// Applies an edit-dialog patch.
    ///
    /// # Errors
    ///
    /// Returns [`BoardEditError::UnknownTask`] when the task is not in the
    /// collection, or [`BoardEditError::Service`] when validation or
    /// persistence fails.
    pub async fn update(
        &self,
        collection: &mut TaskCollection,
        id: TaskId,
        patch: TaskPatch,
    ) -> BoardEditResult<()> {
        let current = collection
            .get(id)
            .ok_or(BoardEditError::UnknownTask(id))?;
        let updated = self.tasks.update(current, patch).await?;
        collection.replace(updated);
        Ok(())
    }

    /// Applies a status-cell dropdown change.
    ///
    /// # Errors
    ///
    /// Returns [`BoardEditError::UnknownTask`] when the task is not in the
    /// collection, or [`BoardEditError::Service`] when persistence fails.
    pub async fn set_status(
        &self,
        collection: &mut TaskCollection,
        id: TaskId,
        status: TaskStatus,
    ) -> BoardEditResult<()> {
        let current = collection
            .get(id)
            .ok_or(BoardEditError::UnknownTask(id))?;
        let updated = self.tasks.set_status(current, status).await?;
        collection.replace(updated);
        Ok(())
    }

    /// Deletes a task permanently.
    ///
    /// # Errors
    ///
    /// Returns [`BoardEditError::UnknownTask`] when the task is not in the
    /// collection, or [`BoardEditError::Service`] when persistence fails.
    pub async fn delete(&self, collection: &mut TaskCollection, id: TaskId) -> BoardEditResult<()> {
        if !collection.contains(id) {
            return Err(BoardEditError::UnknownTask(id));
        }
        self.tasks.delete(id).await?;
        collection.remove(id);
        Ok(())
    }

    /// Persists the membership a drop produced.
    ///
    /// Drops that did not change list or status are skipped. Returns `true`
    /// when the store was called. The collection already shows the drop, so
    /// a failed call reverts the task to its drag-start list and status.
    ///
    /// # Errors
    ///
    /// Returns [`BoardEditError::UnknownTask`] when the task is not in the
    /// collection, or [`BoardEditError::Service`] when persistence fails.
    pub async fn commit_drop(
        &self,
        collection: &mut TaskCollection,
        outcome: &DropOutcome,
    ) -> BoardEditResult<bool> {
        if !outcome.membership_changed {
            debug!(task_id = %outcome.task_id, "drop kept membership; nothing to persist");
            return Ok(false);
        }
        let current = collection
            .get(outcome.task_id)
            .ok_or(BoardEditError::UnknownTask(outcome.task_id))?;
        let patch = TaskPatch::for_membership(outcome.list, outcome.status);
        let result = self.tasks.update(current, patch).await;
        match result {
            Ok(updated) => {
                collection.replace(updated);
                Ok(true)
            }
            Err(err) => {
                if let Some(task) = collection.get_mut(outcome.task_id) {
                    task.assign_membership(outcome.origin_list, outcome.origin_status);
                }
                debug!(task_id = %outcome.task_id, error = %err, "reverted unsaved drop");
                Err(err.into())
            }
        }
    }
}
