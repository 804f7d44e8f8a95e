//! In-memory store for task tests and demos.

use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: Vec<Task>,
}

impl InMemoryTaskState {
    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given tasks.
    #[must_use]
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryTaskState {
                tasks: tasks.into_iter().collect(),
            })),
        }
    }

    fn read(&self) -> TaskStoreResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskStoreResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn list(&self) -> TaskStoreResult<Vec<Task>> {
        Ok(self.read()?.tasks.clone())
    }

    async fn create(&self, task: &Task) -> TaskStoreResult<Task> {
        let mut state = self.write()?;
        if state.position(task.id()).is_some() {
            return Err(TaskStoreError::DuplicateTask(task.id()));
        }
        state.tasks.push(task.clone());
        Ok(task.clone())
    }

    async fn update(&self, task: &Task) -> TaskStoreResult<Task> {
        let mut state = self.write()?;
        let stored = state
            .tasks
            .iter_mut()
            .find(|stored| stored.id() == task.id())
            .ok_or(TaskStoreError::NotFound(task.id()))?;
        stored.clone_from(task);
        Ok(task.clone())
    }

    async fn delete(&self, id: TaskId) -> TaskStoreResult<()> {
        let mut state = self.write()?;
        let index = state.position(id).ok_or(TaskStoreError::NotFound(id))?;
        state.tasks.remove(index);
        Ok(())
    }
}
