//! Ordered working collection of tasks.

use super::BoardDomainError;
use crate::task::domain::{Task, TaskId, TaskList, TaskStatus};
use std::collections::HashSet;

/// Single ordered sequence of every task on the board and in the backlog.
///
/// Sequence order is the display order inside each column and inside the
/// backlog. Each task id appears exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskCollection {
    tasks: Vec<Task>,
}

impl TaskCollection {
    /// Builds a collection, rejecting duplicate task ids.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateTask`] for the first repeated id.
    pub fn new(tasks: impl IntoIterator<Item = Task>) -> Result<Self, BoardDomainError> {
        let mut seen = HashSet::new();
        let mut ordered = Vec::new();
        for task in tasks {
            if !seen.insert(task.id()) {
                return Err(BoardDomainError::DuplicateTask(task.id()));
            }
            ordered.push(task);
        }
        Ok(Self { tasks: ordered })
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the collection holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns all tasks in sequence order.
    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Iterates tasks in sequence order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Returns task ids in sequence order.
    #[must_use]
    pub fn ids(&self) -> Vec<TaskId> {
        self.tasks.iter().map(Task::id).collect()
    }

    /// Returns the position of a task in the sequence.
    #[must_use]
    pub fn index_of(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }

    /// Returns `true` when the task is present.
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.index_of(id).is_some()
    }

    /// Returns the task with the given id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }

    /// Tasks shown in a week column, in sequence order.
    #[must_use]
    pub fn tasks_in_column(&self, status: TaskStatus) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.is_in_column(status))
            .collect()
    }

    /// Tasks in the backlog, in sequence order.
    #[must_use]
    pub fn tasks_in_backlog(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.list() == TaskList::Backlog)
            .collect()
    }

    /// Appends a task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateTask`] when the id is present.
    pub fn push(&mut self, task: Task) -> Result<(), BoardDomainError> {
        if self.contains(task.id()) {
            return Err(BoardDomainError::DuplicateTask(task.id()));
        }
        self.tasks.push(task);
        Ok(())
    }

    /// Replaces a task in place, keeping its position. Returns `false` when
    /// the task is not present.
    pub fn replace(&mut self, task: Task) -> bool {
        match self.get_mut(task.id()) {
            Some(slot) => {
                *slot = task;
                true
            }
            None => false,
        }
    }

    /// Removes a task, returning it.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let index = self.index_of(id)?;
        Some(self.tasks.remove(index))
    }

    /// Inserts `task` immediately before `anchor`. Appends when `anchor` is
    /// not present.
    pub(crate) fn insert_before(&mut self, anchor: TaskId, task: Task) {
        match self.index_of(anchor) {
            Some(index) => self.tasks.insert(index, task),
            None => self.tasks.push(task),
        }
    }

    /// Moves a task to the end of the sequence, which places it last in
    /// whichever column or list view it belongs to.
    pub(crate) fn move_to_end(&mut self, id: TaskId) -> bool {
        match self.remove(id) {
            Some(task) => {
                self.tasks.push(task);
                true
            }
            None => false,
        }
    }

    /// Moves the element at `from` so it ends up at `to`, shifting the
    /// elements in between. Out-of-range indices leave the sequence unchanged
    /// and return `false`.
    pub fn array_move(&mut self, from: usize, to: usize) -> bool {
        if from >= self.tasks.len() || to >= self.tasks.len() {
            return false;
        }
        if from == to {
            return true;
        }
        let task = self.tasks.remove(from);
        self.tasks.insert(to, task);
        true
    }
}

impl<'a> IntoIterator for &'a TaskCollection {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
