//! Shared builders for board tests.

use crate::board::domain::TaskCollection;
use crate::task::domain::{Task, TaskDraft, TaskId, TaskList, TaskStatus};
use mockable::DefaultClock;

/// Builds a task with the given membership.
pub fn task(title: &str, list: TaskList, status: TaskStatus) -> Task {
    let draft = TaskDraft::new(title)
        .expect("valid draft")
        .with_list(list)
        .with_status(status);
    Task::from_draft(draft, &DefaultClock)
}

/// Builds a week-list task in the given column.
pub fn week(title: &str, status: TaskStatus) -> Task {
    task(title, TaskList::Week, status)
}

/// Builds a backlog task with the given status.
pub fn backlog(title: &str, status: TaskStatus) -> Task {
    task(title, TaskList::Backlog, status)
}

/// Builds a collection from tasks with distinct ids.
pub fn collection(tasks: Vec<Task>) -> TaskCollection {
    TaskCollection::new(tasks).expect("distinct task ids")
}

/// Titles in sequence order.
pub fn titles<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<&'a str> {
    tasks.into_iter().map(Task::title).collect()
}

/// Looks up a task id by title.
pub fn id_of(collection: &TaskCollection, title: &str) -> TaskId {
    collection
        .iter()
        .find(|task| task.title() == title)
        .map(Task::id)
        .expect("task with title exists")
}
