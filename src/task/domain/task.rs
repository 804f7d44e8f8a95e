//! Task aggregate root.

use super::{
    TaskCategory, TaskDomainError, TaskDraft, TaskId, TaskList, TaskPatch, TaskPriority,
    TaskStatus, draft::validated_title,
};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    due_date: Option<NaiveDate>,
    priority: TaskPriority,
    category: TaskCategory,
    status: TaskStatus,
    list: TaskList,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted category.
    pub category: TaskCategory,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted list membership.
    pub list: TaskList,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest edit timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task from a validated creation draft.
    #[must_use]
    pub fn from_draft(draft: TaskDraft, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title: draft.title().to_owned(),
            description: draft.description().map(str::to_owned),
            due_date: draft.due_date(),
            priority: draft.priority(),
            category: draft.category(),
            status: draft.status(),
            list: draft.list(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            due_date: data.due_date,
            priority: data.priority,
            category: data.category,
            status: data.status,
            list: data.list,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> TaskCategory {
        self.category
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the list the task belongs to.
    #[must_use]
    pub const fn list(&self) -> TaskList {
        self.list
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest edit timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns `true` when the task is shown in the given week column.
    #[must_use]
    pub fn is_in_column(&self, status: TaskStatus) -> bool {
        self.list == TaskList::Week && self.status == status
    }

    /// Returns `true` when both tasks share list and status.
    #[must_use]
    pub fn shares_membership_with(&self, other: &Self) -> bool {
        self.list == other.list && self.status == other.status
    }

    /// Moves the task to another list and status without touching the edit
    /// timestamp. Used for in-memory board moves that are not persisted.
    pub const fn assign_membership(&mut self, list: TaskList, status: TaskStatus) {
        self.list = list;
        self.status = status;
    }

    /// Moves the task to another list, keeping its status.
    pub const fn assign_list(&mut self, list: TaskList) {
        self.list = list;
    }

    /// Applies a partial edit and stamps the edit timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] or
    /// [`TaskDomainError::TitleTooLong`] when the patch carries an invalid
    /// title. The task is left unchanged in that case.
    pub fn apply_patch(
        &mut self,
        patch: TaskPatch,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        let TaskPatch {
            title,
            description,
            due_date,
            priority,
            category,
            status,
            list,
        } = patch;

        if let Some(new_title) = title {
            self.title = validated_title(new_title)?;
        }
        if let Some(new_description) = description {
            self.description = new_description;
        }
        if let Some(new_due_date) = due_date {
            self.due_date = new_due_date;
        }
        if let Some(new_priority) = priority {
            self.priority = new_priority;
        }
        if let Some(new_category) = category {
            self.category = new_category;
        }
        if let Some(new_status) = status {
            self.status = new_status;
        }
        if let Some(new_list) = list {
            self.list = new_list;
        }
        self.touch(clock);
        Ok(())
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
