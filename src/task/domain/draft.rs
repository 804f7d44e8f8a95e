//! Creation and edit payloads for tasks.

use super::{TaskCategory, TaskDomainError, TaskList, TaskPriority, TaskStatus};
use chrono::NaiveDate;

/// Validated payload submitted by the task creation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: Option<String>,
    due_date: Option<NaiveDate>,
    priority: TaskPriority,
    category: TaskCategory,
    status: TaskStatus,
    list: TaskList,
}

impl TaskDraft {
    /// Creates a backlog draft with default status and priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank, or
    /// [`TaskDomainError::TitleTooLong`] past [`MAX_TITLE_CHARS`].
    pub fn new(title: impl Into<String>) -> Result<Self, TaskDomainError> {
        Ok(Self {
            title: validated_title(title.into())?,
            description: None,
            due_date: None,
            priority: TaskPriority::default(),
            category: TaskCategory::default(),
            status: TaskStatus::default(),
            list: TaskList::Backlog,
        })
    }

    /// Creates a draft from a board column quick-add: the task lands in the
    /// week list under the clicked column.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank, or
    /// [`TaskDomainError::TitleTooLong`] past [`MAX_TITLE_CHARS`].
    pub fn for_column(
        title: impl Into<String>,
        status: TaskStatus,
    ) -> Result<Self, TaskDomainError> {
        let mut draft = Self::new(title)?;
        draft.status = status;
        draft.list = TaskList::Week;
        Ok(draft)
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the category.
    #[must_use]
    pub const fn with_category(mut self, category: TaskCategory) -> Self {
        self.category = category;
        self
    }

    /// Overrides the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Overrides the initial list.
    #[must_use]
    pub const fn with_list(mut self, list: TaskList) -> Self {
        self.list = list;
        self
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

    /// Returns the initial status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the initial list.
    #[must_use]
    pub const fn list(&self) -> TaskList {
        self.list
    }
}

/// Partial update produced by the edit dialog or a status-cell change.
///
/// Unset fields are left untouched. `description` and `due_date` use a
/// nested `Option` so callers can clear them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description; `Some(None)` clears it.
    pub description: Option<Option<String>>,
    /// Replacement due date; `Some(None)` clears it.
    pub due_date: Option<Option<NaiveDate>>,
    /// Replacement priority.
    pub priority: Option<TaskPriority>,
    /// Replacement category.
    pub category: Option<TaskCategory>,
    /// Replacement status.
    pub status: Option<TaskStatus>,
    /// Replacement list.
    pub list: Option<TaskList>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a patch that only changes the status.
    #[must_use]
    pub fn for_status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Creates a patch that only changes list membership.
    #[must_use]
    pub fn for_membership(list: TaskList, status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            list: Some(list),
            ..Self::default()
        }
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets or clears the description.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    /// Sets or clears the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the replacement priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the replacement category.
    #[must_use]
    pub const fn with_category(mut self, category: TaskCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets the replacement list.
    #[must_use]
    pub const fn with_list(mut self, list: TaskList) -> Self {
        self.list = Some(list);
        self
    }

    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Longest task title accepted, in characters. Matches the `tasks.title`
/// column width.
pub const MAX_TITLE_CHARS: usize = 255;

pub(super) fn validated_title(title: String) -> Result<String, TaskDomainError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::EmptyTitle);
    }
    let actual = trimmed.chars().count();
    if actual > MAX_TITLE_CHARS {
        return Err(TaskDomainError::TitleTooLong {
            max: MAX_TITLE_CHARS,
            actual,
        });
    }
    Ok(trimmed.to_owned())
}
