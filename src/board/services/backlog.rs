//! Search, filter, and sort for the backlog table.
//!
//! Queries are re-derived from the full task list on every render. No
//! incremental index is kept, so each render costs a full scan plus a sort.
//! That does not scale past dashboard-sized task lists.

use crate::task::domain::{Task, TaskCategory, TaskPriority, TaskStatus};
use std::cmp::Ordering;

/// A per-field filter: everything, or one exact value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldFilter<T> {
    /// Accept every value.
    #[default]
    All,
    /// Accept only this value.
    Only(T),
}

impl<T: PartialEq> FieldFilter<T> {
    /// Returns `true` when `value` passes the filter.
    #[must_use]
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }
}

/// Column the backlog table is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Title, lexicographic.
    Title,
    /// Due date; tasks without one sort as the latest date.
    DueDate,
    /// Priority rank.
    Priority,
    /// Status rank.
    Status,
    /// Category label, lexicographic.
    Category,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// A sort key and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortOrder {
    /// Sorted column.
    pub key: SortKey,
    /// Direction.
    pub direction: SortDirection,
}

impl SortOrder {
    /// Ascending order on `key`.
    #[must_use]
    pub const fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// Descending order on `key`.
    #[must_use]
    pub const fn descending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Descending,
        }
    }

    /// Compares two tasks under this order.
    #[must_use]
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        let ordering = match self.key {
            SortKey::Title => a.title().cmp(b.title()),
            SortKey::DueDate => match (a.due_date(), b.due_date()) {
                (Some(left), Some(right)) => left.cmp(&right),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            SortKey::Priority => a.priority().rank().cmp(&b.priority().rank()),
            SortKey::Status => a.status().rank().cmp(&b.status().rank()),
            SortKey::Category => a.category().label().cmp(b.category().label()),
        };
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Search, filter, and sort settings for the backlog table.
///
/// # Examples
///
/// ```
/// use cadence::board::services::{BacklogQuery, FieldFilter, SortKey, SortOrder};
/// use cadence::task::domain::TaskPriority;
///
/// let query = BacklogQuery::new()
///     .with_search("review")
///     .with_priority(FieldFilter::Only(TaskPriority::High))
///     .with_sort(SortOrder::ascending(SortKey::DueDate));
/// assert_eq!(query.search(), "review");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BacklogQuery {
    search: String,
    status: FieldFilter<TaskStatus>,
    priority: FieldFilter<TaskPriority>,
    category: FieldFilter<TaskCategory>,
    sort: Option<SortOrder>,
}

impl BacklogQuery {
    /// Creates a query that keeps every task in its existing order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title search text. Matching is a case-insensitive substring
    /// test; whitespace counts, and only an empty string matches everything.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Sets the status filter.
    #[must_use]
    pub const fn with_status(mut self, status: FieldFilter<TaskStatus>) -> Self {
        self.status = status;
        self
    }

    /// Sets the priority filter.
    #[must_use]
    pub const fn with_priority(mut self, priority: FieldFilter<TaskPriority>) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the category filter.
    #[must_use]
    pub const fn with_category(mut self, category: FieldFilter<TaskCategory>) -> Self {
        self.category = category;
        self
    }

    /// Sets the sort order.
    #[must_use]
    pub const fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Returns the search text.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Returns the sort order, if any.
    #[must_use]
    pub const fn sort(&self) -> Option<SortOrder> {
        self.sort
    }

    /// Handles a click on a sortable column header: the active key flips
    /// direction, any other key starts ascending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = match self.sort {
            Some(SortOrder {
                key: current,
                direction,
            }) if current == key => Some(SortOrder {
                key,
                direction: direction.toggled(),
            }),
            _ => Some(SortOrder::ascending(key)),
        };
    }

    /// Returns `true` when the task passes search and filters.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_with(task, &self.needle())
    }

    /// Filters and sorts `tasks`. The sort is stable, so ties keep their
    /// input order.
    #[must_use]
    pub fn apply<'a>(&self, tasks: impl IntoIterator<Item = &'a Task>) -> Vec<&'a Task> {
        let needle = self.needle();
        let mut rows: Vec<&Task> = tasks
            .into_iter()
            .filter(|task| self.matches_with(task, &needle))
            .collect();
        if let Some(order) = self.sort {
            rows.sort_by(|a, b| order.compare(a, b));
        }
        rows
    }

    fn needle(&self) -> String {
        self.search.to_lowercase()
    }

    fn matches_with(&self, task: &Task, needle: &str) -> bool {
        (needle.is_empty() || task.title().to_lowercase().contains(needle))
            && self.status.matches(&task.status())
            && self.priority.matches(&task.priority())
            && self.category.matches(&task.category())
    }
}
