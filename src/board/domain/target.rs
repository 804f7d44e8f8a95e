//! Drop targets registered by the board and backlog renderers.

use super::{BoardDomainError, Rect};
use crate::task::domain::{TaskId, TaskStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// What a drop target represents. Resolved once at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DropTargetKind {
    /// A task card on the board or a row in the backlog table.
    Task {
        /// Task shown by the card or row.
        id: TaskId,
    },
    /// A week board column.
    Column {
        /// Status the column collects.
        status: TaskStatus,
    },
    /// The backlog container.
    Backlog,
}

impl DropTargetKind {
    /// Creates a task target kind.
    #[must_use]
    pub const fn task(id: TaskId) -> Self {
        Self::Task { id }
    }

    /// Creates a column target kind.
    #[must_use]
    pub const fn column(status: TaskStatus) -> Self {
        Self::Column { status }
    }

    /// Returns the task id for task targets.
    #[must_use]
    pub const fn task_id(&self) -> Option<TaskId> {
        match self {
            Self::Task { id } => Some(*id),
            Self::Column { .. } | Self::Backlog => None,
        }
    }

    /// Returns the type tag renderers use for this kind.
    #[must_use]
    pub const fn type_tag(&self) -> &'static str {
        match self {
            Self::Task { .. } => "task",
            Self::Column { .. } => "column",
            Self::Backlog => "backlog",
        }
    }

    /// Specificity used to break ties between overlapping targets; lower
    /// wins. Cards sit inside columns, which sit beside the backlog.
    #[must_use]
    pub const fn specificity(&self) -> u8 {
        match self {
            Self::Task { .. } => 0,
            Self::Column { .. } => 1,
            Self::Backlog => 2,
        }
    }
}

impl fmt::Display for DropTargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.type_tag();
        match self {
            Self::Task { id } => write!(f, "{tag}:{id}"),
            Self::Column { status } => write!(f, "{tag}:{status}"),
            Self::Backlog => f.write_str(tag),
        }
    }
}

/// A registered drop target and its rectangle for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropTarget {
    /// What the target represents.
    pub kind: DropTargetKind,
    /// Where the target is drawn.
    pub rect: Rect,
}

impl DropTarget {
    /// Creates a drop target.
    #[must_use]
    pub const fn new(kind: DropTargetKind, rect: Rect) -> Self {
        Self { kind, rect }
    }
}

/// Drop target as described by a renderer, before its type tag is checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDropTarget {
    /// Stable identifier; the task id for task targets.
    pub id: String,
    /// Type tag: `task`, `column`, or `backlog`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Column status, required for column targets.
    #[serde(default)]
    pub status: Option<String>,
    /// Where the target is drawn.
    pub rect: Rect,
}

impl RawDropTarget {
    /// Creates a raw drop target description.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: impl Into<String>, rect: Rect) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            status: None,
            rect,
        }
    }

    /// Sets the column status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

impl TryFrom<RawDropTarget> for DropTarget {
    type Error = BoardDomainError;

    fn try_from(raw: RawDropTarget) -> Result<Self, Self::Error> {
        let kind = match raw.kind.trim() {
            "task" => {
                let id = raw
                    .id
                    .parse::<TaskId>()
                    .map_err(|_| BoardDomainError::InvalidTaskTarget(raw.id.clone()))?;
                DropTargetKind::task(id)
            }
            "column" => {
                let status = raw
                    .status
                    .as_deref()
                    .ok_or_else(|| BoardDomainError::MissingColumnStatus(raw.id.clone()))?;
                DropTargetKind::column(TaskStatus::try_from(status)?)
            }
            "backlog" => DropTargetKind::Backlog,
            _ => {
                return Err(BoardDomainError::InvalidTargetType {
                    id: raw.id,
                    kind: raw.kind,
                });
            }
        };
        Ok(Self::new(kind, raw.rect))
    }
}

/// Drop targets visible in the current frame, in registration order.
///
/// Owned by the renderers; the collision resolver only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropTargetRegistry {
    targets: Vec<DropTarget>,
}

impl DropTargetRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a target, replacing the rectangle of an existing target of
    /// the same kind.
    pub fn register(&mut self, target: DropTarget) {
        match self.targets.iter_mut().find(|known| known.kind == target.kind) {
            Some(known) => known.rect = target.rect,
            None => self.targets.push(target),
        }
    }

    /// Registers a renderer-described target.
    ///
    /// Invalid descriptions are skipped; debug builds log a warning.
    ///
    /// # Errors
    ///
    /// Returns the [`BoardDomainError`] explaining why the target was skipped.
    pub fn register_raw(&mut self, raw: RawDropTarget) -> Result<(), BoardDomainError> {
        match DropTarget::try_from(raw) {
            Ok(target) => {
                self.register(target);
                Ok(())
            }
            Err(err) => {
                if cfg!(debug_assertions) {
                    warn!(error = %err, "ignoring drop target registration");
                }
                Err(err)
            }
        }
    }

    /// Removes the target of the given kind. Returns `true` if it existed.
    pub fn unregister(&mut self, kind: &DropTargetKind) -> bool {
        let before = self.targets.len();
        self.targets.retain(|target| target.kind != *kind);
        self.targets.len() != before
    }

    /// Removes every target.
    pub fn clear(&mut self) {
        self.targets.clear();
    }

    /// Returns the registered target of the given kind.
    #[must_use]
    pub fn get(&self, kind: &DropTargetKind) -> Option<&DropTarget> {
        self.targets.iter().find(|target| target.kind == *kind)
    }

    /// Iterates targets in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &DropTarget> {
        self.targets.iter()
    }

    /// Returns the number of registered targets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns `true` when no targets are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl FromIterator<DropTarget> for DropTargetRegistry {
    fn from_iter<I: IntoIterator<Item = DropTarget>>(iter: I) -> Self {
        let mut registry = Self::new();
        for target in iter {
            registry.register(target);
        }
        registry
    }
}
