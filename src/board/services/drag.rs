//! Drag session state machine for the task board and backlog.
//!
//! A session starts on drag-start, receives drag-over events at pointer-move
//! frequency, and ends on drop or cancel. Every drag-over rewrites the
//! working collection in place so renderers can repaint the live preview;
//! nothing is persisted mid-gesture.
//!
//! Drag-over classifies the hovered target:
//!
//! - **task**: the dragged task adopts the hovered task's list and status and
//!   is reinserted immediately before it,
//! - **column**: the dragged task joins the week list under that status and
//!   moves to the end of the column,
//! - **backlog**: the dragged task moves to the backlog, keeping its status.
//!
//! Each case is guarded so that replaying the same event changes nothing.
//! Unknown ids are stale references and degrade to "nothing moved".

use super::collision::CollisionResolver;
use crate::board::domain::{DropTargetKind, DropTargetRegistry, Point, Rect, TaskCollection};
use crate::task::domain::{Task, TaskId, TaskList, TaskStatus};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Behaviour switches for drag sessions.
///
/// # Examples
///
/// ```
/// use cadence::board::services::DragSessionConfig;
///
/// let config = DragSessionConfig::default();
/// assert!(!config.restore_on_cancel);
///
/// let restoring = DragSessionConfig::default().with_restore_on_cancel(true);
/// assert!(restoring.restore_on_cancel);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DragSessionConfig {
    /// Restore the dragged task's list and status when a drag is cancelled.
    /// Sequence position is not restored. Off by default: cancelled drags
    /// keep whatever state the last drag-over produced.
    pub restore_on_cancel: bool,
}

impl DragSessionConfig {
    /// Sets whether cancelling a drag restores the original membership.
    #[must_use]
    pub const fn with_restore_on_cancel(mut self, restore_on_cancel: bool) -> Self {
        self.restore_on_cancel = restore_on_cancel;
        self
    }
}

/// An active drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    active: TaskId,
    origin_list: TaskList,
    origin_status: TaskStatus,
    last_target: Option<DropTargetKind>,
}

impl DragSession {
    /// Returns the id of the dragged task.
    #[must_use]
    pub const fn active(&self) -> TaskId {
        self.active
    }

    /// Returns the dragged task's list and status at drag-start.
    #[must_use]
    pub const fn origin(&self) -> (TaskList, TaskStatus) {
        (self.origin_list, self.origin_status)
    }

    /// Returns the target named by the most recent drag-over event.
    #[must_use]
    pub const fn last_target(&self) -> Option<DropTargetKind> {
        self.last_target
    }
}

/// Whether a drag-over event changed the working collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Membership or order changed; renderers should repaint.
    Moved,
    /// Nothing changed.
    Unchanged,
}

impl DragOutcome {
    /// Returns `true` for [`DragOutcome::Moved`].
    #[must_use]
    pub const fn is_moved(self) -> bool {
        matches!(self, Self::Moved)
    }
}

/// Final membership of a dropped task.
///
/// The controller never persists this itself; callers that want drops to
/// survive a reload hand it to
/// [`BoardEditor::commit_drop`](super::BoardEditor::commit_drop).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropOutcome {
    /// The dropped task.
    pub task_id: TaskId,
    /// List after the drop.
    pub list: TaskList,
    /// Status after the drop.
    pub status: TaskStatus,
    /// List at drag-start.
    pub origin_list: TaskList,
    /// Status at drag-start.
    pub origin_status: TaskStatus,
    /// Whether list or status differ from drag-start.
    pub membership_changed: bool,
}

/// Owns the working collection and applies drag lifecycle events to it.
///
/// While a session is active the collection is exclusively owned by the
/// drag; [`DragSessionController::collection_mut`] refuses access until the
/// session ends.
#[derive(Debug, Clone, Default)]
pub struct DragSessionController {
    collection: TaskCollection,
    session: Option<DragSession>,
    config: DragSessionConfig,
    resolver: CollisionResolver,
}

impl DragSessionController {
    /// Creates an idle controller over the given collection.
    #[must_use]
    pub fn new(collection: TaskCollection) -> Self {
        Self::with_config(collection, DragSessionConfig::default())
    }

    /// Creates an idle controller with custom configuration.
    #[must_use]
    pub fn with_config(collection: TaskCollection, config: DragSessionConfig) -> Self {
        Self {
            collection,
            session: None,
            config,
            resolver: CollisionResolver::new(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &DragSessionConfig {
        &self.config
    }

    /// Returns the working collection.
    #[must_use]
    pub const fn collection(&self) -> &TaskCollection {
        &self.collection
    }

    /// Returns the working collection for discrete edits, or `None` while a
    /// drag is active.
    pub const fn collection_mut(&mut self) -> Option<&mut TaskCollection> {
        if self.session.is_some() {
            return None;
        }
        Some(&mut self.collection)
    }

    /// Consumes the controller, returning the working collection.
    #[must_use]
    pub fn into_collection(self) -> TaskCollection {
        self.collection
    }

    /// Returns the active session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Returns the id of the dragged task.
    #[must_use]
    pub fn active_id(&self) -> Option<TaskId> {
        self.session.map(|session| session.active)
    }

    /// Returns the dragged task for preview rendering.
    #[must_use]
    pub fn dragged_task(&self) -> Option<&Task> {
        self.active_id().and_then(|id| self.collection.get(id))
    }

    /// Tasks shown in a week column, in display order.
    #[must_use]
    pub fn tasks_in_column(&self, status: TaskStatus) -> Vec<&Task> {
        self.collection.tasks_in_column(status)
    }

    /// Tasks in the backlog, in display order.
    #[must_use]
    pub fn tasks_in_backlog(&self) -> Vec<&Task> {
        self.collection.tasks_in_backlog()
    }

    /// Starts a drag of the given task.
    ///
    /// Returns `false` when a drag is already active or the task is unknown.
    pub fn drag_start(&mut self, id: TaskId) -> bool {
        if let Some(current) = self.session {
            debug!(active = %current.active, requested = %id, "drag already in progress");
            return false;
        }
        let Some(task) = self.collection.get(id) else {
            debug!(task_id = %id, "drag start for unknown task");
            return false;
        };
        self.session = Some(DragSession {
            active: id,
            origin_list: task.list(),
            origin_status: task.status(),
            last_target: None,
        });
        debug!(task_id = %id, "drag started");
        true
    }

    /// Applies a drag-over event for the hovered target.
    ///
    /// Ignored while idle or when `active` is not the dragged task.
    pub fn drag_over(&mut self, active: TaskId, over: &DropTargetKind) -> DragOutcome {
        let Some(session) = self.session.as_mut().filter(|session| session.active == active)
        else {
            debug!(task_id = %active, "drag over outside of its session");
            return DragOutcome::Unchanged;
        };
        session.last_target = Some(*over);

        let outcome = match *over {
            DropTargetKind::Task { id } if id == active => DragOutcome::Unchanged,
            DropTargetKind::Task { id } => self.over_task(active, id),
            DropTargetKind::Column { status } => self.over_column(active, status),
            DropTargetKind::Backlog => self.over_backlog(active),
        };
        if outcome.is_moved() {
            debug!(task_id = %active, target = %over, "drag over moved task");
        }
        outcome
    }

    /// Resolves the hovered target from the registry and applies it.
    pub fn pointer_move(
        &mut self,
        targets: &DropTargetRegistry,
        pointer: Option<Point>,
        dragged: Rect,
    ) -> DragOutcome {
        let Some(active) = self.active_id() else {
            return DragOutcome::Unchanged;
        };
        let Some(collision) = self.resolver.resolve(targets, pointer, dragged) else {
            return DragOutcome::Unchanged;
        };
        self.drag_over(active, &collision.target.kind)
    }

    /// Ends the drag. When dropped on another task in the same list, the
    /// dragged task is moved to that task's index.
    ///
    /// Returns the dropped task's final membership, or `None` when the event
    /// does not belong to the active session or the task vanished.
    pub fn drag_end(&mut self, active: TaskId, over: Option<&DropTargetKind>) -> Option<DropOutcome> {
        let session = match self.session {
            Some(session) if session.active == active => session,
            _ => {
                debug!(task_id = %active, "drag end outside of its session");
                return None;
            }
        };
        self.session = None;

        if let Some(DropTargetKind::Task { id: target }) = over.copied() {
            if target != active {
                self.reconcile_drop(active, target);
            }
        }

        let Some(task) = self.collection.get(active) else {
            debug!(task_id = %active, "dropped task no longer present");
            return None;
        };
        let outcome = DropOutcome {
            task_id: active,
            list: task.list(),
            status: task.status(),
            origin_list: session.origin_list,
            origin_status: session.origin_status,
            membership_changed: (task.list(), task.status()) != session.origin(),
        };
        debug!(
            task_id = %active,
            list = %outcome.list,
            status = %outcome.status,
            "drag ended"
        );
        Some(outcome)
    }

    /// Cancels the drag. Returns `false` when no drag was active.
    pub fn drag_cancel(&mut self) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };
        if self.config.restore_on_cancel {
            if let Some(task) = self.collection.get_mut(session.active) {
                task.assign_membership(session.origin_list, session.origin_status);
            }
        }
        debug!(
            task_id = %session.active,
            restored = self.config.restore_on_cancel,
            "drag cancelled"
        );
        true
    }

    fn over_task(&mut self, active: TaskId, target: TaskId) -> DragOutcome {
        let indices = (
            self.collection.index_of(active),
            self.collection.index_of(target),
        );
        let (Some(active_index), Some(target_index)) = indices else {
            debug!(task_id = %active, target = %target, "stale task reference");
            return DragOutcome::Unchanged;
        };
        let (Some(active_task), Some(target_task)) = (
            self.collection.as_slice().get(active_index),
            self.collection.as_slice().get(target_index),
        ) else {
            return DragOutcome::Unchanged;
        };
        if active_task.shares_membership_with(target_task)
            && active_index.abs_diff(target_index) == 1
        {
            return DragOutcome::Unchanged;
        }

        let (list, status) = (target_task.list(), target_task.status());
        let Some(mut moving) = self.collection.remove(active) else {
            return DragOutcome::Unchanged;
        };
        moving.assign_membership(list, status);
        self.collection.insert_before(target, moving);
        DragOutcome::Moved
    }

    fn over_column(&mut self, active: TaskId, status: TaskStatus) -> DragOutcome {
        let Some(task) = self.collection.get_mut(active) else {
            debug!(task_id = %active, "stale task reference");
            return DragOutcome::Unchanged;
        };
        if task.is_in_column(status) {
            return DragOutcome::Unchanged;
        }
        task.assign_membership(TaskList::Week, status);
        self.collection.move_to_end(active);
        DragOutcome::Moved
    }

    fn over_backlog(&mut self, active: TaskId) -> DragOutcome {
        let Some(task) = self.collection.get_mut(active) else {
            debug!(task_id = %active, "stale task reference");
            return DragOutcome::Unchanged;
        };
        if task.list() == TaskList::Backlog {
            return DragOutcome::Unchanged;
        }
        task.assign_list(TaskList::Backlog);
        DragOutcome::Moved
    }

    fn reconcile_drop(&mut self, active: TaskId, target: TaskId) {
        let (Some(active_task), Some(target_task)) =
            (self.collection.get(active), self.collection.get(target))
        else {
            debug!(task_id = %active, target = %target, "stale task reference on drop");
            return;
        };
        if active_task.list() != target_task.list() {
            return;
        }
        if let (Some(from), Some(to)) = (
            self.collection.index_of(active),
            self.collection.index_of(target),
        ) {
            self.collection.array_move(from, to);
        }
    }
}
