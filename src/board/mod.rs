//! Drag-and-drop task board core.
//!
//! The board owns the working collection of tasks shown in the week columns
//! and the backlog, resolves which drop target a pointer gesture is over,
//! and applies reordering and re-categorisation while a drag is active.
//! Nothing in the drag path performs I/O; persistence of discrete edits goes
//! through [`services::BoardEditor`].
//!
//! - Domain types in [`domain`]
//! - Collision resolution, the drag state machine, backlog queries, and
//!   store-backed edits in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
