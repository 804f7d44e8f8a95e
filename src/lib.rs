//! Cadence: task board core for an engineering-management dashboard.
//!
//! This crate provides the task model and store behind the dashboard's task
//! board and backlog table, and the drag-and-drop engine that reorders and
//! re-categorises tasks while a pointer gesture is in flight.
//!
//! # Architecture
//!
//! Cadence follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Task records, the task store port, and its adapters
//! - [`board`]: Working collection, collision resolution, and drag sessions

pub mod board;
pub mod task;
