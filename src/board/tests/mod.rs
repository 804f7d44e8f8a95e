//! Unit tests for the board module.

mod collection_tests;
mod fixtures;
