//! Command orchestration layer.
//!
//! High-level commands and queries that coordinate the pure kernel with
//! the engine-owned side effects: head publication, logging, snapshot
//! output.

pub mod engine_command;
pub mod engine_query;
pub mod snapshot;
