//! Command types for the transition machine
//!
//! This module defines the command inventory that serves as the entry
//! point for functional-boundary operations via the `apply()` function.

use crate::model::RoutePath;

/// Command enum covering every kernel mutation
///
/// Commands are processed by the `apply()` function, which takes
/// ownership of the current state, executes the command, and returns a
/// new valid state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Point navigation at a path; an unmatched path falls back to home
    Navigate { path: RoutePath },

    /// Report the outgoing view's exit animation as finished
    ExitComplete,
}
