//! Functional-boundary apply function
//!
//! This module provides the `apply()` function, the canonical entry
//! point for atomic state mutations in the functional-boundary style.
//!
//! ## Atomicity Contract
//!
//! The `apply()` function guarantees:
//! - **All-or-nothing**: Either the entire command succeeds and returns
//!   a valid new state, or it fails and the old state remains valid
//! - **No panics**: Invalid input returns typed errors
//! - **Deterministic resolution**: Navigation targets are resolved
//!   against the immutable route table before any mutation
//!
//! ## Example
//!
//! ```
//! use foxden_core::{apply, Command, RoutePath, RouteTable, SiteState, ViewId};
//!
//! let table = RouteTable::site_default();
//! let state = SiteState::initial();
//! let cmd = Command::Navigate {
//!     path: RoutePath::canonical(ViewId::Menu),
//! };
//!
//! let state = apply(state, cmd, &table).unwrap();
//! assert!(state.transition().is_switching());
//! ```

use crate::commands::Command;
use crate::errors::Result;
use crate::model::{ActiveView, RoutePath, ViewId};
use crate::ops::{navigation_ops, SiteState};
use crate::routing::RouteTable;

/// Apply a command to the kernel state, returning a new state
///
/// Takes ownership of the current state, executes the command
/// atomically, and returns either a new valid state or an error, in
/// which case the old state (still owned by the caller on the error
/// path) would have remained valid.
///
/// Unmatched paths resolve to the home view at its canonical path — a
/// marketing site never dead-ends. The pure `RouteTable::resolve` stays
/// `Option`-honest; the fallback is applied here, at the boundary.
///
/// # Errors
///
/// Returns `NotSwitching` when `ExitComplete` is applied while no
/// transition is in flight.
pub fn apply(mut state: SiteState, cmd: Command, table: &RouteTable) -> Result<SiteState> {
    match cmd {
        Command::Navigate { path } => {
            let target = resolve_or_fallback(table, path);
            navigation_ops::navigate(&mut state, target);
            Ok(state)
        }

        Command::ExitComplete => {
            navigation_ops::exit_complete(&mut state)?;
            Ok(state)
        }
    }
}

/// Resolve a path against the table, falling back to home when unmatched
pub fn resolve_or_fallback(table: &RouteTable, path: RoutePath) -> ActiveView {
    match table.resolve(&path) {
        Some(view) => ActiveView::new(view, path),
        None => ActiveView::canonical(ViewId::Home),
    }
}
