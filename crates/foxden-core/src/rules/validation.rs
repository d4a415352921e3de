//! Route table invariant enforcement
//!
//! The table must be bijective over the closed view set: every path maps
//! to exactly one view, and every view is reachable through exactly one
//! path. Violations are construction-time errors, never runtime
//! surprises.

use std::collections::HashSet;

use crate::errors::{FoxdenError, Result};
use crate::model::{Route, ViewId};

/// Validate the route table invariants
///
/// # Errors
///
/// - `DuplicateRoutePath` if two routes share a path
/// - `DuplicateRouteView` if a view is mapped by more than one route
/// - `UnroutedView` if a view has no route at all
pub fn validate_routes(routes: &[Route]) -> Result<()> {
    let mut seen_paths: HashSet<&str> = HashSet::new();
    let mut seen_views: HashSet<ViewId> = HashSet::new();

    for route in routes {
        if !seen_paths.insert(route.path.as_str()) {
            return Err(FoxdenError::DuplicateRoutePath {
                path: route.path.as_str().to_string(),
            });
        }
        if !seen_views.insert(route.view) {
            return Err(FoxdenError::DuplicateRouteView {
                view: route.view.to_string(),
            });
        }
    }

    for view in ViewId::ALL {
        if !seen_views.contains(&view) {
            return Err(FoxdenError::UnroutedView {
                view: view.to_string(),
            });
        }
    }

    Ok(())
}
