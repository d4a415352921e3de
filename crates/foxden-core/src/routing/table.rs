use std::collections::HashMap;

use crate::errors::Result;
use crate::model::{Route, RoutePath, ViewId};
use crate::rules::validation;

/// Static mapping from URL path to page view
///
/// Defined once at startup and immutable afterwards. Construction
/// validates the bijectivity invariants; `resolve` is pure and has no
/// side effects.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    by_path: HashMap<String, ViewId>,
}

impl RouteTable {
    /// Build a table from explicit routes
    ///
    /// # Errors
    ///
    /// Returns a routing error if the routes are not bijective over the
    /// view set (see `rules::validation::validate_routes`).
    pub fn new(routes: Vec<Route>) -> Result<Self> {
        validation::validate_routes(&routes)?;

        let by_path = routes
            .iter()
            .map(|route| (route.path.as_str().to_string(), route.view))
            .collect();

        Ok(Self { routes, by_path })
    }

    /// The production table: every view at its canonical path
    ///
    /// Infallible by construction — `ViewId::ALL` is distinct and the
    /// canonical paths are distinct (unit-tested in the model).
    pub fn site_default() -> Self {
        let routes: Vec<Route> = ViewId::ALL.into_iter().map(Route::canonical).collect();
        let by_path = routes
            .iter()
            .map(|route| (route.path.as_str().to_string(), route.view))
            .collect();

        Self { routes, by_path }
    }

    /// Resolve a normalized path to its view
    ///
    /// Returns `None` for an unmatched path; the fallback policy for
    /// unmatched paths lives at the engine boundary, not here.
    pub fn resolve(&self, path: &RoutePath) -> Option<ViewId> {
        self.by_path.get(path.as_str()).copied()
    }

    /// All routes in navigation order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::site_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_has_five_routes() {
        let table = RouteTable::site_default();
        assert_eq!(table.routes().len(), 5);
    }

    #[test]
    fn test_resolve_every_canonical_path() {
        let table = RouteTable::site_default();
        for view in ViewId::ALL {
            let resolved = table.resolve(&RoutePath::canonical(view));
            assert_eq!(resolved, Some(view), "wrong resolution for {}", view);
        }
    }

    #[test]
    fn test_resolve_unknown_path() {
        let table = RouteTable::site_default();
        let path = RoutePath::parse("/delivery").unwrap();
        assert_eq!(table.resolve(&path), None);
    }

    #[test]
    fn test_new_runs_validation() {
        let routes = vec![Route::canonical(ViewId::Home)];
        assert!(RouteTable::new(routes).is_err());
    }

    #[test]
    fn test_new_accepts_full_table() {
        let routes: Vec<Route> = ViewId::ALL.into_iter().map(Route::canonical).collect();
        let table = RouteTable::new(routes).expect("full table should build");
        assert_eq!(
            table.resolve(&RoutePath::canonical(ViewId::Bbq)),
            Some(ViewId::Bbq)
        );
    }
}
