use serde::{Deserialize, Serialize};

use super::route::RoutePath;

/// Process-wide navigation state
///
/// Single source of truth for which path is active. Mutated only by the
/// navigate command; views never write to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub(crate) current_path: RoutePath,
}

impl NavigationState {
    /// Create a navigation state pointing at the given path
    pub fn new(current_path: RoutePath) -> Self {
        Self { current_path }
    }

    /// Path of the view navigation currently points at
    pub fn current_path(&self) -> &RoutePath {
        &self.current_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::route::ViewId;

    #[test]
    fn test_new_navigation_state() {
        let state = NavigationState::new(RoutePath::canonical(ViewId::Home));
        assert_eq!(state.current_path().as_str(), "/");
    }
}
