use serde::{Deserialize, Serialize};

use crate::model::{ActiveView, NavigationState, TransitionState, ViewId};

/// Mutable kernel state: navigation plus the transition machine
///
/// Owned exclusively by the orchestrating engine and mutated only
/// through the navigate / exit-complete operations. Single-threaded by
/// design — there is no parallelism to guard against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteState {
    pub(crate) navigation: NavigationState,
    pub(crate) transition: TransitionState,
}

impl SiteState {
    /// State with the given view mounted and at rest
    pub fn mounted(view: ActiveView) -> Self {
        Self {
            navigation: NavigationState::new(view.path.clone()),
            transition: TransitionState::steady(view),
        }
    }

    /// State with the home view mounted (the initial mount)
    pub fn initial() -> Self {
        Self::mounted(ActiveView::canonical(ViewId::Home))
    }

    /// Read-only navigation state
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    /// Read-only transition state
    pub fn transition(&self) -> &TransitionState {
        &self.transition
    }
}

impl Default for SiteState {
    fn default() -> Self {
        Self::initial()
    }
}
