use serde::{Deserialize, Serialize};

use super::route::{RoutePath, ViewId};

/// Enter/exit offset in logical units (CSS px)
pub const PAGE_OFFSET_Y: f32 = 16.0;

/// Enter duration for the home hero, seconds
pub const HERO_ENTER_SECS: f32 = 0.6;

/// Enter/exit duration for inner views, seconds
pub const PAGE_MOTION_SECS: f32 = 0.3;

/// A mounted view together with the path it was reached through
///
/// Transitions are keyed by the path string, so two paths resolving to
/// the same view would still hand off through a full exit/enter cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveView {
    /// View being shown
    pub view: ViewId,
    /// Path the view was resolved from
    pub path: RoutePath,
}

impl ActiveView {
    /// Create an active view entry
    pub fn new(view: ViewId, path: RoutePath) -> Self {
        Self { view, path }
    }

    /// Active view for a view's canonical path
    pub fn canonical(view: ViewId) -> Self {
        Self::new(view, RoutePath::canonical(view))
    }
}

/// Phase of one view inside a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewPhase {
    /// The view is waiting for the outgoing view to finish, then enters
    Entering,
    /// The view is at rest and fully visible
    Steady,
    /// The view is playing its exit animation
    Exiting,
}

/// Transition controller state
///
/// At most one view subtree is ever exiting: while `Switching`, the
/// incoming view's enter does not begin until the outgoing view's exit
/// reports complete (wait-mode ordering).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionState {
    /// At rest: exactly one view mounted
    Steady {
        /// The mounted view
        current: ActiveView,
    },
    /// Handoff in flight: outgoing exits first, incoming waits
    Switching {
        /// View playing its exit animation
        outgoing: ActiveView,
        /// View that enters once the exit completes
        incoming: ActiveView,
    },
}

impl TransitionState {
    /// Steady state showing the given view
    pub fn steady(current: ActiveView) -> Self {
        TransitionState::Steady { current }
    }

    /// Whether a handoff is in flight
    pub fn is_switching(&self) -> bool {
        matches!(self, TransitionState::Switching { .. })
    }

    /// The view navigation currently points at
    ///
    /// In `Steady` this is the mounted view; in `Switching` it is the
    /// incoming view, which `NavigationState` already tracks.
    pub fn target(&self) -> &ActiveView {
        match self {
            TransitionState::Steady { current } => current,
            TransitionState::Switching { incoming, .. } => incoming,
        }
    }

    /// Phase of the view mounted under the given path, if any
    pub fn phase_of(&self, path: &RoutePath) -> Option<ViewPhase> {
        match self {
            TransitionState::Steady { current } => {
                (current.path == *path).then_some(ViewPhase::Steady)
            }
            TransitionState::Switching { outgoing, incoming } => {
                if outgoing.path == *path {
                    Some(ViewPhase::Exiting)
                } else if incoming.path == *path {
                    Some(ViewPhase::Entering)
                } else {
                    None
                }
            }
        }
    }
}

/// Animation parameters for one side of a view handoff
///
/// Purely descriptive: the kernel never waits on wall-clock time. When
/// animations are disabled the swap is instant and no motion is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    /// Vertical offset at the start of the animation, logical units
    pub from_offset_y: f32,
    /// Vertical offset at the end of the animation, logical units
    pub to_offset_y: f32,
    /// Opacity at the start of the animation
    pub from_opacity: f32,
    /// Opacity at the end of the animation
    pub to_opacity: f32,
    /// Duration in seconds
    pub duration_secs: f32,
}

impl Motion {
    /// Enter motion: slide up from +16 units while fading in
    pub fn page_enter() -> Self {
        Self {
            from_offset_y: PAGE_OFFSET_Y,
            to_offset_y: 0.0,
            from_opacity: 0.0,
            to_opacity: 1.0,
            duration_secs: PAGE_MOTION_SECS,
        }
    }

    /// Exit motion: mirror of the enter, sliding to −16 units
    pub fn page_exit() -> Self {
        Self {
            from_offset_y: 0.0,
            to_offset_y: -PAGE_OFFSET_Y,
            from_opacity: 1.0,
            to_opacity: 0.0,
            duration_secs: PAGE_MOTION_SECS,
        }
    }

    /// Enter motion for the home hero (slower than inner views)
    pub fn hero_enter() -> Self {
        Self {
            duration_secs: HERO_ENTER_SECS,
            ..Self::page_enter()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steady_phase() {
        let state = TransitionState::steady(ActiveView::canonical(ViewId::Home));
        let home = RoutePath::canonical(ViewId::Home);
        let menu = RoutePath::canonical(ViewId::Menu);

        assert_eq!(state.phase_of(&home), Some(ViewPhase::Steady));
        assert_eq!(state.phase_of(&menu), None);
        assert!(!state.is_switching());
    }

    #[test]
    fn test_switching_phases() {
        let state = TransitionState::Switching {
            outgoing: ActiveView::canonical(ViewId::Home),
            incoming: ActiveView::canonical(ViewId::Menu),
        };

        let home = RoutePath::canonical(ViewId::Home);
        let menu = RoutePath::canonical(ViewId::Menu);
        assert_eq!(state.phase_of(&home), Some(ViewPhase::Exiting));
        assert_eq!(state.phase_of(&menu), Some(ViewPhase::Entering));
        assert_eq!(state.target().view, ViewId::Menu);
    }

    #[test]
    fn test_exit_mirrors_enter() {
        let enter = Motion::page_enter();
        let exit = Motion::page_exit();

        assert_eq!(enter.from_offset_y, -exit.to_offset_y);
        assert_eq!(enter.duration_secs, exit.duration_secs);
        assert_eq!(enter.from_opacity, exit.to_opacity);
    }

    #[test]
    fn test_hero_enter_is_slower() {
        assert!(Motion::hero_enter().duration_secs > Motion::page_enter().duration_secs);
        assert_eq!(Motion::hero_enter().from_offset_y, PAGE_OFFSET_Y);
    }
}
