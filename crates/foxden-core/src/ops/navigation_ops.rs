//! Navigation operations on the kernel state
//!
//! These are the only mutations the kernel defines. `navigate` feeds the
//! transition machine a resolved target; `exit_complete` retires the
//! outgoing view and lets the incoming one enter. Resolution and
//! fallback policy live at the engine boundary — by the time an
//! `ActiveView` reaches these functions it is already routed.

use foxden_core_types::schema;
use serde::{Deserialize, Serialize};

use crate::errors::{FoxdenError, Result};
use crate::model::{ActiveView, TransitionState};
use crate::ops::state::SiteState;

/// What a navigate operation did to the machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigateOutcome {
    /// Target path equals the path navigation already points at; nothing
    /// changed
    AlreadyCurrent,
    /// A handoff began: the previously steady view is now exiting
    Started {
        /// View that started exiting
        from: ActiveView,
        /// View that will enter once the exit completes
        to: ActiveView,
    },
    /// A handoff was already in flight; its incoming side was replaced
    /// while the same exit keeps running
    Retargeted {
        /// View still playing its exit animation
        outgoing: ActiveView,
        /// New incoming view
        to: ActiveView,
    },
}

/// Point navigation at a resolved target
///
/// Transition rules (keyed by path, not view):
/// - steady on the target path: no-op
/// - steady elsewhere: the current view starts exiting, the target waits
/// - switching toward the target path: no-op
/// - switching elsewhere: the incoming side is retargeted; the in-flight
///   exit runs to completion either way
pub fn navigate(state: &mut SiteState, target: ActiveView) -> NavigateOutcome {
    match &state.transition {
        TransitionState::Steady { current } => {
            if current.path == target.path {
                return NavigateOutcome::AlreadyCurrent;
            }
            let from = current.clone();
            state.navigation.current_path = target.path.clone();
            state.transition = TransitionState::Switching {
                outgoing: from.clone(),
                incoming: target.clone(),
            };
            tracing::debug!(
                target: "foxden::core",
                event = schema::EVENT_NAVIGATION_STARTED,
                from_path = %from.path,
                to_path = %target.path,
            );
            NavigateOutcome::Started { from, to: target }
        }
        TransitionState::Switching { outgoing, incoming } => {
            if incoming.path == target.path {
                return NavigateOutcome::AlreadyCurrent;
            }
            let outgoing = outgoing.clone();
            state.navigation.current_path = target.path.clone();
            state.transition = TransitionState::Switching {
                outgoing: outgoing.clone(),
                incoming: target.clone(),
            };
            tracing::debug!(
                target: "foxden::core",
                event = schema::EVENT_NAVIGATION_RETARGETED,
                from_path = %outgoing.path,
                to_path = %target.path,
            );
            NavigateOutcome::Retargeted {
                outgoing,
                to: target,
            }
        }
    }
}

/// Retire the outgoing view after its exit animation finished
///
/// Collapses `Switching(old, new)` to `Steady(new)`; the incoming view
/// may begin its enter animation from this moment and never earlier.
///
/// # Returns
///
/// The view that just entered.
///
/// # Errors
///
/// Returns `NotSwitching` if no transition is in flight — completing an
/// exit that never started is a driver bug, not a state to absorb.
pub fn exit_complete(state: &mut SiteState) -> Result<ActiveView> {
    match &state.transition {
        TransitionState::Steady { .. } => Err(FoxdenError::NotSwitching),
        TransitionState::Switching { incoming, .. } => {
            let entered = incoming.clone();
            state.transition = TransitionState::steady(entered.clone());
            tracing::debug!(
                target: "foxden::core",
                event = schema::EVENT_NAVIGATION_COMPLETED,
                path = %entered.path,
            );
            Ok(entered)
        }
    }
}
