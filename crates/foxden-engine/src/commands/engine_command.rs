//! Engine-level navigation commands.
//!
//! `navigate` resolves a raw path, applies the fallback policy for
//! unmatched routes, drives the transition machine, and logs the whole
//! thing under one `NavigationId`. `exit_complete` retires the outgoing
//! view and publishes the incoming view's metadata — the only moment
//! the document head changes.

use foxden_core::ops::navigation_ops;
use foxden_core::render;
use foxden_core::{ActiveView, NavigateOutcome, Result, RoutePath, ViewId};
use foxden_core_types::schema;
use foxden_core_types::NavigationId;
use serde::{Deserialize, Serialize};

use crate::SiteEngine;

/// Everything one navigate call did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationReport {
    /// Correlation id shared by this navigation's log events
    pub navigation_id: NavigationId,
    /// Raw path string as requested
    pub requested: String,
    /// Resolved target after normalization and fallback
    pub target: ActiveView,
    /// Whether the unmatched-path fallback to home kicked in
    pub redirected: bool,
    /// What the transition machine did
    pub outcome: NavigateOutcome,
    /// Whether the handoff already finished (instant swap, or nothing
    /// to do); when false, an exit animation is in flight
    pub completed: bool,
}

impl SiteEngine {
    /// Navigate to a raw path string
    ///
    /// An unmatched path falls back to the home view with a warning —
    /// the site never dead-ends. With animations disabled the handoff
    /// completes inside this call; otherwise the caller reports the exit
    /// animation's end via [`SiteEngine::exit_complete`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidPath` if the raw string cannot be normalized
    /// (empty, or missing the leading `/`).
    pub fn navigate(&mut self, raw: &str) -> Result<NavigationReport> {
        let navigation_id = NavigationId::new();
        let path = RoutePath::parse(raw)?;

        let (target, redirected) = match self.table.resolve(&path) {
            Some(view) => (ActiveView::new(view, path), false),
            None => {
                tracing::warn!(
                    target: "foxden::engine",
                    event = schema::EVENT_ROUTE_FALLBACK,
                    navigation_id = %navigation_id,
                    path = %path,
                    "unmatched path, falling back to home"
                );
                (ActiveView::canonical(ViewId::Home), true)
            }
        };

        let outcome = navigation_ops::navigate(&mut self.state, target.clone());

        match &outcome {
            NavigateOutcome::AlreadyCurrent => {}
            NavigateOutcome::Started { from, to } => {
                tracing::info!(
                    target: "foxden::engine",
                    event = schema::EVENT_NAVIGATION_STARTED,
                    navigation_id = %navigation_id,
                    from_path = %from.path,
                    to_path = %to.path,
                    "navigation started"
                );
            }
            NavigateOutcome::Retargeted { outgoing, to } => {
                tracing::info!(
                    target: "foxden::engine",
                    event = schema::EVENT_NAVIGATION_RETARGETED,
                    navigation_id = %navigation_id,
                    from_path = %outgoing.path,
                    to_path = %to.path,
                    "in-flight navigation retargeted"
                );
            }
        }

        if !matches!(outcome, NavigateOutcome::AlreadyCurrent) {
            self.pending_navigation = Some(navigation_id.clone());
        }

        // Without animations there is no exit to wait for: the swap is
        // instant and the metadata publishes in the same step
        let mut completed = matches!(outcome, NavigateOutcome::AlreadyCurrent);
        if !self.config.animations && self.state.transition().is_switching() {
            self.finish_exit(&navigation_id)?;
            completed = true;
        }

        Ok(NavigationReport {
            navigation_id,
            requested: raw.to_string(),
            target,
            redirected,
            outcome,
            completed,
        })
    }

    /// Report the outgoing view's exit animation as finished
    ///
    /// Collapses the in-flight handoff, publishes the entered view's
    /// metadata to the document head, and returns the entered view.
    ///
    /// # Errors
    ///
    /// Returns `NotSwitching` if no transition is in flight.
    pub fn exit_complete(&mut self) -> Result<ActiveView> {
        let navigation_id = self
            .pending_navigation
            .clone()
            .unwrap_or_default();
        self.finish_exit(&navigation_id)
    }

    fn finish_exit(&mut self, navigation_id: &NavigationId) -> Result<ActiveView> {
        let entered = navigation_ops::exit_complete(&mut self.state)?;
        self.pending_navigation = None;
        self.head.publish(&render::view_metadata(entered.view));

        tracing::info!(
            target: "foxden::engine",
            event = schema::EVENT_NAVIGATION_COMPLETED,
            navigation_id = %navigation_id,
            path = %entered.path,
            view = %entered.view,
            "navigation completed"
        );

        Ok(entered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foxden_core::SiteConfig;

    #[test]
    fn test_navigate_starts_handoff_with_animations() {
        let mut engine = SiteEngine::default();

        let report = engine.navigate("/menu").expect("navigate should succeed");

        assert!(matches!(report.outcome, NavigateOutcome::Started { .. }));
        assert!(!report.completed);
        assert!(!report.redirected);
        // The head still shows the outgoing view until the exit finishes
        assert_eq!(engine.head().title(), "Лисья Нора — Домашний ресторан");

        let entered = engine.exit_complete().expect("exit should complete");
        assert_eq!(entered.view, ViewId::Menu);
        assert_eq!(engine.head().title(), "Меню — Лисья Нора");
    }

    #[test]
    fn test_navigate_without_animations_is_instant() {
        let mut config = SiteConfig::default();
        config.animations = false;
        let mut engine = SiteEngine::new(config);

        let report = engine.navigate("/contacts").unwrap();

        assert!(report.completed);
        assert_eq!(engine.head().title(), "Контакты — Лисья Нора");
        assert!(!engine.state().transition().is_switching());
    }

    #[test]
    fn test_unmatched_path_redirects_home() {
        let mut engine = SiteEngine::default();
        engine.navigate("/menu").unwrap();
        engine.exit_complete().unwrap();

        let report = engine.navigate("/wine-list").unwrap();

        assert!(report.redirected);
        assert_eq!(report.target.view, ViewId::Home);
        assert_eq!(report.target.path.as_str(), "/");
    }

    #[test]
    fn test_malformed_path_is_an_error() {
        let mut engine = SiteEngine::default();
        assert!(engine.navigate("menu").is_err());
        assert!(engine.navigate("").is_err());
    }
}
