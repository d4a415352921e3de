//! Foxden Engine - Orchestration layer
//!
//! Owns the mutable site state and the document head, coordinates the
//! transition machine, and publishes view metadata at the shell
//! boundary. The kernel in `foxden-core` stays pure; every side effect
//! (head mutation, logging, snapshot I/O) happens here.

pub mod commands;

use foxden_core::render;
use foxden_core::{
    ActiveView, DocumentHead, RouteTable, SiteConfig, SiteState, TransitionState, ViewId,
};
use foxden_core_types::NavigationId;

pub use commands::engine_command::NavigationReport;
pub use commands::engine_query::RouteOverview;
pub use commands::snapshot::{PageEntry, SnapshotManifest};

/// Orchestrator for one running site instance
///
/// Single-threaded by design: `SiteState` and `DocumentHead` have
/// exactly one owner and are mutated only through `navigate` /
/// `exit_complete`.
#[derive(Debug, Clone)]
pub struct SiteEngine {
    pub(crate) config: SiteConfig,
    pub(crate) table: RouteTable,
    pub(crate) state: SiteState,
    pub(crate) head: DocumentHead,
    /// Correlation id of the in-flight handoff, if any; its completion
    /// event reuses the id the navigation started with
    pub(crate) pending_navigation: Option<NavigationId>,
}

impl SiteEngine {
    /// Mount the site: home view steady, head seeded with the shell
    /// pairs and the home metadata already published
    pub fn new(config: SiteConfig) -> Self {
        let table = RouteTable::site_default();
        let state = SiteState::initial();

        let mut head = DocumentHead::new(&config.theme_color, &config.brand);
        head.publish(&render::view_metadata(ViewId::Home));

        Self {
            config,
            table,
            state,
            head,
            pending_navigation: None,
        }
    }

    /// Site configuration the engine was mounted with
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// The immutable route table
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Read-only kernel state
    pub fn state(&self) -> &SiteState {
        &self.state
    }

    /// Read-only document head
    pub fn head(&self) -> &DocumentHead {
        &self.head
    }

    /// The view currently mounted in the shell
    ///
    /// While a handoff is in flight this is still the outgoing view:
    /// the incoming one has not entered yet.
    pub fn mounted_view(&self) -> &ActiveView {
        match self.state.transition() {
            TransitionState::Steady { current } => current,
            TransitionState::Switching { outgoing, .. } => outgoing,
        }
    }

    /// Render the document the user would currently see
    ///
    /// The head is the live one; mid-transition it still carries the
    /// outgoing view's metadata.
    pub fn render_current(&self) -> String {
        let mounted = self.mounted_view();
        let page = render::render_view(mounted.view, &self.config);
        let body = render::shell::wrap(&page.fragment, &self.config);
        render::document::render_document(&self.head, &body, &self.config)
    }
}

impl Default for SiteEngine {
    fn default() -> Self {
        Self::new(SiteConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_mounts_home() {
        let engine = SiteEngine::new(SiteConfig::default());
        assert_eq!(engine.mounted_view().view, ViewId::Home);
        assert_eq!(engine.head().title(), "Лисья Нора — Домашний ресторан");
        assert_eq!(engine.head().site_name(), "Лисья Нора");
    }

    #[test]
    fn test_render_current_shows_home_document() {
        let engine = SiteEngine::default();
        let html = engine.render_current();
        assert!(html.contains("<title>Лисья Нора — Домашний ресторан</title>"));
        assert!(html.contains("Добро пожаловать домой"));
    }
}
