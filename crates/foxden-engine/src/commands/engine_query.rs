//! Read-only engine queries.
//!
//! Everything a driver needs to inspect the running site without
//! mutating it: the route overview, the current phase of any path, and
//! static per-route rendering.

use foxden_core::render;
use foxden_core::{PageMetadata, Result, RoutePath, ViewId, ViewPhase};
use serde::{Deserialize, Serialize};

use crate::SiteEngine;

/// One row of the route overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteOverview {
    /// Path the route answers to
    pub path: String,
    /// View id slug
    pub view: String,
    /// Navigation label shown in the header
    pub label: String,
    /// Title the view publishes when active
    pub title: String,
}

impl SiteEngine {
    /// The route table with the metadata each view would publish
    pub fn routes_overview(&self) -> Vec<RouteOverview> {
        self.table
            .routes()
            .iter()
            .map(|route| {
                let metadata = render::view_metadata(route.view);
                RouteOverview {
                    path: route.path.as_str().to_string(),
                    view: route.view.to_string(),
                    label: route.view.nav_label().to_string(),
                    title: metadata.title,
                }
            })
            .collect()
    }

    /// Metadata the active view has published (mid-transition this is
    /// still the outgoing view's pair)
    pub fn published_metadata(&self) -> PageMetadata {
        PageMetadata::new(self.head.title(), self.head.description())
    }

    /// Phase of the view under the given raw path, if it is mounted
    ///
    /// # Errors
    ///
    /// Returns `InvalidPath` if the raw string cannot be normalized.
    pub fn phase_of(&self, raw: &str) -> Result<Option<ViewPhase>> {
        let path = RoutePath::parse(raw)?;
        Ok(self.state.transition().phase_of(&path))
    }

    /// Statically render the document for a raw path
    ///
    /// Resolution applies the same home fallback as navigation, but no
    /// state moves: this is the CLI/export path.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPath` if the raw string cannot be normalized.
    pub fn render_route(&self, raw: &str) -> Result<String> {
        let path = RoutePath::parse(raw)?;
        let view = self.table.resolve(&path).unwrap_or(ViewId::Home);
        Ok(render::render_page(view, &self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_overview_lists_five_rows() {
        let engine = SiteEngine::default();
        let overview = engine.routes_overview();

        assert_eq!(overview.len(), 5);
        assert_eq!(overview[0].path, "/");
        assert_eq!(overview[0].title, "Лисья Нора — Домашний ресторан");
        assert_eq!(overview[4].view, "contacts");
    }

    #[test]
    fn test_phase_of_tracks_transition() {
        let mut engine = SiteEngine::default();
        engine.navigate("/menu").unwrap();

        assert_eq!(engine.phase_of("/").unwrap(), Some(ViewPhase::Exiting));
        assert_eq!(engine.phase_of("/menu").unwrap(), Some(ViewPhase::Entering));
        assert_eq!(engine.phase_of("/bbq").unwrap(), None);
    }

    #[test]
    fn test_render_route_without_state_change() {
        let engine = SiteEngine::default();
        let html = engine.render_route("/lunch").unwrap();

        assert!(html.contains("<title>Корпоративные обеды — Лисья Нора</title>"));
        // The engine itself did not move
        assert_eq!(engine.mounted_view().view, ViewId::Home);
        assert_eq!(engine.head().title(), "Лисья Нора — Домашний ресторан");
    }

    #[test]
    fn test_published_metadata_mirrors_head() {
        let mut engine = SiteEngine::default();
        engine.navigate("/bbq").unwrap();
        engine.exit_complete().unwrap();

        let published = engine.published_metadata();
        assert_eq!(published.title, "Шашлыки с доставкой — Лисья Нора");
        assert_eq!(published.description, engine.head().description());
    }

    #[test]
    fn test_render_route_falls_back_to_home() {
        let engine = SiteEngine::default();
        let html = engine.render_route("/missing").unwrap();
        assert!(html.contains("<title>Лисья Нора — Домашний ресторан</title>"));
    }
}
