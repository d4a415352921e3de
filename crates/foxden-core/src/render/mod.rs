//! Page rendering
//!
//! Five stateless page views, the UI primitives they compose, the shell
//! chrome wrapped around the active view, and full-document assembly.
//! Everything renders to plain HTML strings; views cannot fail — their
//! only input is the static site configuration.

pub mod document;
pub mod shell;
pub mod ui;

mod bbq;
mod contacts;
mod home;
mod lunch;
mod menu;

use crate::config::SiteConfig;
use crate::model::{DocumentHead, PageMetadata, ViewId};

/// Output of one page view: a document fragment plus its metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRender {
    /// HTML fragment for the view's subtree (shell not included)
    pub fragment: String,
    /// Title/description pair the view publishes when it enters
    pub metadata: PageMetadata,
}

/// Render a view to its fragment and metadata
pub fn render_view(view: ViewId, config: &SiteConfig) -> PageRender {
    match view {
        ViewId::Home => home::page(config),
        ViewId::Menu => menu::page(config),
        ViewId::Bbq => bbq::page(config),
        ViewId::Lunch => lunch::page(config),
        ViewId::Contacts => contacts::page(config),
    }
}

/// Three-across image grid used by the barbecue and lunch galleries
pub(crate) fn image_grid(images: &[String], alt_prefix: &str) -> String {
    let mut out = String::from("<div class=\"grid grid-3 gallery\">");
    for (i, src) in images.iter().enumerate() {
        out.push_str(&format!(
            "<div class=\"gallery-item\"><img src=\"{}\" alt=\"{} {}\"></div>",
            ui::escape(src),
            ui::escape(alt_prefix),
            i + 1
        ));
    }
    out.push_str("</div>");
    out
}

/// Metadata a view would publish, without rendering its fragment
pub fn view_metadata(view: ViewId) -> PageMetadata {
    match view {
        ViewId::Home => home::metadata(),
        ViewId::Menu => menu::metadata(),
        ViewId::Bbq => bbq::metadata(),
        ViewId::Lunch => lunch::metadata(),
        ViewId::Contacts => contacts::metadata(),
    }
}

/// Render the complete document for a view at rest
///
/// Builds a head seeded with the shell pairs, publishes the view's
/// metadata into it, wraps the fragment in the shell chrome, and
/// assembles the full page. This is the static-render path used by the
/// CLI and the snapshot writer; the live engine keeps its own head.
pub fn render_page(view: ViewId, config: &SiteConfig) -> String {
    let page = render_view(view, config);
    let mut head = DocumentHead::new(&config.theme_color, &config.brand);
    head.publish(&page.metadata);
    let body = shell::wrap(&page.fragment, config);
    document::render_document(&head, &body, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_view_renders() {
        let config = SiteConfig::default();
        for view in ViewId::ALL {
            let page = render_view(view, &config);
            assert!(!page.fragment.is_empty(), "empty fragment for {}", view);
            assert!(!page.metadata.title.is_empty(), "empty title for {}", view);
        }
    }

    #[test]
    fn test_metadata_matches_render() {
        let config = SiteConfig::default();
        for view in ViewId::ALL {
            assert_eq!(view_metadata(view), render_view(view, &config).metadata);
        }
    }

    #[test]
    fn test_render_page_is_a_complete_document() {
        let html = render_page(ViewId::Contacts, &SiteConfig::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Контакты — Лисья Нора</title>"));
        assert!(html.contains("site-footer"));
    }

    #[test]
    fn test_titles_are_distinct() {
        let mut titles: Vec<String> = ViewId::ALL
            .iter()
            .map(|v| view_metadata(*v).title)
            .collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), ViewId::ALL.len());
    }
}
