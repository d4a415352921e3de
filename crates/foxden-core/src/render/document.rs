//! Full-document assembly
//!
//! Joins the document head (title, description, theme-color,
//! og:site_name) with the shell-wrapped view body. When animations are
//! enabled the document carries the enter/exit keyframes derived from
//! the motion constants; otherwise the swap is instant and no motion
//! styles are emitted.

use crate::config::SiteConfig;
use crate::model::{DocumentHead, Motion};
use crate::render::ui::escape;

/// Assemble a complete HTML document
pub fn render_document(head: &DocumentHead, body: &str, config: &SiteConfig) -> String {
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html lang=\"ru\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape(head.title())));
    out.push_str(&format!(
        "<meta name=\"description\" content=\"{}\">\n",
        escape(head.description())
    ));
    out.push_str(&format!(
        "<meta name=\"theme-color\" content=\"{}\">\n",
        escape(head.theme_color())
    ));
    out.push_str(&format!(
        "<meta property=\"og:site_name\" content=\"{}\">\n",
        escape(head.site_name())
    ));
    if config.animations {
        out.push_str(&motion_styles());
    }
    out.push_str("</head>\n<body>\n");
    out.push_str(body);
    out.push_str("\n</body>\n</html>\n");

    out
}

/// Enter keyframes for the page and the slower hero variant
///
/// Exit mirrors enter (slide to the negative offset while fading); it is
/// included for completeness even though a statically rendered page only
/// ever plays the enter side.
fn motion_styles() -> String {
    let enter = Motion::page_enter();
    let exit = Motion::page_exit();
    let hero = Motion::hero_enter();

    format!(
        "<style>\n\
         @keyframes view-enter {{ from {{ opacity: {}; transform: translateY({}px); }} \
         to {{ opacity: {}; transform: translateY({}px); }} }}\n\
         @keyframes view-exit {{ from {{ opacity: {}; transform: translateY({}px); }} \
         to {{ opacity: {}; transform: translateY({}px); }} }}\n\
         .page, .hero {{ animation: view-enter {}s ease both; }}\n\
         .motion-hero {{ animation: view-enter {}s ease both; }}\n\
         </style>\n",
        enter.from_opacity,
        enter.from_offset_y,
        enter.to_opacity,
        enter.to_offset_y,
        exit.from_opacity,
        exit.from_offset_y,
        exit.to_opacity,
        exit.to_offset_y,
        enter.duration_secs,
        hero.duration_secs,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PageMetadata;

    fn head() -> DocumentHead {
        let mut head = DocumentHead::new("#ffffff", "Лисья Нора");
        head.publish(&PageMetadata::new("Меню — Лисья Нора", "описание меню"));
        head
    }

    #[test]
    fn test_document_carries_head_metadata() {
        let html = render_document(&head(), "<main></main>", &SiteConfig::default());
        assert!(html.contains("<title>Меню — Лисья Нора</title>"));
        assert!(html.contains("name=\"description\" content=\"описание меню\""));
        assert!(html.contains("name=\"theme-color\" content=\"#ffffff\""));
        assert!(html.contains("og:site_name\" content=\"Лисья Нора\""));
    }

    #[test]
    fn test_animations_emit_motion_styles() {
        let html = render_document(&head(), "", &SiteConfig::default());
        assert!(html.contains("@keyframes view-enter"));
        assert!(html.contains("translateY(16px)"));
        assert!(html.contains("translateY(-16px)"));
        assert!(html.contains("0.6s"));
    }

    #[test]
    fn test_disabled_animations_render_instant_swap() {
        let mut config = SiteConfig::default();
        config.animations = false;

        let html = render_document(&head(), "", &config);
        assert!(!html.contains("@keyframes"));
        assert!(!html.contains("<style>"));
    }
}
