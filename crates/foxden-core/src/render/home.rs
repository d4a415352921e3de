use crate::config::SiteConfig;
use crate::model::{PageMetadata, ViewId};
use crate::render::ui::{escape, link_button};
use crate::render::PageRender;

pub(crate) fn metadata() -> PageMetadata {
    PageMetadata::new(
        "Лисья Нора — Домашний ресторан",
        "Домашний ресторан с доставкой: уютная атмосфера, авторская кухня, шашлыки и корпоративные обеды.",
    )
}

/// Home view: full-height hero over the restaurant photo
///
/// The hero copy block carries the slow enter motion; the rest of the
/// page uses the default.
pub(crate) fn page(config: &SiteConfig) -> PageRender {
    let mut out = String::new();

    out.push_str("<section class=\"hero\">");
    out.push_str(&format!(
        "<img class=\"hero-image\" src=\"{}\" alt=\"Домашний ресторан\">",
        escape(&config.hero_image)
    ));
    out.push_str("<div class=\"hero-overlay\"></div>");

    out.push_str("<div class=\"hero-content motion-hero\">");
    out.push_str("<div class=\"badge\">Добро пожаловать домой</div>");
    out.push_str(&format!(
        "<h1>Домашний ресторан «{}»</h1>",
        escape(&config.brand)
    ));
    out.push_str(
        "<p class=\"lede\">Уютное место с авторской кухней и доставкой любимых блюд прямо к вам домой или в офис.</p>",
    );
    out.push_str("<div class=\"actions\">");
    out.push_str(&link_button(
        ViewId::Menu.canonical_path(),
        "Смотреть меню",
        "rounded",
    ));
    out.push_str(&link_button(
        ViewId::Contacts.canonical_path(),
        "Связаться",
        "rounded",
    ));
    out.push_str("</div></div></section>");

    PageRender {
        fragment: out,
        metadata: metadata(),
    }
}
